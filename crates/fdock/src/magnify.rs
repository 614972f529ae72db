#![forbid(unsafe_code)]

//! Distance to target size mapping.
//!
//! A symmetric "tent" centred on each item:
//!
//! ```text
//!  size
//!  peak ┤      /\
//!       │     /  \
//!  base ┼────/    \────
//!       └───┴──┴───┴─── distance
//!        -range 0 +range
//! ```
//!
//! # Invariants
//!
//! 1. `target(0) == base * scale` when active.
//! 2. `target(d) == base` for every `|d| >= range`, including `±∞` and NaN.
//! 3. `target` is non-increasing in `|d|`.
//! 4. Items are independent: there is no shared magnification budget, so
//!    neighbours may be enlarged at the same time.
//!
//! # Failure Modes
//!
//! - `range <= 0` or non-finite: magnification is switched off rather than
//!   dividing by zero.
//! - `scale < 1` or NaN: clamped to `1.0` (no magnification).

/// Piecewise-linear magnification curve for one dock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnifier {
    base: f64,
    peak: f64,
    range: f64,
}

impl Magnifier {
    /// Build a curve. `enabled = false` yields a flat curve at `base`.
    #[must_use]
    pub fn new(base: f64, scale: f64, range: f64, enabled: bool) -> Self {
        let usable = enabled && range.is_finite() && range > 0.0;
        if !usable {
            return Self::disabled(base);
        }
        let scale = if scale.is_nan() { 1.0 } else { scale.max(1.0) };
        Self {
            base,
            peak: base * scale,
            range,
        }
    }

    /// A flat curve: every distance maps to `base`.
    #[must_use]
    pub const fn disabled(base: f64) -> Self {
        Self {
            base,
            peak: base,
            range: 0.0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn base(&self) -> f64 {
        self.base
    }

    /// Size at zero distance.
    #[inline]
    #[must_use]
    pub const fn peak(&self) -> f64 {
        self.peak
    }

    /// Falloff radius; `0.0` when disabled.
    #[inline]
    #[must_use]
    pub const fn range(&self) -> f64 {
        self.range
    }

    /// Whether any distance can produce a size above `base`.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.range > 0.0 && self.peak > self.base
    }

    /// Target size for a signed pointer distance.
    #[must_use]
    pub fn target(&self, distance: f64) -> f64 {
        let d = distance.abs();
        // Negated comparison so NaN falls through to base.
        if !self.is_active() || !(d < self.range) {
            return self.base;
        }
        let falloff = 1.0 - d / self.range;
        self.base + (self.peak - self.base) * falloff
    }
}
