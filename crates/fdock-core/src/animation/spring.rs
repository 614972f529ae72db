#![forbid(unsafe_code)]

//! Damped harmonic oscillator (spring) with mass.
//!
//! Smooths a value toward a moving target without discontinuous jumps:
//!
//!   m·a = -stiffness × (position - target) - damping × velocity
//!
//! # Parameters
//!
//! - **mass** (m): Inertia. Lower = more responsive. Default 1.0.
//! - **stiffness** (k): Restoring force strength. Higher = faster response.
//! - **damping** (c): Velocity drag, compared against the critical value
//!   `2·√(k·m)`:
//!   - Underdamped (c < 2√(km)): oscillates past target before settling
//!   - Critically damped (c = 2√(km)): fastest convergence without overshoot
//!   - Overdamped (c > 2√(km)): slower convergence, no overshoot
//! - **rest_threshold** / **velocity_threshold**: once both the distance to
//!   target and the speed drop below these, the spring snaps to the target
//!   and stops integrating.
//!
//! # Integration
//!
//! Semi-implicit Euler. [`advance`](Spring::advance) takes the elapsed time,
//! not a frame count, and subdivides it into steps of at most 4ms, so the
//! trajectory is the same at 30, 60, or 144 frames per second.
//!
//! # Invariants
//!
//! 1. `position()` is the raw, unclamped value; `value()` is progress from
//!    the initial value toward the target, clamped to [0.0, 1.0].
//! 2. A spring at rest never moves until `set_target()`, `impulse()`,
//!    `snap_to()`, or `reset()` is called.
//! 3. While at rest, a target change within `rest_threshold` is ignored.
//! 4. Mass, stiffness and both rest thresholds are always positive, damping
//!    never negative (clamped by the builders).
//!
//! # Failure Modes
//!
//! - Zero damping: the spring oscillates forever and never reports rest.
//! - Non-finite targets are not filtered here; callers own their inputs.

use std::time::Duration;

use super::Animation;

/// Maximum dt per integration step (4ms).
const MAX_STEP_SECS: f64 = 0.004;

/// Default rest threshold.
const DEFAULT_REST_THRESHOLD: f64 = 0.001;

/// Default velocity threshold.
const DEFAULT_VELOCITY_THRESHOLD: f64 = 0.01;

const MIN_STIFFNESS: f64 = 0.1;
const MIN_MASS: f64 = 0.001;
/// Floor for both rest thresholds; a zero threshold never settles.
const MIN_THRESHOLD: f64 = 1e-6;

/// A damped harmonic oscillator producing physically-based motion.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use fdock_core::animation::Spring;
///
/// let mut spring = Spring::new(52.0, 78.0)
///     .with_mass(0.1)
///     .with_stiffness(150.0)
///     .with_damping(12.0)
///     .with_rest_threshold(0.5);
///
/// spring.advance(Duration::from_secs(2));
/// assert!((spring.position() - 78.0).abs() < 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    initial: f64,
    mass: f64,
    stiffness: f64,
    damping: f64,
    rest_threshold: f64,
    velocity_threshold: f64,
    at_rest: bool,
}

impl Spring {
    /// Create a spring starting at `initial` and targeting `target`.
    ///
    /// Default parameters: mass = 1.0, stiffness = 170.0, damping = 26.0.
    #[must_use]
    pub fn new(initial: f64, target: f64) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            target,
            initial,
            mass: 1.0,
            stiffness: 170.0,
            damping: 26.0,
            rest_threshold: DEFAULT_REST_THRESHOLD,
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            at_rest: false,
        }
    }

    /// A spring sitting at `value` with nothing to do.
    #[must_use]
    pub fn resting(value: f64) -> Self {
        let mut spring = Self::new(value, value);
        spring.at_rest = true;
        spring
    }

    /// Set mass (builder pattern). Clamped to a small positive minimum.
    #[must_use]
    pub fn with_mass(mut self, m: f64) -> Self {
        self.mass = m.max(MIN_MASS);
        self
    }

    /// Set stiffness (builder pattern). Clamped to minimum 0.1.
    #[must_use]
    pub fn with_stiffness(mut self, k: f64) -> Self {
        self.stiffness = k.max(MIN_STIFFNESS);
        self
    }

    /// Set damping (builder pattern). Clamped to minimum 0.0.
    #[must_use]
    pub fn with_damping(mut self, c: f64) -> Self {
        self.damping = c.max(0.0);
        self
    }

    /// Set rest threshold (builder pattern). Clamped to a small positive
    /// minimum.
    #[must_use]
    pub fn with_rest_threshold(mut self, threshold: f64) -> Self {
        self.rest_threshold = threshold.abs().max(MIN_THRESHOLD);
        self
    }

    /// Set velocity threshold (builder pattern). Clamped to a small positive
    /// minimum.
    #[must_use]
    pub fn with_velocity_threshold(mut self, threshold: f64) -> Self {
        self.velocity_threshold = threshold.abs().max(MIN_THRESHOLD);
        self
    }

    /// Current position (unclamped).
    #[inline]
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Current velocity.
    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Current target.
    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    #[must_use]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    #[must_use]
    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    #[inline]
    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    #[inline]
    #[must_use]
    pub fn rest_threshold(&self) -> f64 {
        self.rest_threshold
    }

    /// Whether the spring has settled at the target.
    #[inline]
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Damping coefficient at which this spring is critically damped.
    #[must_use]
    pub fn critical_damping(&self) -> f64 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Damping ratio ζ = c / c_critical. `>= 1.0` means no overshoot.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / self.critical_damping()
    }

    /// Change the target.
    ///
    /// A moving spring always takes the new target. A resting spring only
    /// wakes if the target moved by more than the rest threshold.
    pub fn set_target(&mut self, target: f64) {
        if !self.at_rest {
            self.target = target;
        } else if (self.target - target).abs() > self.rest_threshold {
            self.target = target;
            self.at_rest = false;
        }
    }

    /// Apply an impulse (add to velocity). Wakes the spring.
    pub fn impulse(&mut self, velocity_delta: f64) {
        self.velocity += velocity_delta;
        self.at_rest = false;
    }

    /// Jump straight to `value` and rest there.
    pub fn snap_to(&mut self, value: f64) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
        self.at_rest = true;
    }

    fn step(&mut self, dt: f64) {
        let displacement = self.position - self.target;
        let force = -self.stiffness * displacement - self.damping * self.velocity;
        let acceleration = force / self.mass;

        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }

    /// Advance the spring by `dt`, subdividing for stability.
    pub fn advance(&mut self, dt: Duration) {
        if self.at_rest {
            return;
        }

        let total_secs = dt.as_secs_f64();
        if total_secs <= 0.0 {
            return;
        }

        let mut remaining = total_secs;
        while remaining > 0.0 {
            let step_dt = remaining.min(MAX_STEP_SECS);
            self.step(step_dt);
            remaining -= step_dt;
            if self.settle_if_close() {
                return;
            }
        }
    }

    fn settle_if_close(&mut self) -> bool {
        let pos_delta = (self.position - self.target).abs();
        if pos_delta < self.rest_threshold && self.velocity.abs() < self.velocity_threshold {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
        self.at_rest
    }
}

impl Animation for Spring {
    fn tick(&mut self, dt: Duration) {
        self.advance(dt);
    }

    fn is_complete(&self) -> bool {
        self.at_rest
    }

    /// Progress from the initial value toward the target, clamped to [0.0, 1.0].
    fn value(&self) -> f32 {
        let span = self.target - self.initial;
        if span.abs() < f64::EPSILON {
            return if self.at_rest { 1.0 } else { 0.0 };
        }
        (((self.position - self.initial) / span) as f32).clamp(0.0, 1.0)
    }

    fn reset(&mut self) {
        self.position = self.initial;
        self.velocity = 0.0;
        self.at_rest = false;
    }
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// Spring configurations used across the dock.
pub mod presets {
    use super::Spring;

    /// Item magnification: light mass, overdamped (ζ ≈ 1.55). No visible
    /// overshoot, settles within a few hundred milliseconds.
    #[must_use]
    pub fn magnify(initial: f64) -> Spring {
        Spring::new(initial, initial)
            .with_mass(0.1)
            .with_stiffness(150.0)
            .with_damping(12.0)
    }

    /// Critically damped spring for unit mass and stiffness `k`.
    #[must_use]
    pub fn critical(initial: f64, target: f64, k: f64) -> Spring {
        let spring = Spring::new(initial, target).with_stiffness(k);
        let c = spring.critical_damping();
        spring.with_damping(c)
    }

    /// Low stiffness, visible bounce. Used for show/hide slides.
    #[must_use]
    pub fn bouncy(initial: f64, target: f64) -> Spring {
        Spring::new(initial, target)
            .with_stiffness(300.0)
            .with_damping(10.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
