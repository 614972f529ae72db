#![forbid(unsafe_code)]

//! Auto-hide visibility state machine.
//!
//! ```text
//!            trigger zone occupied
//!   Hidden ─────────────────────────▶ Visible
//!      ▲                                 │
//!      └─────────────────────────────────┘
//!              pointer left the dock
//! ```
//!
//! Transitions only happen when auto-hide is on. With auto-hide off the
//! dock is always `Visible`.
//!
//! The machine never hit-tests anything itself. The host tells it when the
//! trigger zone (a thin strip at the anchored screen edge, see
//! [`trigger_zone`]) is occupied and when the pointer left the dock.
//!
//! # Invariants
//!
//! 1. Initial state is `Hidden` iff auto-hide is on.
//! 2. With auto-hide off, no input changes the state from `Visible`.
//! 3. Every returned [`VisibilityTransition`] has `from != to`.
//! 4. There is no terminal state.

use fdock_core::geometry::{Edge, Rect};

/// Dock visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Hidden,
    Visible,
}

impl Visibility {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Visible => "visible",
        }
    }
}

/// Why the state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionCause {
    TriggerZoneEntered,
    PointerLeft,
    AutoHideDisabled,
}

impl TransitionCause {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TriggerZoneEntered => "trigger_zone_entered",
            Self::PointerLeft => "pointer_left",
            Self::AutoHideDisabled => "auto_hide_disabled",
        }
    }
}

/// A state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityTransition {
    pub from: Visibility,
    pub to: Visibility,
    pub cause: TransitionCause,
}

/// Default trigger zone thickness in pixels.
pub const DEFAULT_TRIGGER_THICKNESS: f64 = 4.0;

/// The strip along `edge` of `viewport` whose occupancy reveals a hidden dock.
#[must_use]
pub fn trigger_zone(viewport: Rect, edge: Edge, thickness: f64) -> Rect {
    viewport.strip(edge, thickness)
}

/// Two-state auto-hide machine.
#[derive(Debug, Clone)]
pub struct VisibilityMachine {
    auto_hide: bool,
    state: Visibility,
}

impl VisibilityMachine {
    #[must_use]
    pub fn new(auto_hide: bool) -> Self {
        Self {
            auto_hide,
            state: if auto_hide {
                Visibility::Hidden
            } else {
                Visibility::Visible
            },
        }
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> Visibility {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state == Visibility::Visible
    }

    #[inline]
    #[must_use]
    pub fn auto_hide(&self) -> bool {
        self.auto_hide
    }

    /// Trigger zone occupancy changed.
    pub fn on_trigger_zone(&mut self, occupied: bool) -> Option<VisibilityTransition> {
        if self.auto_hide && occupied && self.state == Visibility::Hidden {
            return self.transition(Visibility::Visible, TransitionCause::TriggerZoneEntered);
        }
        None
    }

    /// The pointer left the dock's bounding region.
    pub fn on_dock_leave(&mut self) -> Option<VisibilityTransition> {
        if self.auto_hide && self.state == Visibility::Visible {
            return self.transition(Visibility::Hidden, TransitionCause::PointerLeft);
        }
        None
    }

    /// Toggle auto-hide at runtime.
    ///
    /// Turning it off reveals the dock. Turning it on keeps the current
    /// state; a visible dock hides on the next leave.
    pub fn set_auto_hide(&mut self, auto_hide: bool) -> Option<VisibilityTransition> {
        self.auto_hide = auto_hide;
        if !auto_hide && self.state == Visibility::Hidden {
            return self.transition(Visibility::Visible, TransitionCause::AutoHideDisabled);
        }
        None
    }

    fn transition(&mut self, to: Visibility, cause: TransitionCause) -> Option<VisibilityTransition> {
        let from = self.state;
        self.state = to;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "dock.visibility",
            from = from.as_str(),
            to = to.as_str(),
            cause = cause.as_str()
        );
        Some(VisibilityTransition { from, to, cause })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_follows_auto_hide() {
        assert_eq!(VisibilityMachine::new(true).state(), Visibility::Hidden);
        assert_eq!(VisibilityMachine::new(false).state(), Visibility::Visible);
    }

    #[test]
    fn trigger_then_leave_cycles() {
        let mut m = VisibilityMachine::new(true);
        let t = m.on_trigger_zone(true).unwrap();
        assert_eq!(t.from, Visibility::Hidden);
        assert_eq!(t.to, Visibility::Visible);
        assert_eq!(t.cause, TransitionCause::TriggerZoneEntered);

        let t = m.on_dock_leave().unwrap();
        assert_eq!(t.to, Visibility::Hidden);
        assert_eq!(t.cause, TransitionCause::PointerLeft);

        // And again: no terminal state.
        assert!(m.on_trigger_zone(true).is_some());
        assert!(m.is_visible());
    }

    #[test]
    fn redundant_signals_are_noops() {
        let mut m = VisibilityMachine::new(true);
        assert!(m.on_dock_leave().is_none());
        assert!(m.on_trigger_zone(false).is_none());
        m.on_trigger_zone(true);
        assert!(m.on_trigger_zone(true).is_none());
        // Leaving the trigger zone alone does not hide the dock.
        assert!(m.on_trigger_zone(false).is_none());
        assert!(m.is_visible());
    }

    #[test]
    fn without_auto_hide_always_visible() {
        let mut m = VisibilityMachine::new(false);
        assert!(m.on_dock_leave().is_none());
        assert!(m.on_trigger_zone(true).is_none());
        assert!(m.on_trigger_zone(false).is_none());
        assert!(m.on_dock_leave().is_none());
        assert_eq!(m.state(), Visibility::Visible);
    }

    #[test]
    fn disabling_auto_hide_reveals() {
        let mut m = VisibilityMachine::new(true);
        let t = m.set_auto_hide(false).unwrap();
        assert_eq!(t.cause, TransitionCause::AutoHideDisabled);
        assert!(m.is_visible());
        assert!(m.on_dock_leave().is_none());
    }

    #[test]
    fn enabling_auto_hide_keeps_visible_until_leave() {
        let mut m = VisibilityMachine::new(false);
        assert!(m.set_auto_hide(true).is_none());
        assert!(m.is_visible());
        assert!(m.on_dock_leave().is_some());
        assert!(!m.is_visible());
    }

    #[test]
    fn trigger_zone_sits_on_anchor_edge() {
        let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
        let zone = trigger_zone(viewport, Edge::Bottom, DEFAULT_TRIGGER_THICKNESS);
        assert_eq!(zone, Rect::new(0.0, 796.0, 1280.0, 4.0));
    }
}
