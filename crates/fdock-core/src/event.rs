#![forbid(unsafe_code)]

//! Canonical pointer event types.
//!
//! Hosts translate their native input (DOM pointer events, winit cursor
//! events, terminal mouse reports) into [`PointerEvent`] values before handing
//! them to the dock.
//!
//! # Design Notes
//!
//! - Positions are absolute screen coordinates in logical pixels.
//! - `position` is optional: some hosts emit leave/cancel notifications or
//!   synthetic moves without a coordinate. Consumers decide how to treat a
//!   missing position per event kind.

use crate::geometry::Point;

/// Pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerEventKind,

    /// Absolute position, if the host reported one.
    pub position: Option<Point>,
}

impl PointerEvent {
    /// Create a new pointer event at a position.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            position: Some(Point::new(x, y)),
        }
    }

    /// A pointer move to `(x, y)`.
    #[must_use]
    pub const fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Moved, x, y)
    }

    /// The pointer left the element the host reports on.
    #[must_use]
    pub const fn left() -> Self {
        Self {
            kind: PointerEventKind::Left,
            position: None,
        }
    }

    /// An event without a coordinate.
    #[must_use]
    pub const fn without_position(kind: PointerEventKind) -> Self {
        Self {
            kind,
            position: None,
        }
    }

    /// Whether this is a move event.
    #[must_use]
    pub const fn is_move(&self) -> bool {
        matches!(self.kind, PointerEventKind::Moved)
    }
}

/// Types of pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer moved.
    Moved,

    /// Pointer left the tracked element.
    Left,

    /// Primary button pressed.
    Down,

    /// Primary button released.
    Up,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moved_carries_position() {
        let event = PointerEvent::moved(10.0, 20.0);
        assert!(event.is_move());
        assert_eq!(event.position, Some(Point::new(10.0, 20.0)));
    }

    #[test]
    fn left_has_no_position() {
        let event = PointerEvent::left();
        assert_eq!(event.kind, PointerEventKind::Left);
        assert!(event.position.is_none());
        assert!(!event.is_move());
    }

    #[test]
    fn without_position_keeps_kind() {
        let event = PointerEvent::without_position(PointerEventKind::Moved);
        assert!(event.is_move());
        assert!(event.position.is_none());
    }
}
