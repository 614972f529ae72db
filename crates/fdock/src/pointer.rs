#![forbid(unsafe_code)]

//! Pointer tracking along the dock's primary axis.
//!
//! [`PointerTracker`] turns the host's pointer stream into one scalar: where
//! the pointer is along the primary axis, or that it is not over the dock at
//! all.
//!
//! # Invariants
//!
//! 1. A `Left` event always publishes [`PointerSample::Absent`].
//! 2. A positioned event outside the container bounds publishes `Absent`.
//!    Without bounds, every positioned event counts as over the dock (the
//!    host only forwards events that hit the container).
//! 3. Events without a finite coordinate (other than `Left`) are dropped
//!    and leave the sample unchanged.
//! 4. Changing the axis re-projects the last known point, so the sample
//!    stays consistent with the new orientation without waiting for motion.

use fdock_core::event::{PointerEvent, PointerEventKind};
use fdock_core::geometry::{Axis, Point, Rect};

/// Pointer position along the primary axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerSample {
    Present(f64),
    /// Pointer is outside the dock.
    #[default]
    Absent,
}

impl PointerSample {
    #[inline]
    #[must_use]
    pub const fn coordinate(self) -> Option<f64> {
        match self {
            Self::Present(c) => Some(c),
            Self::Absent => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Present(_))
    }
}

/// What a single event did to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerUpdate {
    /// The published sample changed.
    pub changed: bool,
    /// The pointer left the dock: an explicit leave, or a move that took a
    /// present pointer out of bounds.
    pub left: bool,
    /// The event was ignored.
    pub dropped: bool,
}

/// Projects pointer events onto the primary axis.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    axis: Axis,
    sample: PointerSample,
    last_point: Option<Point>,
}

impl PointerTracker {
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            sample: PointerSample::Absent,
            last_point: None,
        }
    }

    /// Current sample.
    #[inline]
    #[must_use]
    pub fn sample(&self) -> PointerSample {
        self.sample
    }

    /// Last in-bounds point, in screen coordinates.
    #[inline]
    #[must_use]
    pub fn last_point(&self) -> Option<Point> {
        self.last_point
    }

    #[inline]
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Switch the primary axis and re-project the last known point.
    pub fn set_axis(&mut self, axis: Axis) {
        self.axis = axis;
        self.sample = match self.last_point {
            Some(p) => PointerSample::Present(p.along(axis)),
            None => PointerSample::Absent,
        };
    }

    /// Feed one event. `bounds` is the dock container's bounding box.
    pub fn handle(&mut self, event: &PointerEvent, bounds: Option<Rect>) -> PointerUpdate {
        if event.kind == PointerEventKind::Left {
            let was_present = self.sample.is_present();
            self.clear();
            return PointerUpdate {
                changed: was_present,
                left: true,
                dropped: false,
            };
        }

        let Some(point) = event.position.filter(|p| p.x.is_finite() && p.y.is_finite()) else {
            return PointerUpdate {
                dropped: true,
                ..PointerUpdate::default()
            };
        };

        let previous = self.sample;
        if bounds.is_none_or(|b| b.contains(point)) {
            self.last_point = Some(point);
            self.sample = PointerSample::Present(point.along(self.axis));
        } else {
            self.clear();
        }

        PointerUpdate {
            changed: previous != self.sample,
            left: previous.is_present() && !self.sample.is_present(),
            dropped: false,
        }
    }

    /// Forget the pointer.
    pub fn clear(&mut self) {
        self.sample = PointerSample::Absent;
        self.last_point = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Option<Rect> {
        Some(Rect::new(100.0, 500.0, 400.0, 80.0))
    }

    #[test]
    fn starts_absent() {
        let t = PointerTracker::new(Axis::Horizontal);
        assert_eq!(t.sample(), PointerSample::Absent);
        assert_eq!(t.sample().coordinate(), None);
    }

    #[test]
    fn projects_on_horizontal_axis() {
        let mut t = PointerTracker::new(Axis::Horizontal);
        let u = t.handle(&PointerEvent::moved(250.0, 540.0), bounds());
        assert!(u.changed);
        assert_eq!(t.sample(), PointerSample::Present(250.0));
    }

    #[test]
    fn projects_on_vertical_axis() {
        let mut t = PointerTracker::new(Axis::Vertical);
        t.handle(&PointerEvent::moved(250.0, 540.0), bounds());
        assert_eq!(t.sample(), PointerSample::Present(540.0));
    }

    #[test]
    fn leave_publishes_absent() {
        let mut t = PointerTracker::new(Axis::Horizontal);
        t.handle(&PointerEvent::moved(250.0, 540.0), bounds());
        let u = t.handle(&PointerEvent::left(), bounds());
        assert!(u.left);
        assert!(u.changed);
        assert_eq!(t.sample(), PointerSample::Absent);
        assert_eq!(t.last_point(), None);
    }

    #[test]
    fn leave_when_already_absent_still_reports_left() {
        let mut t = PointerTracker::new(Axis::Horizontal);
        let u = t.handle(&PointerEvent::left(), bounds());
        assert!(u.left);
        assert!(!u.changed);
    }

    #[test]
    fn out_of_bounds_move_is_absent_and_counts_as_leave() {
        let mut t = PointerTracker::new(Axis::Horizontal);
        t.handle(&PointerEvent::moved(250.0, 540.0), bounds());
        let u = t.handle(&PointerEvent::moved(250.0, 100.0), bounds());
        assert!(u.left);
        assert_eq!(t.sample(), PointerSample::Absent);

        // Moving around outside while already absent is not another leave.
        let u = t.handle(&PointerEvent::moved(10.0, 10.0), bounds());
        assert!(!u.left);
        assert!(!u.changed);
    }

    #[test]
    fn malformed_events_dropped() {
        let mut t = PointerTracker::new(Axis::Horizontal);
        t.handle(&PointerEvent::moved(250.0, 540.0), bounds());
        let u = t.handle(
            &PointerEvent::without_position(PointerEventKind::Moved),
            bounds(),
        );
        assert!(u.dropped);
        assert_eq!(t.sample(), PointerSample::Present(250.0));

        let u = t.handle(&PointerEvent::moved(f64::NAN, 540.0), bounds());
        assert!(u.dropped);
        assert_eq!(t.sample(), PointerSample::Present(250.0));
    }

    #[test]
    fn no_bounds_accepts_everything() {
        let mut t = PointerTracker::new(Axis::Horizontal);
        t.handle(&PointerEvent::moved(-5000.0, 12.0), None);
        assert_eq!(t.sample(), PointerSample::Present(-5000.0));
    }

    #[test]
    fn set_axis_reprojects() {
        let mut t = PointerTracker::new(Axis::Horizontal);
        t.handle(&PointerEvent::moved(250.0, 540.0), bounds());
        t.set_axis(Axis::Vertical);
        assert_eq!(t.sample(), PointerSample::Present(540.0));
    }
}
