#![forbid(unsafe_code)]

//! Elapsed-time measurement between animation ticks.
//!
//! Hosts that drive the dock from a refresh-aligned callback (requestAnimationFrame,
//! a compositor frame clock, an event loop tick) call [`FrameClock::tick`] once
//! per frame and forward the returned `Duration` to the engine.
//!
//! # Invariants
//!
//! 1. The first tick after construction or [`reset`](FrameClock::reset)
//!    returns `Duration::ZERO`.
//! 2. Returned deltas never exceed `max_delta`, so a stalled frame (tab in
//!    background, debugger pause) cannot produce a huge integration step.
//! 3. A clock that goes backwards yields `Duration::ZERO`, not a panic.

use std::time::Duration;

pub use web_time::Instant;

/// Default cap on a single frame delta (100ms).
pub const DEFAULT_MAX_DELTA: Duration = Duration::from_millis(100);

/// Measures time between consecutive frames.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    max_delta: Duration,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a clock with the default delta cap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: None,
            max_delta: DEFAULT_MAX_DELTA,
        }
    }

    /// Set the delta cap (builder pattern).
    #[must_use]
    pub fn with_max_delta(mut self, max_delta: Duration) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Delta cap.
    #[inline]
    #[must_use]
    pub fn max_delta(&self) -> Duration {
        self.max_delta
    }

    /// Record a frame now and return the time since the previous one.
    pub fn tick(&mut self) -> Duration {
        self.tick_at(Instant::now())
    }

    /// Record a frame at `now` and return the time since the previous one.
    pub fn tick_at(&mut self, now: Instant) -> Duration {
        let delta = match self.last {
            Some(last) => now.checked_duration_since(last).unwrap_or(Duration::ZERO),
            None => Duration::ZERO,
        };
        self.last = Some(now);
        delta.min(self.max_delta)
    }

    /// Forget the previous frame. The next tick returns zero.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick_at(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn measures_delta_between_ticks() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now();
        clock.tick_at(t0);
        assert_eq!(
            clock.tick_at(t0 + Duration::from_millis(16)),
            Duration::from_millis(16)
        );
    }

    #[test]
    fn caps_large_delta() {
        let mut clock = FrameClock::new().with_max_delta(Duration::from_millis(33));
        let t0 = Instant::now();
        clock.tick_at(t0);
        assert_eq!(
            clock.tick_at(t0 + Duration::from_secs(5)),
            Duration::from_millis(33)
        );
    }

    #[test]
    fn backwards_time_is_zero() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now() + Duration::from_secs(1);
        clock.tick_at(t0);
        assert_eq!(clock.tick_at(t0 - Duration::from_millis(10)), Duration::ZERO);
    }

    #[test]
    fn reset_restarts_measurement() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now();
        clock.tick_at(t0);
        clock.reset();
        assert_eq!(
            clock.tick_at(t0 + Duration::from_millis(50)),
            Duration::ZERO
        );
    }
}
