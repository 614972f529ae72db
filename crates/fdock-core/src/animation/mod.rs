#![forbid(unsafe_code)]

//! Time-driven animation primitives.
//!
//! Everything here advances by an explicit elapsed `Duration`; nothing reads
//! a clock on its own. That keeps animation deterministic under test and
//! frame-rate independent in production.

pub mod spring;

use std::time::Duration;

pub use spring::{Spring, presets};

/// A value that evolves over time.
pub trait Animation {
    /// Advance by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has finished and further ticks are no-ops.
    fn is_complete(&self) -> bool;

    /// Normalized progress in `[0.0, 1.0]`.
    fn value(&self) -> f32;

    /// Return to the initial state.
    fn reset(&mut self);
}
