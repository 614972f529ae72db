#![forbid(unsafe_code)]

//! Core: geometry, pointer events, and spring animation for FrankenDock.
//!
//! # Role in FrankenDock
//! `fdock-core` holds the host-independent primitives the dock engine is
//! built from. Nothing here knows about docks or items; it only knows about
//! pixels, pointers, and time.
//!
//! # Primary responsibilities
//! - **Geometry**: `Point`, `Rect`, `Axis`, and `Edge` in logical pixels.
//! - **Event**: canonical pointer events delivered by the host input system.
//! - **Animation**: the `Animation` trait and a damped, mass-aware `Spring`.
//! - **FrameClock**: elapsed-time measurement between animation ticks.
//!
//! # How it fits in the system
//! The engine (`fdock`) consumes `fdock-core::event::PointerEvent` values and
//! drives one `Spring` per dock item. Hosts that already measure frame time
//! can skip `FrameClock` and hand `Duration`s to the engine directly.

pub mod animation;
pub mod event;
pub mod frame_clock;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
