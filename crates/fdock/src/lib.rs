#![forbid(unsafe_code)]

//! Headless engine for a magnifying application dock.
//!
//! The dock is a row (or column) of items anchored to a screen edge. Items
//! near the pointer grow along a tent-shaped curve and ease there with a
//! spring; an optional auto-hide mode tucks the dock away until the pointer
//! reaches the anchored edge.
//!
//! This crate owns the state and the math. The host owns rendering, layout
//! measurement and the event loop: it forwards pointer events, calls
//! [`Dock::tick`] once per frame with a [`GeometrySource`], and draws the
//! returned [`DockFrame`].
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use fdock::{Dock, DockConfig, DockItem, StackedLayout, Orientation};
//! use fdock_core::event::PointerEvent;
//! use fdock_core::geometry::Rect;
//!
//! let items = vec![
//!     DockItem::new("home", "Home").href("/"),
//!     DockItem::new("mail", "Mail").href("/mail"),
//! ];
//! let mut dock = Dock::new(DockConfig::default(), items);
//! let mut layout = StackedLayout::new(Rect::new(0.0, 0.0, 400.0, 80.0), Orientation::Bottom);
//!
//! dock.handle_pointer(&PointerEvent::moved(170.0, 40.0));
//! layout.arrange(dock.items(), |id| dock.size_of(id).unwrap_or(52.0));
//! let frame = dock.tick(Duration::from_millis(16), &layout);
//! assert!(frame.needs_frame);
//! ```

pub mod activation;
pub mod config;
pub mod distance;
pub mod engine;
pub mod frame;
pub mod geometry;
pub mod item;
pub mod magnify;
pub mod motion;
pub mod orientation;
pub mod pointer;
pub mod visibility;

pub use activation::{Activation, IgnoreReason, Navigator, NoNavigation};
pub use config::{ConfigError, DockConfig, DockOptions, DockSize, MotionParams};
pub use engine::Dock;
pub use frame::{DockFrame, ItemFrame, LabelHint};
pub use geometry::{GeometrySnapshot, GeometrySource, StackedLayout};
pub use item::{Badge, DockItem, IconRef, ItemId};
pub use magnify::Magnifier;
pub use orientation::{FlexDirection, Orientation, OrientationLayout};
pub use pointer::{PointerSample, PointerTracker};
pub use visibility::{TransitionCause, Visibility, VisibilityMachine, VisibilityTransition};
