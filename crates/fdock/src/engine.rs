#![forbid(unsafe_code)]

//! The dock engine: one object per mounted dock.
//!
//! [`Dock`] wires the stages together in a fixed order, once per frame:
//!
//! ```text
//! pointer events ──▶ PointerTracker ──▶ sample ─┐
//!                                               ▼
//! GeometrySource ──▶ GeometrySnapshot ──▶ distance ──▶ Magnifier ──▶ target
//!                                                                      │
//!                           DockFrame ◀── MotionSmoother::advance ◀────┘
//! ```
//!
//! Pointer events only update the tracker. All layout reads and all motion
//! happen in [`Dock::tick`], so a frame sees one consistent pointer sample
//! and one geometry snapshot no matter how many events arrived in between.
//!
//! # Invariants
//!
//! 1. Every interactive item has exactly one motion state; separators have
//!    none. [`Dock::set_items`] reconciles state with the new list.
//! 2. Each tick reads the pointer sample once and each item's geometry once.
//! 3. An absent pointer or disabled magnification drives every target to the
//!    base size.
//! 4. Visibility changes only through pointer leaves, trigger-zone signals,
//!    and auto-hide reconfiguration.
//!
//! # Failure Modes
//!
//! - An item the geometry source cannot measure targets the base size.
//! - A tick with no interactive items is a no-op that reports
//!   `needs_frame = false`.
//! - Activating an unknown id, a separator, or clicking empty space is
//!   reported as [`Activation::Ignored`], never as an error.

use std::time::Duration;

use fdock_core::event::{PointerEvent, PointerEventKind};
use fdock_core::geometry::{Point, Rect};

use crate::activation::{self, Activation, IgnoreReason, Navigator};
use crate::config::DockConfig;
use crate::distance::distance_to;
use crate::frame::{DockFrame, ItemFrame, LabelHint};
use crate::geometry::{GeometrySnapshot, GeometrySource};
use crate::item::{DockItem, ItemId};
use crate::magnify::Magnifier;
use crate::motion::{MotionSmoother, SyncReport};
use crate::pointer::{PointerSample, PointerTracker};
use crate::visibility::{Visibility, VisibilityMachine, VisibilityTransition};

/// A mounted dock.
///
/// Dropping the `Dock` discards every item's motion state.
#[derive(Debug)]
pub struct Dock {
    config: DockConfig,
    magnifier: Magnifier,
    items: Vec<DockItem>,
    tracker: PointerTracker,
    motion: MotionSmoother,
    visibility: VisibilityMachine,
    bounds: Option<Rect>,
    hovered: Option<ItemId>,
    frames: u64,
}

impl Dock {
    /// Mount a dock. Every item starts at rest at the base size.
    #[must_use]
    pub fn new(config: DockConfig, items: Vec<DockItem>) -> Self {
        let mut motion = MotionSmoother::new(config.motion(), config.base_size());
        motion.sync(&items);
        Self {
            magnifier: config.magnifier(),
            tracker: PointerTracker::new(config.orientation().primary_axis()),
            visibility: VisibilityMachine::new(config.auto_hide()),
            config,
            items,
            motion,
            bounds: None,
            hovered: None,
            frames: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &DockConfig {
        &self.config
    }

    #[must_use]
    pub fn items(&self) -> &[DockItem] {
        &self.items
    }

    /// First item with `id`.
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&DockItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    #[must_use]
    pub fn magnifier(&self) -> Magnifier {
        self.magnifier
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility.state()
    }

    #[must_use]
    pub fn pointer(&self) -> PointerSample {
        self.tracker.sample()
    }

    /// Item under the pointer as of the last tick.
    #[must_use]
    pub fn hovered(&self) -> Option<&ItemId> {
        self.hovered.as_ref()
    }

    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Number of ticks so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Set the container's bounding box. Positioned pointer events outside
    /// it count as the pointer leaving. With no bounds, every positioned
    /// event is treated as over the dock.
    pub fn set_bounds(&mut self, bounds: Option<Rect>) {
        self.bounds = bounds;
    }

    /// Replace the item list. New interactive items start at the base size;
    /// removed ones lose their motion state immediately.
    pub fn set_items(&mut self, items: Vec<DockItem>) -> SyncReport {
        let report = self.motion.sync(&items);
        self.items = items;
        if self
            .hovered
            .as_ref()
            .is_some_and(|id| !self.motion.contains(id))
        {
            self.hovered = None;
        }
        #[cfg(feature = "tracing")]
        if !report.is_empty() {
            tracing::debug!(
                message = "dock.items",
                added = report.added.len(),
                removed = report.removed.len(),
                total = self.motion.len()
            );
        }
        report
    }

    /// Apply a new configuration without remounting.
    ///
    /// Item motion continues from where it is. An orientation change
    /// re-projects the last pointer position onto the new primary axis.
    pub fn set_config(&mut self, config: DockConfig) -> Option<VisibilityTransition> {
        let previous = std::mem::replace(&mut self.config, config);
        let axis = self.config.orientation().primary_axis();
        if self.tracker.axis() != axis {
            self.tracker.set_axis(axis);
        }
        if previous.base_size() != self.config.base_size() {
            self.motion.set_base(self.config.base_size());
        }
        if previous.motion() != self.config.motion() {
            self.motion.set_params(self.config.motion());
        }
        self.magnifier = self.config.magnifier();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "dock.config",
            orientation = self.config.orientation().as_str(),
            base = self.config.base_size(),
            magnification = self.magnifier.is_active()
        );
        if previous.auto_hide() != self.config.auto_hide() {
            return self.visibility.set_auto_hide(self.config.auto_hide());
        }
        None
    }

    /// Feed one pointer event.
    ///
    /// Returns a transition when the event made an auto-hiding dock hide.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Option<VisibilityTransition> {
        let update = self.tracker.handle(event, self.bounds);
        if update.left {
            self.hovered = None;
            return self.visibility.on_dock_leave();
        }
        None
    }

    /// Report whether the pointer is inside the auto-hide trigger zone.
    pub fn set_trigger_zone(&mut self, occupied: bool) -> Option<VisibilityTransition> {
        self.visibility.on_trigger_zone(occupied)
    }

    /// Target sizes for the current pointer sample, in item order, without
    /// advancing motion.
    #[must_use]
    pub fn target_sizes<G>(&self, geometry: &G) -> Vec<(ItemId, f64)>
    where
        G: GeometrySource + ?Sized,
    {
        let snapshot =
            GeometrySnapshot::capture(&self.items, geometry, self.config.orientation().primary_axis());
        let sample = self.tracker.sample();
        self.items
            .iter()
            .filter(|item| item.is_interactive())
            .map(|item| {
                let distance = distance_to(sample, snapshot.center(item.id()));
                (item.id().clone(), self.magnifier.target(distance))
            })
            .collect()
    }

    /// Run one frame: snapshot geometry, retarget every item, advance motion
    /// by `dt`, and report what to draw.
    pub fn tick<G>(&mut self, dt: Duration, geometry: &G) -> DockFrame
    where
        G: GeometrySource + ?Sized,
    {
        self.frames += 1;
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("dock.tick", frame = self.frames).entered();

        if self.motion.is_empty() {
            self.hovered = None;
            return DockFrame {
                index: self.frames,
                items: Vec::new(),
                hovered: None,
                label: None,
                visibility: self.visibility.state(),
                needs_frame: false,
            };
        }

        let sample = self.tracker.sample();
        let snapshot =
            GeometrySnapshot::capture(&self.items, geometry, self.config.orientation().primary_axis());

        for item in self.items.iter().filter(|item| item.is_interactive()) {
            let distance = distance_to(sample, snapshot.center(item.id()));
            self.motion
                .set_target(item.id(), self.magnifier.target(distance));
        }
        self.motion.advance(dt);

        self.hovered = sample
            .coordinate()
            .and_then(|c| snapshot.item_at(c))
            .map(|g| g.id.clone());

        let items = self
            .items
            .iter()
            .filter(|item| item.is_interactive())
            .filter_map(|item| {
                let id = item.id();
                Some(ItemFrame {
                    id: id.clone(),
                    size: self.motion.size(id)?,
                    target: self.motion.target(id)?,
                    at_rest: self.motion.is_at_rest(id)?,
                })
            })
            .collect();

        DockFrame {
            index: self.frames,
            items,
            hovered: self.hovered.clone(),
            label: self.label_hint(),
            visibility: self.visibility.state(),
            needs_frame: !self.motion.is_settled(),
        }
    }

    fn label_hint(&self) -> Option<LabelHint> {
        if !self.config.show_labels() {
            return None;
        }
        let item = self.item(self.hovered.as_ref()?)?;
        Some(LabelHint {
            id: item.id().clone(),
            text: item.label().to_owned(),
            side: self.config.layout().tooltip_side,
        })
    }

    /// Rendered size of `id` right now.
    #[must_use]
    pub fn size_of(&self, id: &ItemId) -> Option<f64> {
        self.motion.size(id)
    }

    /// Every item is at rest; the host may stop ticking.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.motion.is_settled()
    }

    /// Activate the item with `id`.
    pub fn activate<N>(&self, id: &ItemId, navigator: &mut N) -> Activation
    where
        N: Navigator + ?Sized,
    {
        match self.item(id) {
            Some(item) => activation::activate(item, navigator),
            None => Activation::Ignored(IgnoreReason::UnknownItem),
        }
    }

    /// Resolve a pointer release to an item and activate it.
    ///
    /// Only `Up` events activate. The hit test uses the full item rectangle;
    /// where magnified items overlap, the one whose centre is closest along
    /// the primary axis wins.
    pub fn click<G, N>(&self, event: &PointerEvent, geometry: &G, navigator: &mut N) -> Activation
    where
        G: GeometrySource + ?Sized,
        N: Navigator + ?Sized,
    {
        if !self.visibility.is_visible() {
            return Activation::Ignored(IgnoreReason::Hidden);
        }
        if event.kind != PointerEventKind::Up {
            return Activation::Ignored(IgnoreReason::NoTarget);
        }
        let Some(point) = event.position.filter(|p| p.x.is_finite() && p.y.is_finite()) else {
            return Activation::Ignored(IgnoreReason::NoTarget);
        };
        match self.hit_test(point, geometry) {
            Some(id) => self.activate(&id, navigator),
            None => Activation::Ignored(IgnoreReason::NoTarget),
        }
    }

    fn hit_test<G>(&self, point: Point, geometry: &G) -> Option<ItemId>
    where
        G: GeometrySource + ?Sized,
    {
        let axis = self.config.orientation().primary_axis();
        let coordinate = point.along(axis);
        let snapshot = GeometrySnapshot::capture(&self.items, geometry, axis);
        snapshot
            .iter()
            .filter(|g| g.rect.contains(point))
            .min_by(|a, b| {
                let da = (a.center - coordinate).abs();
                let db = (b.center - coordinate).abs();
                da.total_cmp(&db)
            })
            .map(|g| g.id.clone())
    }
}
