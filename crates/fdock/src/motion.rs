#![forbid(unsafe_code)]

//! Per-item size smoothing.
//!
//! [`MotionSmoother`] owns one [`Spring`] per interactive item, keyed by
//! [`ItemId`]. The magnifier says where each item *should* be; the smoother
//! decides where it *is* this frame.
//!
//! # Invariants
//!
//! 1. Exactly the interactive items of the last [`sync`](MotionSmoother::sync)
//!    have motion state. Separators never do.
//! 2. A newly added item starts at the base size with zero velocity.
//! 3. A removed item's state is dropped immediately; later ticks never touch
//!    it, and other items' states are unaffected.
//! 4. Items at rest are skipped by [`advance`](MotionSmoother::advance).
//!    Once every item is at rest, [`is_settled`](MotionSmoother::is_settled)
//!    is `true` and the host can stop scheduling frames.
//!
//! # Failure Modes
//!
//! - Duplicate item ids share one motion state.
//! - Setting a target for an unknown id is ignored (returns `false`).

use std::time::Duration;

use ahash::{AHashMap, AHashSet};
use fdock_core::animation::Spring;

use crate::config::MotionParams;
use crate::item::{DockItem, ItemId};

/// Result of reconciling motion state with a new item list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub added: Vec<ItemId>,
    pub removed: Vec<ItemId>,
}

impl SyncReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Spring registry for all items of one dock.
#[derive(Debug, Clone)]
pub struct MotionSmoother {
    params: MotionParams,
    base: f64,
    states: AHashMap<ItemId, Spring>,
}

impl MotionSmoother {
    #[must_use]
    pub fn new(params: MotionParams, base: f64) -> Self {
        Self {
            params,
            base,
            states: AHashMap::new(),
        }
    }

    #[must_use]
    pub fn params(&self) -> MotionParams {
        self.params
    }

    #[must_use]
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Add state for new interactive items and drop state for items that
    /// are gone.
    pub fn sync(&mut self, items: &[DockItem]) -> SyncReport {
        let live: AHashSet<&ItemId> = items
            .iter()
            .filter(|item| item.is_interactive())
            .map(DockItem::id)
            .collect();

        let mut report = SyncReport::default();
        self.states.retain(|id, _| {
            let keep = live.contains(id);
            if !keep {
                report.removed.push(id.clone());
            }
            keep
        });
        for item in items.iter().filter(|item| item.is_interactive()) {
            if !self.states.contains_key(item.id()) {
                self.states
                    .insert(item.id().clone(), self.params.spring(self.base));
                report.added.push(item.id().clone());
            }
        }
        report.removed.sort();
        report
    }

    /// Insert fresh state for `id`. Returns `false` if it already existed.
    pub fn insert(&mut self, id: ItemId) -> bool {
        if self.states.contains_key(&id) {
            return false;
        }
        self.states.insert(id, self.params.spring(self.base));
        true
    }

    /// Drop state for `id`. Returns `false` if there was none.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        self.states.remove(id).is_some()
    }

    /// Point `id` at a new target size.
    pub fn set_target(&mut self, id: &ItemId, target: f64) -> bool {
        match self.states.get_mut(id) {
            Some(spring) => {
                spring.set_target(target);
                true
            }
            None => false,
        }
    }

    /// Integrate every moving item by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        for spring in self.states.values_mut() {
            if !spring.is_at_rest() {
                spring.advance(dt);
            }
        }
    }

    /// Rendered size of `id`.
    #[must_use]
    pub fn size(&self, id: &ItemId) -> Option<f64> {
        self.states.get(id).map(Spring::position)
    }

    #[must_use]
    pub fn velocity(&self, id: &ItemId) -> Option<f64> {
        self.states.get(id).map(Spring::velocity)
    }

    #[must_use]
    pub fn target(&self, id: &ItemId) -> Option<f64> {
        self.states.get(id).map(Spring::target)
    }

    #[must_use]
    pub fn is_at_rest(&self, id: &ItemId) -> Option<bool> {
        self.states.get(id).map(Spring::is_at_rest)
    }

    /// Every item is at rest.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.states.values().all(Spring::is_at_rest)
    }

    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.states.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Drop all state (dock unmounted).
    pub fn clear(&mut self) {
        self.states.clear();
    }

    /// Change the base size. Every item is pointed at the new base; the
    /// next frame re-targets magnified ones.
    pub fn set_base(&mut self, base: f64) {
        self.base = base;
        for spring in self.states.values_mut() {
            spring.set_target(base);
        }
    }

    /// Swap spring constants, keeping each item's position, velocity and
    /// target.
    pub fn set_params(&mut self, params: MotionParams) {
        self.params = params;
        for spring in self.states.values_mut() {
            let mut next = params.spring(spring.position());
            if !spring.is_at_rest() {
                next.impulse(spring.velocity());
                next.set_target(spring.target());
            }
            *spring = next;
        }
    }
}
