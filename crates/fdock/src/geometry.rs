#![forbid(unsafe_code)]

//! Item geometry registry.
//!
//! The engine never caches item positions across frames: layout can shift
//! between frames (items grow, the window resizes, items are added). Each
//! frame it asks a [`GeometrySource`] for every interactive item's rectangle
//! exactly once and freezes the answers in a [`GeometrySnapshot`]. All
//! distance and hover computations for that frame read the snapshot, so no
//! item sees a layout the others did not.
//!
//! Hosts with a real layout engine implement [`GeometrySource`] over their
//! measured rectangles; any `Fn(&ItemId) -> Option<Rect>` closure already
//! is one. Hosts without one can use [`StackedLayout`], which lays items out
//! along the primary axis from their current rendered sizes.

use ahash::AHashMap;
use fdock_core::geometry::{Axis, Edge, Rect};

use crate::item::{DockItem, ItemId};
use crate::orientation::Orientation;

/// Live item measurements.
pub trait GeometrySource {
    /// On-screen rectangle of `id`, or `None` if it is not laid out yet.
    fn item_rect(&self, id: &ItemId) -> Option<Rect>;
}

impl<F> GeometrySource for F
where
    F: Fn(&ItemId) -> Option<Rect>,
{
    fn item_rect(&self, id: &ItemId) -> Option<Rect> {
        self(id)
    }
}

/// One item's measurement for the current frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemGeometry {
    pub id: ItemId,
    pub rect: Rect,
    /// Centre along the primary axis.
    pub center: f64,
}

impl ItemGeometry {
    /// Whether `coordinate` on the primary axis falls within this item.
    #[must_use]
    pub fn spans(&self, axis: Axis, coordinate: f64) -> bool {
        let start = self.rect.start(axis);
        coordinate >= start && coordinate < start + self.rect.extent(axis)
    }
}

/// Geometry of every measured interactive item, frozen for one frame.
#[derive(Debug, Clone, Default)]
pub struct GeometrySnapshot {
    axis: Axis,
    entries: Vec<ItemGeometry>,
    index: AHashMap<ItemId, usize>,
}

impl GeometrySnapshot {
    /// Read geometry for all interactive items, in item order.
    ///
    /// Separators and unmeasured items are left out.
    pub fn capture<G>(items: &[DockItem], source: &G, axis: Axis) -> Self
    where
        G: GeometrySource + ?Sized,
    {
        let mut entries = Vec::with_capacity(items.len());
        let mut index = AHashMap::with_capacity(items.len());
        for item in items.iter().filter(|item| item.is_interactive()) {
            if index.contains_key(item.id()) {
                continue;
            }
            if let Some(rect) = source.item_rect(item.id()) {
                let center = rect.start(axis) + rect.extent(axis) / 2.0;
                index.insert(item.id().clone(), entries.len());
                entries.push(ItemGeometry {
                    id: item.id().clone(),
                    rect,
                    center,
                });
            }
        }
        Self {
            axis,
            entries,
            index,
        }
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&ItemGeometry> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    /// Primary-axis centre of `id`.
    #[must_use]
    pub fn center(&self, id: &ItemId) -> Option<f64> {
        self.get(id).map(|g| g.center)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemGeometry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The item spanning `coordinate` on the primary axis.
    ///
    /// When magnified neighbours overlap, the one whose centre is closest
    /// wins.
    #[must_use]
    pub fn item_at(&self, coordinate: f64) -> Option<&ItemGeometry> {
        self.entries
            .iter()
            .filter(|g| g.spans(self.axis, coordinate))
            .min_by(|a, b| {
                let da = (a.center - coordinate).abs();
                let db = (b.center - coordinate).abs();
                da.total_cmp(&db)
            })
    }
}

/// Default spacing between adjacent items.
pub const DEFAULT_GAP: f64 = 8.0;
/// Default inset between the container edge and the first/last item.
pub const DEFAULT_PADDING: f64 = 8.0;
/// Default main-axis thickness of a separator.
pub const DEFAULT_SEPARATOR_THICKNESS: f64 = 1.0;

/// Headless flex-style layout along the primary axis.
///
/// Items are packed in order with a fixed gap, centred along the primary
/// axis of the container, and aligned to the anchored edge on the cross
/// axis (a bottom dock grows upward, a left dock grows rightward).
#[derive(Debug, Clone)]
pub struct StackedLayout {
    container: Rect,
    orientation: Orientation,
    gap: f64,
    padding: f64,
    separator_thickness: f64,
    rects: AHashMap<ItemId, Rect>,
}

impl StackedLayout {
    #[must_use]
    pub fn new(container: Rect, orientation: Orientation) -> Self {
        Self {
            container,
            orientation,
            gap: DEFAULT_GAP,
            padding: DEFAULT_PADDING,
            separator_thickness: DEFAULT_SEPARATOR_THICKNESS,
            rects: AHashMap::new(),
        }
    }

    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap.max(0.0);
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    #[must_use]
    pub fn with_separator_thickness(mut self, thickness: f64) -> Self {
        self.separator_thickness = thickness.max(0.0);
        self
    }

    #[must_use]
    pub fn container(&self) -> Rect {
        self.container
    }

    pub fn set_container(&mut self, container: Rect) {
        self.container = container;
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Lay out `items` using `size_of` for each interactive item's square
    /// size. Replaces the previous arrangement.
    pub fn arrange(&mut self, items: &[DockItem], size_of: impl Fn(&ItemId) -> f64) {
        let layout = self.orientation.layout();
        let axis = layout.primary_axis;
        let cross = axis.cross();

        let extents: Vec<f64> = items
            .iter()
            .map(|item| {
                if item.is_separator() {
                    self.separator_thickness
                } else {
                    size_of(item.id()).max(0.0)
                }
            })
            .collect();
        let gaps = self.gap * extents.len().saturating_sub(1) as f64;
        let total: f64 = extents.iter().sum::<f64>() + gaps;

        let mut cursor =
            self.container.start(axis) + (self.container.extent(axis) - total) / 2.0;
        let cross_start = self.container.start(cross);
        let cross_extent = self.container.extent(cross);

        self.rects.clear();
        for (item, &main) in items.iter().zip(&extents) {
            let cross_size = if item.is_separator() {
                (cross_extent - 2.0 * self.padding).max(0.0)
            } else {
                main
            };
            let cross_pos = match layout.anchor_edge {
                Edge::Bottom | Edge::Right => {
                    cross_start + cross_extent - self.padding - cross_size
                }
                Edge::Top | Edge::Left => cross_start + self.padding,
            };
            let rect = match axis {
                Axis::Horizontal => Rect::new(cursor, cross_pos, main, cross_size),
                Axis::Vertical => Rect::new(cross_pos, cursor, cross_size, main),
            };
            self.rects.insert(item.id().clone(), rect);
            cursor += main + self.gap;
        }
    }

    /// Main-axis length of the arranged items including padding.
    #[must_use]
    pub fn content_extent(&self) -> f64 {
        let axis = self.orientation.primary_axis();
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for rect in self.rects.values() {
            lo = lo.min(rect.start(axis));
            hi = hi.max(rect.start(axis) + rect.extent(axis));
        }
        if lo > hi {
            0.0
        } else {
            hi - lo + 2.0 * self.padding
        }
    }
}

impl GeometrySource for StackedLayout {
    fn item_rect(&self, id: &ItemId) -> Option<Rect> {
        self.rects.get(id).copied()
    }
}
