#![forbid(unsafe_code)]

//! Per-frame engine output.

use fdock_core::geometry::Edge;

use crate::item::ItemId;
use crate::visibility::Visibility;

/// One interactive item's state after a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFrame {
    pub id: ItemId,
    /// Rendered size in pixels; apply this to the item's width and height.
    pub size: f64,
    /// Size the item is heading toward.
    pub target: f64,
    pub at_rest: bool,
}

/// Label to show next to the hovered item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelHint {
    pub id: ItemId,
    pub text: String,
    /// Side of the item the label sits on.
    pub side: Edge,
}

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DockFrame {
    /// Frame counter, starting at 1 for the first tick.
    pub index: u64,
    /// Interactive items in list order. Separators are not listed.
    pub items: Vec<ItemFrame>,
    pub hovered: Option<ItemId>,
    pub label: Option<LabelHint>,
    pub visibility: Visibility,
    /// `false` once every item is at rest; the host may stop ticking until
    /// the next pointer event.
    pub needs_frame: bool,
}

impl DockFrame {
    /// Rendered size of `id` in this frame.
    #[must_use]
    pub fn size_of(&self, id: &ItemId) -> Option<f64> {
        self.items.iter().find(|f| &f.id == id).map(|f| f.size)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
