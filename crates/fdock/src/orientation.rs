#![forbid(unsafe_code)]

//! Orientation to axis/edge mapping.
//!
//! Every axis-dependent step of the pipeline asks this table which screen
//! axis is primary instead of branching on orientation itself, so the
//! distance and magnification math is written once.
//!
//! | orientation | primary axis | anchored edge | flex direction | tooltip side |
//! |-------------|--------------|---------------|----------------|--------------|
//! | bottom      | horizontal   | bottom        | row            | top          |
//! | left        | vertical     | left          | column         | right        |
//! | right       | vertical     | right         | column         | left         |

use fdock_core::geometry::{Axis, Edge};
use serde::{Deserialize, Serialize};

/// Screen edge the dock is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Bottom,
    Left,
    Right,
}

/// Item flow direction inside the dock container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlexDirection {
    Row,
    Column,
}

/// Axis semantics derived from an [`Orientation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientationLayout {
    /// Axis along which pointer-to-item distance is measured.
    pub primary_axis: Axis,
    /// Screen edge the dock hugs; the auto-hide trigger zone sits here.
    pub anchor_edge: Edge,
    pub flex_direction: FlexDirection,
    /// Side of an item on which its label/tooltip appears.
    pub tooltip_side: Edge,
}

impl Orientation {
    /// All supported orientations.
    pub const ALL: [Orientation; 3] = [Self::Bottom, Self::Left, Self::Right];

    #[must_use]
    pub const fn layout(self) -> OrientationLayout {
        match self {
            Self::Bottom => OrientationLayout {
                primary_axis: Axis::Horizontal,
                anchor_edge: Edge::Bottom,
                flex_direction: FlexDirection::Row,
                tooltip_side: Edge::Top,
            },
            Self::Left => OrientationLayout {
                primary_axis: Axis::Vertical,
                anchor_edge: Edge::Left,
                flex_direction: FlexDirection::Column,
                tooltip_side: Edge::Right,
            },
            Self::Right => OrientationLayout {
                primary_axis: Axis::Vertical,
                anchor_edge: Edge::Right,
                flex_direction: FlexDirection::Column,
                tooltip_side: Edge::Left,
            },
        }
    }

    #[inline]
    #[must_use]
    pub const fn primary_axis(self) -> Axis {
        self.layout().primary_axis
    }

    #[inline]
    #[must_use]
    pub const fn anchor_edge(self) -> Edge {
        self.layout().anchor_edge
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_is_horizontal_row() {
        let l = Orientation::Bottom.layout();
        assert_eq!(l.primary_axis, Axis::Horizontal);
        assert_eq!(l.anchor_edge, Edge::Bottom);
        assert_eq!(l.flex_direction, FlexDirection::Row);
        assert_eq!(l.tooltip_side, Edge::Top);
    }

    #[test]
    fn side_docks_are_vertical_columns() {
        for o in [Orientation::Left, Orientation::Right] {
            let l = o.layout();
            assert_eq!(l.primary_axis, Axis::Vertical);
            assert_eq!(l.flex_direction, FlexDirection::Column);
        }
    }

    #[test]
    fn tooltip_points_away_from_anchor() {
        for o in Orientation::ALL {
            let l = o.layout();
            assert_eq!(l.tooltip_side, l.anchor_edge.opposite(), "{o:?}");
        }
    }

    #[test]
    fn anchor_edge_runs_along_primary_axis() {
        for o in Orientation::ALL {
            assert_eq!(o.anchor_edge().axis(), o.primary_axis(), "{o:?}");
        }
    }

    #[test]
    fn serde_lowercase() {
        let o: Orientation = serde_json::from_str("\"right\"").unwrap();
        assert_eq!(o, Orientation::Right);
        assert_eq!(serde_json::to_string(&Orientation::Left).unwrap(), "\"left\"");
    }
}
