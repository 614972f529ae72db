#![forbid(unsafe_code)]

//! Geometric primitives in logical pixels.
//!
//! Coordinates follow screen conventions: origin at top-left, `x` grows to
//! the right and `y` grows downward. All values are `f64` so that pointer
//! positions and interpolated sizes never lose precision to rounding.

/// A point in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate of this point along `axis`.
    #[inline]
    pub const fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

/// A screen axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Left to right (`x`).
    #[default]
    Horizontal,
    /// Top to bottom (`y`).
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// One of the four screen edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// The edge on the other side of the screen.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// The axis this edge runs along.
    ///
    /// The bottom edge of a rectangle runs horizontally; the left edge runs
    /// vertically.
    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Horizontal,
            Self::Left | Self::Right => Axis::Vertical,
        }
    }
}

/// A rectangle for container bounds, item extents, and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f64,
    /// Top edge (inclusive).
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle. Negative sizes are clamped to zero.
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Left edge (alias for x).
    #[inline]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Centre point.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Start coordinate along `axis`.
    #[inline]
    pub const fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Extent (width or height) along `axis`.
    #[inline]
    pub const fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.right()
            && point.y >= self.y
            && point.y < self.bottom()
    }

    /// Compute the intersection with another rectangle, returning `None` if no overlap.
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Create a new rectangle inside the current one with the given margin.
    pub fn inner(&self, margin: Sides) -> Rect {
        Rect::new(
            self.x + margin.left,
            self.y + margin.top,
            self.width - margin.horizontal_sum(),
            self.height - margin.vertical_sum(),
        )
    }

    /// A strip of `thickness` pixels hugging `edge` on the inside.
    ///
    /// The thickness is clamped to the rectangle's own extent.
    pub fn strip(&self, edge: Edge, thickness: f64) -> Rect {
        let t = thickness.max(0.0);
        match edge {
            Edge::Top => Rect::new(self.x, self.y, self.width, t.min(self.height)),
            Edge::Bottom => {
                let h = t.min(self.height);
                Rect::new(self.x, self.bottom() - h, self.width, h)
            }
            Edge::Left => Rect::new(self.x, self.y, t.min(self.width), self.height),
            Edge::Right => {
                let w = t.min(self.width);
                Rect::new(self.right() - w, self.y, w, self.height)
            }
        }
    }
}

/// Sides for padding/margin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sides {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Sides {
    /// Create new sides with equal values.
    pub const fn all(val: f64) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub fn horizontal_sum(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[inline]
    pub fn vertical_sum(&self) -> f64 {
        self.top + self.bottom
    }
}

impl From<f64> for Sides {
    fn from(val: f64) -> Self {
        Self::all(val)
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, Edge, Point, Rect, Sides};

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(2.0, 3.0, 4.0, 5.0);
        assert!(rect.contains(Point::new(2.0, 3.0)));
        assert!(rect.contains(Point::new(5.9, 7.9)));
        assert!(!rect.contains(Point::new(6.0, 3.0)));
        assert!(!rect.contains(Point::new(2.0, 8.0)));
    }

    #[test]
    fn rect_negative_size_clamped() {
        let rect = Rect::new(0.0, 0.0, -3.0, 4.0);
        assert_eq!(rect.width, 0.0);
        assert!(rect.is_empty());
    }

    #[test]
    fn rect_intersection_overlaps() {
        let a = Rect::new(0.0, 0.0, 4.0, 4.0);
        let b = Rect::new(2.0, 2.0, 4.0, 4.0);
        assert_eq!(a.intersection_opt(&b), Some(Rect::new(2.0, 2.0, 2.0, 2.0)));
        assert_eq!(a.intersection_opt(&Rect::new(5.0, 5.0, 1.0, 1.0)), None);
    }

    #[test]
    fn rect_union_covers_both() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(3.0, 1.0, 2.0, 4.0);
        assert_eq!(a.union(&b), Rect::new(0.0, 0.0, 5.0, 5.0));
    }

    #[test]
    fn rect_inner_reduces() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let inner = rect.inner(Sides {
            top: 1.0,
            right: 2.0,
            bottom: 3.0,
            left: 4.0,
        });
        assert_eq!(inner, Rect::new(4.0, 1.0, 4.0, 6.0));
    }

    #[test]
    fn strip_hugs_each_edge() {
        let screen = Rect::new(0.0, 0.0, 800.0, 600.0);
        assert_eq!(
            screen.strip(Edge::Bottom, 4.0),
            Rect::new(0.0, 596.0, 800.0, 4.0)
        );
        assert_eq!(screen.strip(Edge::Left, 4.0), Rect::new(0.0, 0.0, 4.0, 600.0));
        assert_eq!(
            screen.strip(Edge::Right, 4.0),
            Rect::new(796.0, 0.0, 4.0, 600.0)
        );
        assert_eq!(screen.strip(Edge::Top, 900.0).height, 600.0);
    }

    #[test]
    fn axis_projection() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(p.along(Axis::Horizontal), 10.0);
        assert_eq!(p.along(Axis::Vertical), 20.0);
        assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
    }

    #[test]
    fn rect_axis_accessors() {
        let r = Rect::new(5.0, 7.0, 100.0, 60.0);
        assert_eq!(r.start(Axis::Horizontal), 5.0);
        assert_eq!(r.start(Axis::Vertical), 7.0);
        assert_eq!(r.extent(Axis::Horizontal), 100.0);
        assert_eq!(r.extent(Axis::Vertical), 60.0);
        assert_eq!(r.center(), Point::new(55.0, 37.0));
    }

    #[test]
    fn edge_axis_and_opposite() {
        assert_eq!(Edge::Bottom.axis(), Axis::Horizontal);
        assert_eq!(Edge::Left.axis(), Axis::Vertical);
        assert_eq!(Edge::Left.opposite(), Edge::Right);
        assert_eq!(Edge::Top.opposite(), Edge::Bottom);
    }
}
