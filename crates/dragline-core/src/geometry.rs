#![forbid(unsafe_code)]

//! Geometric primitives.

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// One of the four edges of a [`Rect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// One of the two extents of a [`Rect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extent {
    Width,
    Height,
}

/// A rectangle in page coordinates, described by its four edges.
///
/// Coordinates grow right and down (origin at top-left). Width, height and
/// center are always derived from the edges so they can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Rect {
    /// Create a rectangle from its edges.
    #[inline]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create a rectangle from an origin and a size.
    #[inline]
    pub const fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(y, x + width, y + height, x)
    }

    #[inline]
    pub const fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub const fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Midpoint of the rectangle.
    #[inline]
    pub const fn center(&self) -> Position {
        Position {
            x: (self.left + self.right) / 2.0,
            y: (self.top + self.bottom) / 2.0,
        }
    }

    /// Read one edge.
    #[inline]
    pub const fn edge(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    /// Read one extent.
    #[inline]
    pub const fn extent(&self, extent: Extent) -> f64 {
        match extent {
            Extent::Width => self.width(),
            Extent::Height => self.height(),
        }
    }

    /// Check if a point is inside the rectangle. All four edges are inclusive.
    #[inline]
    pub fn contains(&self, point: Position) -> bool {
        is_within(self.left, self.right, point.x) && is_within(self.top, self.bottom, point.y)
    }

    /// Move the rectangle by `offset`.
    #[inline]
    pub const fn translate(&self, offset: Position) -> Rect {
        Rect {
            top: self.top + offset.y,
            right: self.right + offset.x,
            bottom: self.bottom + offset.y,
            left: self.left + offset.x,
        }
    }

    /// Grow the rectangle outward by `sides` (margin box from border box).
    pub const fn outset(&self, sides: Sides) -> Rect {
        Rect {
            top: self.top - sides.top,
            right: self.right + sides.right,
            bottom: self.bottom + sides.bottom,
            left: self.left - sides.left,
        }
    }
}

#[inline]
fn is_within(lower: f64, upper: f64, value: f64) -> bool {
    value >= lower && value <= upper
}

/// Margin thickness on each side of a draggable.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sides {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Sides {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same margin on every side.
    pub const fn all(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }
}

#[cfg(test)]
mod tests {
    use super::{Edge, Extent, Rect, Sides};
    use crate::position::Position;

    #[test]
    fn rect_derives_size_and_center() {
        let rect = Rect::new(10.0, 110.0, 50.0, 20.0);
        assert_eq!(rect.width(), 90.0);
        assert_eq!(rect.height(), 40.0);
        assert_eq!(rect.center(), Position::new(65.0, 30.0));
        assert_eq!(rect.extent(Extent::Width), 90.0);
        assert_eq!(rect.extent(Extent::Height), 40.0);
    }

    #[test]
    fn rect_from_origin_size_matches_edges() {
        let rect = Rect::from_origin_size(2.0, 3.0, 4.0, 5.0);
        assert_eq!(rect, Rect::new(3.0, 6.0, 8.0, 2.0));
        assert_eq!(rect.edge(Edge::Top), 3.0);
        assert_eq!(rect.edge(Edge::Right), 6.0);
        assert_eq!(rect.edge(Edge::Bottom), 8.0);
        assert_eq!(rect.edge(Edge::Left), 2.0);
    }

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::from_origin_size(2.0, 3.0, 4.0, 5.0);
        assert!(rect.contains(Position::new(2.0, 3.0)));
        assert!(rect.contains(Position::new(6.0, 8.0)));
        assert!(!rect.contains(Position::new(6.5, 3.0)));
        assert!(!rect.contains(Position::new(2.0, 8.01)));
    }

    #[test]
    fn rect_translate_moves_every_edge() {
        let rect = Rect::new(0.0, 10.0, 10.0, 0.0);
        assert_eq!(
            rect.translate(Position::new(5.0, -2.0)),
            Rect::new(-2.0, 15.0, 8.0, 5.0)
        );
    }

    #[test]
    fn rect_outset_grows_each_edge() {
        let rect = Rect::new(10.0, 90.0, 50.0, 10.0);
        let outer = rect.outset(Sides::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(outer, Rect::new(9.0, 92.0, 53.0, 6.0));
        assert_eq!(rect.outset(Sides::default()), rect);
        assert_eq!(rect.outset(Sides::all(5.0)), Rect::new(5.0, 95.0, 55.0, 5.0));
    }
}
