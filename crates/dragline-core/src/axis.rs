#![forbid(unsafe_code)]

//! Direction-agnostic access to list geometry.
//!
//! Every droppable orders its children along one axis. An [`Axis`] names the
//! coordinate that ordering happens on (`line`), the orthogonal coordinate
//! (`cross_line`), the leading and trailing edges along the line, and the
//! extent measured along it. Downstream code reads geometry through the axis
//! and never branches on [`Direction`] itself.

use serde::{Deserialize, Serialize};

use crate::geometry::{Edge, Extent, Rect};
use crate::position::{self, Coord, Position};

/// The direction a list is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Left to right.
    Horizontal,
}

impl Direction {
    /// The axis record for this direction.
    #[inline]
    pub const fn axis(self) -> Axis {
        Axis::for_direction(self)
    }
}

/// Accessor labels for one layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Axis {
    pub direction: Direction,
    pub line: Coord,
    pub cross_line: Coord,
    pub start: Edge,
    pub end: Edge,
    pub size: Extent,
}

pub const VERTICAL: Axis = Axis {
    direction: Direction::Vertical,
    line: Coord::Y,
    cross_line: Coord::X,
    start: Edge::Top,
    end: Edge::Bottom,
    size: Extent::Height,
};

pub const HORIZONTAL: Axis = Axis {
    direction: Direction::Horizontal,
    line: Coord::X,
    cross_line: Coord::Y,
    start: Edge::Left,
    end: Edge::Right,
    size: Extent::Width,
};

impl Axis {
    #[inline]
    pub const fn for_direction(direction: Direction) -> Axis {
        match direction {
            Direction::Vertical => VERTICAL,
            Direction::Horizontal => HORIZONTAL,
        }
    }

    /// Coordinate of `point` along the line.
    #[inline]
    pub const fn line_of(&self, point: Position) -> f64 {
        point.coord(self.line)
    }

    /// Coordinate of `point` along the cross line.
    #[inline]
    pub const fn cross_of(&self, point: Position) -> f64 {
        point.coord(self.cross_line)
    }

    /// Leading edge of `rect` along the line.
    #[inline]
    pub const fn start_of(&self, rect: &Rect) -> f64 {
        rect.edge(self.start)
    }

    /// Trailing edge of `rect` along the line.
    #[inline]
    pub const fn end_of(&self, rect: &Rect) -> f64 {
        rect.edge(self.end)
    }

    /// Extent of `rect` along the line.
    #[inline]
    pub const fn size_of(&self, rect: &Rect) -> f64 {
        rect.extent(self.size)
    }

    /// A displacement along the line only.
    #[inline]
    pub const fn patch(&self, line_value: f64) -> Position {
        position::patch(self.line, line_value, 0.0)
    }

    /// A point with `line_value` on the line and `cross_value` on the cross line.
    #[inline]
    pub const fn patch_with_cross(&self, line_value: f64, cross_value: f64) -> Position {
        position::patch(self.line, line_value, cross_value)
    }
}
