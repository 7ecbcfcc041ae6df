#![forbid(unsafe_code)]

//! Page-space points and the small set of vector operations the solver needs.

use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A point (or displacement) in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// The zero point.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new position.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Read one coordinate.
    #[inline]
    pub const fn coord(self, coord: Coord) -> f64 {
        match coord {
            Coord::X => self.x,
            Coord::Y => self.y,
        }
    }
}

impl Add for Position {
    type Output = Position;

    #[inline]
    fn add(self, rhs: Position) -> Position {
        add(self, rhs)
    }
}

/// Names one of the two coordinates of a [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coord {
    X,
    Y,
}

#[inline]
pub const fn add(a: Position, b: Position) -> Position {
    Position {
        x: a.x + b.x,
        y: a.y + b.y,
    }
}

#[inline]
pub const fn subtract(a: Position, b: Position) -> Position {
    Position {
        x: a.x - b.x,
        y: a.y - b.y,
    }
}

/// Build a position that sets `line` to `line_value` and the other
/// coordinate to `cross_value`.
///
/// Used to reason about a single axis while carrying (or zeroing) the cross
/// coordinate.
#[inline]
pub const fn patch(line: Coord, line_value: f64, cross_value: f64) -> Position {
    match line {
        Coord::X => Position {
            x: line_value,
            y: cross_value,
        },
        Coord::Y => Position {
            x: cross_value,
            y: line_value,
        },
    }
}
