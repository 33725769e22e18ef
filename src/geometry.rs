// src/geometry.rs

//! Grid and sub-cell coordinates.
//!
//! A [`Cell`] is a discrete (row, column) position in the character grid.
//! Rows grow downward, columns grow rightward, and both are signed: nothing in
//! the rasterizer clips against the drawing surface, so strokes and lines may
//! wander into negative coordinates and the compositor decides what survives.
//!
//! A [`UnitPoint`] is a position inside a single cell's local unit square,
//! with `(0, 0)` at the cell's top-left corner and `(1, 1)` at its
//! bottom-right corner.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A discrete position in the character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Row (y), 0-based, growing downward.
    pub row: i32,
    /// Column (x), 0-based, growing rightward.
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns this cell shifted by the given row/column deltas.
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Chebyshev distance: the number of king moves between two cells.
    pub fn chebyshev(self, other: Cell) -> i32 {
        (self.row - other.row)
            .abs()
            .max((self.col - other.col).abs())
    }

    /// True if `other` is one of the eight cells surrounding `self`.
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.chebyshev(other) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A position within a cell's unit square. Both components lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UnitPoint {
    pub x: f32,
    pub y: f32,
}

impl UnitPoint {
    /// Centre of the unit square.
    pub const MIDPOINT: UnitPoint = UnitPoint { x: 0.5, y: 0.5 };

    /// Builds a point, clamping both components into the unit square.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
        }
    }

    /// Euclidean distance to `other` in unit-square space.
    pub fn distance(self, other: UnitPoint) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Mirrors the point across the cell's vertical centre line.
    pub fn flip_x(self) -> Self {
        Self {
            x: 1.0 - self.x,
            y: self.y,
        }
    }

    /// Mirrors the point across the cell's horizontal centre line.
    pub fn flip_y(self) -> Self {
        Self {
            x: self.x,
            y: 1.0 - self.y,
        }
    }
}
