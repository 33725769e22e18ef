// src/classifier.rs

//! Per-cell glyph classification.
//!
//! A stroke passing through a cell enters at one point of the cell's unit
//! square and leaves at another. The slope between the two picks a glyph
//! family, and the position of the stroke within the cell picks a glyph from
//! that family. The thresholds below are empirically tuned; keep them exact.

use crate::geometry::UnitPoint;

/// `|slope|` above this is vertical.
pub const VERTICAL_SLOPE: f32 = 3.0;
/// `|slope|` from this (inclusive) up to `VERTICAL_SLOPE` is diagonal.
pub const DIAGONAL_SLOPE: f32 = 0.85;
/// `|slope|` above this and below `DIAGONAL_SLOPE` is a shallow diagonal.
pub const SHALLOW_SLOPE: f32 = 0.35;
/// How close to a side edge a vertical stroke must hug to become a curve.
pub const EDGE_MARGIN: f32 = 0.05;
/// Traversals shorter than this are pruning candidates.
pub const PRUNE_DISTANCE: f32 = 0.5;
/// Pruning threshold in the diagonal bucket.
pub const DIAGONAL_PRUNE_DISTANCE: f32 = 0.7;

const VERTICAL_GLYPH: char = '|';
const LEFT_EDGE_GLYPH: char = '(';
const RIGHT_EDGE_GLYPH: char = ')';
const FALLING_DIAGONAL_GLYPH: char = '\\';
const RISING_DIAGONAL_GLYPH: char = '/';
const SHALLOW_UPPER_GLYPH: char = '`';
const SHALLOW_LOWER_GLYPH: char = ',';

/// Horizontal strokes, indexed by the sixth of the cell they ride in (top first).
pub const HORIZONTAL_BANDS: [char; 6] = ['¯', '⁻', '-', '─', '₋', '_'];

/// The slope family a classified cell fell into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlopeBucket {
    /// Steep stroke through the middle of the cell.
    Vertical,
    /// Steep stroke hugging the left or right edge.
    EdgeCurve,
    Diagonal,
    Shallow,
    Horizontal,
}

/// The result of classifying one cell's entry/exit pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub character: char,
    pub bucket: SlopeBucket,
    /// Euclidean entry-to-exit distance in unit-square space.
    pub traversal: f32,
    /// Advisory: the traversal is too short to be visually significant.
    /// The tracker decides whether the cell is actually removed.
    pub prunable: bool,
}

/// Slope of the segment from `entry` to `exit`, with y growing downward.
///
/// A stationary pair has slope 0; a vertical pair has infinite slope.
pub fn slope(entry: UnitPoint, exit: UnitPoint) -> f32 {
    let rise = exit.y - entry.y;
    let run = exit.x - entry.x;
    if run == 0.0 {
        if rise == 0.0 {
            0.0
        } else {
            f32::INFINITY.copysign(rise)
        }
    } else {
        rise / run
    }
}

/// Picks the bucket for an entry/exit pair.
///
/// Both ends of the diagonal range are inclusive: `|slope| == 0.85` and
/// `|slope| == 3` are diagonal. `|slope| == 0.35` is horizontal.
pub fn bucket_for(entry: UnitPoint, exit: UnitPoint) -> SlopeBucket {
    let magnitude = slope(entry, exit).abs();
    if magnitude > VERTICAL_SLOPE {
        if hugs_left_edge(entry, exit) || hugs_right_edge(entry, exit) {
            SlopeBucket::EdgeCurve
        } else {
            SlopeBucket::Vertical
        }
    } else if magnitude >= DIAGONAL_SLOPE {
        SlopeBucket::Diagonal
    } else if magnitude > SHALLOW_SLOPE {
        SlopeBucket::Shallow
    } else {
        SlopeBucket::Horizontal
    }
}

fn hugs_left_edge(entry: UnitPoint, exit: UnitPoint) -> bool {
    entry.x <= EDGE_MARGIN && exit.x <= EDGE_MARGIN
}

fn hugs_right_edge(entry: UnitPoint, exit: UnitPoint) -> bool {
    entry.x >= 1.0 - EDGE_MARGIN && exit.x >= 1.0 - EDGE_MARGIN
}

/// Classifies a cell from where the stroke entered and where it currently
/// leaves. Pure; called again every time the exit point moves.
pub fn classify(entry: UnitPoint, exit: UnitPoint) -> Classification {
    let bucket = bucket_for(entry, exit);
    let mean_y = (entry.y + exit.y) / 2.0;

    let character = match bucket {
        SlopeBucket::Vertical => VERTICAL_GLYPH,
        SlopeBucket::EdgeCurve => {
            if hugs_left_edge(entry, exit) {
                LEFT_EDGE_GLYPH
            } else {
                RIGHT_EDGE_GLYPH
            }
        }
        SlopeBucket::Diagonal => {
            // Positive slope runs down-right on screen.
            if slope(entry, exit) > 0.0 {
                FALLING_DIAGONAL_GLYPH
            } else {
                RISING_DIAGONAL_GLYPH
            }
        }
        SlopeBucket::Shallow => {
            if mean_y < 0.5 {
                SHALLOW_UPPER_GLYPH
            } else {
                SHALLOW_LOWER_GLYPH
            }
        }
        SlopeBucket::Horizontal => HORIZONTAL_BANDS[horizontal_band(mean_y)],
    };

    let traversal = entry.distance(exit);
    let threshold = if bucket == SlopeBucket::Diagonal {
        DIAGONAL_PRUNE_DISTANCE
    } else {
        PRUNE_DISTANCE
    };

    Classification {
        character,
        bucket,
        traversal,
        prunable: traversal < threshold,
    }
}

/// Maps a mean y in `[0, 1]` to one of six horizontal bands.
fn horizontal_band(mean_y: f32) -> usize {
    let band = (mean_y * HORIZONTAL_BANDS.len() as f32).floor();
    (band.max(0.0) as usize).min(HORIZONTAL_BANDS.len() - 1)
}
