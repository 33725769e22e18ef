// src/interpolate.rs

//! Fills in the cells a fast pointer skipped over.
//!
//! When two consecutive samples land in non-adjacent cells, the cells between
//! them are recovered with a discrete line traversal. The traversal is then
//! split into runs: consecutive cells that advance along the dominant axis
//! while sharing the same minor-axis coordinate. Each run climbs exactly one
//! unit on the minor axis, so within a run the line enters each cell a little
//! further along the minor axis than the previous one. That gives every
//! interpolated cell an entry and exit point the classifier can work with.

use crate::geometry::{Cell, UnitPoint};
use log::trace;
use std::ops::Range;

/// The axis along which a traversal advances on every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

/// A cell recovered by interpolation, with the points where the line
/// crosses into and out of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolatedCell {
    pub cell: Cell,
    pub entry: UnitPoint,
    pub exit: UnitPoint,
}

/// Dominant axis of the line from `from` to `to`. Ties go to columns.
pub fn dominant_axis(from: Cell, to: Cell) -> Axis {
    if (to.row - from.row).abs() > (to.col - from.col).abs() {
        Axis::Row
    } else {
        Axis::Col
    }
}

/// Discrete 8-connected traversal from `from` to `to`, both included.
///
/// The set of cells does not depend on direction: the line is always
/// rasterized from the smaller endpoint and reversed when needed, so
/// `traverse(a, b)` is `traverse(b, a)` backwards.
pub fn traverse(from: Cell, to: Cell) -> Vec<Cell> {
    if from <= to {
        bresenham(from, to)
    } else {
        let mut cells = bresenham(to, from);
        cells.reverse();
        cells
    }
}

fn bresenham(from: Cell, to: Cell) -> Vec<Cell> {
    let dx = (to.col - from.col).abs();
    let dy = (to.row - from.row).abs();
    let sx = if from.col < to.col { 1 } else { -1 };
    let sy = if from.row < to.row { 1 } else { -1 };
    let mut err = dx - dy;

    let mut cells = Vec::with_capacity(dx.max(dy) as usize + 1);
    let (mut x, mut y) = (from.col, from.row);
    loop {
        cells.push(Cell::new(y, x));
        if x == to.col && y == to.row {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
    cells
}

/// Splits a traversal into runs of cells sharing the minor-axis coordinate.
/// Order follows the traversal.
fn runs(cells: &[Cell], dominant: Axis) -> Vec<Range<usize>> {
    let minor = |c: &Cell| match dominant {
        Axis::Col => c.row,
        Axis::Row => c.col,
    };

    let mut out = Vec::new();
    let mut start = 0;
    for i in 1..=cells.len() {
        if i == cells.len() || minor(&cells[i]) != minor(&cells[start]) {
            out.push(start..i);
            start = i;
        }
    }
    out
}

/// Interpolates the cells between `from` and `to`.
///
/// `inclusive_start` / `inclusive_end` control whether the endpoints
/// themselves are part of the output. A zero-length line yields nothing:
/// a stroke that never left its cell is the caller's single-cell case.
pub fn interpolate(
    from: Cell,
    to: Cell,
    inclusive_start: bool,
    inclusive_end: bool,
) -> Vec<InterpolatedCell> {
    if from == to {
        trace!("interpolate: zero-length line at {}, nothing to fill", from);
        return Vec::new();
    }

    let cells = traverse(from, to);
    let d_row = to.row - from.row;
    let d_col = to.col - from.col;
    let dominant = dominant_axis(from, to);
    let last = cells.len() - 1;

    let mut out = Vec::with_capacity(cells.len());
    for run in runs(&cells, dominant) {
        let first = cells[run.start];
        let tail = cells[run.end - 1];

        // Corner-to-corner across the run: the major extent reaches the far
        // side of its last cell, and the minor extent is the single unit the
        // line climbs over the run.
        let major_extent = match dominant {
            Axis::Col => (tail.col - first.col).abs() + 1,
            Axis::Row => (tail.row - first.row).abs() + 1,
        } as f32;
        let minor_extent = if d_row == 0 || d_col == 0 { 0.0 } else { 1.0 };
        let run_slope = minor_extent / major_extent;

        for (pos, index) in run.clone().enumerate() {
            if (index == 0 && !inclusive_start) || (index == last && !inclusive_end) {
                continue;
            }
            let (entry, exit) = crossing(pos as f32, run_slope, dominant, d_row, d_col);
            out.push(InterpolatedCell {
                cell: cells[index],
                entry,
                exit,
            });
        }
    }

    trace!(
        "interpolate {} -> {}: {} of {} traversal cells emitted",
        from,
        to,
        out.len(),
        cells.len()
    );
    out
}

/// Entry/exit of the `pos`-th cell within a run.
///
/// Worked out for a line travelling right and down, then mirrored for the
/// actual direction of travel.
fn crossing(pos: f32, run_slope: f32, dominant: Axis, d_row: i32, d_col: i32) -> (UnitPoint, UnitPoint) {
    let (entry, exit) = if d_row == 0 {
        (UnitPoint::new(0.0, 0.5), UnitPoint::new(1.0, 0.5))
    } else if d_col == 0 {
        (UnitPoint::new(0.5, 0.0), UnitPoint::new(0.5, 1.0))
    } else {
        let minor_in = pos * run_slope;
        let minor_out = (pos + 1.0) * run_slope;
        match dominant {
            Axis::Col => (UnitPoint::new(0.0, minor_in), UnitPoint::new(1.0, minor_out)),
            Axis::Row => (UnitPoint::new(minor_in, 0.0), UnitPoint::new(minor_out, 1.0)),
        }
    };

    let orient = |p: UnitPoint| {
        let p = if d_col < 0 { p.flip_x() } else { p };
        if d_row < 0 {
            p.flip_y()
        } else {
            p
        }
    };
    (orient(entry), orient(exit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{classify, SlopeBucket};
    use std::collections::BTreeSet;
    use test_log::test;

    fn cells_of(out: &[InterpolatedCell]) -> Vec<Cell> {
        out.iter().map(|ic| ic.cell).collect()
    }

    #[test]
    fn test_traverse_includes_both_endpoints() {
        let path = traverse(Cell::new(0, 0), Cell::new(2, 8));
        assert_eq!(path.len(), 9);
        assert_eq!(path[0], Cell::new(0, 0));
        assert_eq!(path[8], Cell::new(2, 8));
        for pair in path.windows(2) {
            assert!(pair[0].is_adjacent(pair[1]));
        }
    }

    #[test]
    fn test_diagonal_skip_fills_two_cells() {
        let out = interpolate(Cell::new(0, 0), Cell::new(3, 3), false, false);
        assert_eq!(cells_of(&out), vec![Cell::new(1, 1), Cell::new(2, 2)]);
        for ic in &out {
            let c = classify(ic.entry, ic.exit);
            assert_eq!(c.bucket, SlopeBucket::Diagonal);
            assert_eq!(c.character, '\\');
        }
    }

    #[test]
    fn test_endpoint_flags() {
        let (a, b) = (Cell::new(1, 1), Cell::new(6, 3));
        let full = traverse(a, b);

        let none = interpolate(a, b, false, false);
        assert!(!cells_of(&none).contains(&a));
        assert!(!cells_of(&none).contains(&b));
        assert_eq!(none.len(), full.len() - 2);

        let both = interpolate(a, b, true, true);
        assert_eq!(cells_of(&both), full);

        let start_only = interpolate(a, b, true, false);
        assert_eq!(start_only.first().map(|ic| ic.cell), Some(a));
        assert_eq!(start_only.len(), full.len() - 1);
    }

    #[test]
    fn test_cell_set_is_direction_independent() {
        let pairs = [
            (Cell::new(0, 0), Cell::new(3, 7)),
            (Cell::new(5, -2), Cell::new(-1, 4)),
            (Cell::new(2, 9), Cell::new(7, 1)),
            (Cell::new(0, 0), Cell::new(1, 6)),
        ];
        for (a, b) in pairs {
            let fwd: BTreeSet<Cell> = cells_of(&interpolate(a, b, true, true)).into_iter().collect();
            let back: BTreeSet<Cell> = cells_of(&interpolate(b, a, true, true)).into_iter().collect();
            assert_eq!(fwd, back, "{} <-> {}", a, b);
        }
    }

    #[test]
    fn test_zero_length_line_is_not_interpolated() {
        assert!(interpolate(Cell::new(4, 4), Cell::new(4, 4), true, true).is_empty());
    }

    #[test]
    fn test_axis_aligned_lines_use_midpoint() {
        let right = interpolate(Cell::new(0, 0), Cell::new(0, 5), false, false);
        assert_eq!(right.len(), 4);
        for ic in &right {
            assert_eq!(ic.entry, UnitPoint::new(0.0, 0.5));
            assert_eq!(ic.exit, UnitPoint::new(1.0, 0.5));
        }

        let left = interpolate(Cell::new(0, 5), Cell::new(0, 0), false, false);
        assert_eq!(left[0].cell, Cell::new(0, 4));
        assert_eq!(left[0].entry, UnitPoint::new(1.0, 0.5));
        assert_eq!(left[0].exit, UnitPoint::new(0.0, 0.5));

        let up = interpolate(Cell::new(6, 2), Cell::new(0, 2), false, false);
        assert_eq!(up.len(), 5);
        assert_eq!(up[0].cell, Cell::new(5, 2));
        assert_eq!(up[0].entry, UnitPoint::new(0.5, 1.0));
        assert_eq!(up[0].exit, UnitPoint::new(0.5, 0.0));
        assert_eq!(classify(up[0].entry, up[0].exit).character, '|');
    }

    #[test]
    fn test_runs_climb_continuously() {
        // Shallow line: four runs of column-major cells, each climbing one row.
        let out = interpolate(Cell::new(0, 0), Cell::new(3, 11), true, true);
        for pair in out.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.cell.row == b.cell.row {
                assert!((a.exit.y - b.entry.y).abs() < 1e-6, "{:?} -> {:?}", a, b);
            } else {
                // Crossing into the next row: leaves at the bottom, enters at the top.
                assert!((a.exit.y - 1.0).abs() < 1e-6);
                assert!(b.entry.y.abs() < 1e-6);
            }
        }
        for ic in &out {
            for p in [ic.entry, ic.exit] {
                assert!((0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y));
            }
        }
    }

    #[test]
    fn test_travel_order_is_preserved_when_going_up_left() {
        let out = interpolate(Cell::new(8, 4), Cell::new(0, 0), false, false);
        let rows: Vec<i32> = out.iter().map(|ic| ic.cell.row).collect();
        let mut sorted = rows.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(rows, sorted, "rows must decrease along the travel direction");
        // Steep up-left strokes enter at the bottom of each cell.
        assert!(out.iter().all(|ic| ic.entry.y == 1.0 && ic.exit.y == 0.0));
    }
}
