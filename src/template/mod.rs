// src/template/mod.rs

//! Straight lines drawn from pre-authored character tiles.
//!
//! A [`LineTemplate`] is a small tile of characters tagged with the
//! rise/run it advances by. Repeating the tile along a line reproduces the
//! slope the tile was drawn for. The [`catalog`] holds one template per
//! direction that needs coverage; mirrored directions get their own entries
//! because a mirrored tile rarely reads correctly.

pub mod catalog;
mod render;

pub use catalog::CATALOG;
pub use render::{
    render_line, render_right_angle, render_straight, ArrowSet, CornerSet, Heading, LineRequest,
    LineStyle, RightAngleStyle, Sides,
};

use crate::glyph::EMPTY_CHAR;

/// A repeatable tile for one line direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTemplate {
    /// Rows advanced per tile copy. Positive is downward.
    pub rise: i32,
    /// Columns advanced per tile copy. Positive is rightward.
    pub run: i32,
    /// The tile, as drawn on screen. `EMPTY_CHAR` means "draw nothing".
    pub tile: Vec<Vec<char>>,
}

impl LineTemplate {
    /// Builds a template from tile rows written top to bottom.
    pub fn from_rows(rise: i32, run: i32, rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let tile = rows
            .iter()
            .map(|r| {
                let mut row: Vec<char> = r.chars().collect();
                row.resize(width, EMPTY_CHAR);
                row
            })
            .collect();
        Self { rise, run, tile }
    }

    pub fn height(&self) -> usize {
        self.tile.len()
    }

    pub fn width(&self) -> usize {
        self.tile.first().map_or(0, Vec::len)
    }

    /// Rise over run. Infinite for vertical templates.
    pub fn ratio(&self) -> f64 {
        ratio(self.rise, self.run)
    }

    /// Number of characters one copy of the tile draws.
    pub fn glyph_count(&self) -> usize {
        self.tile
            .iter()
            .flatten()
            .filter(|&&ch| ch != EMPTY_CHAR)
            .count()
    }

    /// Non-blank tile characters as offsets from the tile's anchor, in
    /// drawing order.
    ///
    /// The anchor is the tile corner nearest the line's start. Along an axis
    /// the template travels backward on, both the offsets and the walk run
    /// backward, so truncating the walk always cuts the far end of the line.
    pub fn placements(&self) -> Vec<(i32, i32, char)> {
        let (h, w) = (self.height() as i32, self.width() as i32);
        let row_order: Vec<i32> = if self.rise < 0 {
            (0..h).rev().collect()
        } else {
            (0..h).collect()
        };
        let col_order: Vec<i32> = if self.run < 0 {
            (0..w).rev().collect()
        } else {
            (0..w).collect()
        };

        let mut out = Vec::with_capacity(self.glyph_count());
        for &tr in &row_order {
            for &tc in &col_order {
                let ch = self.tile[tr as usize][tc as usize];
                if ch == EMPTY_CHAR {
                    continue;
                }
                let dr = if self.rise < 0 { tr - (h - 1) } else { tr };
                let dc = if self.run < 0 { tc - (w - 1) } else { tc };
                out.push((dr, dc, ch));
            }
        }
        out
    }
}

fn ratio(rise: i32, run: i32) -> f64 {
    if run == 0 {
        f64::INFINITY
    } else {
        f64::from(rise) / f64::from(run)
    }
}

/// Finds the template best matching a line with the given rise and run.
///
/// Exactly vertical and exactly horizontal lines get the axis template for
/// their direction. Anything else is matched among templates heading into
/// the same quadrant, by closest rise/run ratio; ties go to the earlier
/// catalog entry. A zero-length line has no direction and matches nothing.
pub fn closest_template(rise: i32, run: i32) -> Option<&'static LineTemplate> {
    closest_in(&CATALOG, rise, run)
}

pub(crate) fn closest_in(templates: &[LineTemplate], rise: i32, run: i32) -> Option<&LineTemplate> {
    if rise == 0 && run == 0 {
        return None;
    }
    if rise == 0 || run == 0 {
        return templates
            .iter()
            .find(|t| t.rise.signum() == rise.signum() && t.run.signum() == run.signum());
    }

    let target = ratio(rise, run);
    let mut best: Option<(&LineTemplate, f64)> = None;
    for t in templates
        .iter()
        .filter(|t| t.rise.signum() == rise.signum() && t.run.signum() == run.signum())
    {
        let diff = (t.ratio() - target).abs();
        if best.map_or(true, |(_, d)| diff < d) {
            best = Some((t, diff));
        }
    }
    best.map(|(t, _)| t)
}

#[cfg(test)]
mod tests;
