// src/glyph.rs

//! Defines the rasterizer's output: the dense [`GlyphGrid`] handed to the
//! compositor, and the [`SparseGrid`] it is accumulated in.
//!
//! Every cell of a `GlyphGrid` holds a character and a palette colour index.
//! Cells that were never drawn hold [`EMPTY_CHAR`], which the compositor treats
//! as transparent.

use crate::geometry::Cell;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Sentinel character for "nothing drawn here". Transparent when composited.
pub const EMPTY_CHAR: char = ' ';

/// Index into the host application's palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorIndex(pub u8);

/// A dense, rectangular block of rasterized glyphs anchored at `origin`.
///
/// `chars[r][c]` and `colors[r][c]` describe the absolute cell
/// `origin.offset(r, c)`. Both arrays always have identical dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphGrid {
    pub chars: Vec<Vec<char>>,
    pub colors: Vec<Vec<ColorIndex>>,
    /// Minimum row/column touched by the stroke or line.
    pub origin: Cell,
}

impl GlyphGrid {
    /// Number of rows.
    pub fn height(&self) -> usize {
        self.chars.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.chars.first().map_or(0, Vec::len)
    }

    /// Looks up the glyph at an absolute grid cell.
    ///
    /// Returns `None` outside the grid's rectangle. Inside it, undrawn cells
    /// yield `EMPTY_CHAR`.
    pub fn get(&self, cell: Cell) -> Option<(char, ColorIndex)> {
        let r = usize::try_from(cell.row - self.origin.row).ok()?;
        let c = usize::try_from(cell.col - self.origin.col).ok()?;
        let ch = *self.chars.get(r)?.get(c)?;
        let color = self.colors[r][c];
        Some((ch, color))
    }

    /// Iterates over every drawn (non-empty) cell in row-major order, with
    /// absolute coordinates.
    pub fn drawn(&self) -> impl Iterator<Item = (Cell, char, ColorIndex)> + '_ {
        self.chars.iter().enumerate().flat_map(move |(r, row)| {
            row.iter().enumerate().filter_map(move |(c, &ch)| {
                (ch != EMPTY_CHAR).then(|| {
                    (
                        self.origin.offset(r as i32, c as i32),
                        ch,
                        self.colors[r][c],
                    )
                })
            })
        })
    }

    /// Number of drawn (non-empty) cells.
    pub fn drawn_count(&self) -> usize {
        self.chars
            .iter()
            .flatten()
            .filter(|&&ch| ch != EMPTY_CHAR)
            .count()
    }
}

impl fmt::Display for GlyphGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.chars.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: String = row.iter().collect();
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Accumulates glyphs keyed by signed cell coordinates and compacts them into
/// a [`GlyphGrid`] once the extent is known.
///
/// Writes may land on either side of the first cell written, so the bounds
/// are tracked as they grow. A later write to the same cell replaces the
/// earlier one.
#[derive(Debug, Clone, Default)]
pub struct SparseGrid {
    cells: BTreeMap<Cell, (char, ColorIndex)>,
    min: Option<Cell>,
    max: Option<Cell>,
}

impl SparseGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Places a glyph, overwriting whatever was there.
    pub fn put(&mut self, cell: Cell, ch: char, color: ColorIndex) {
        self.min = Some(match self.min {
            Some(m) => Cell::new(m.row.min(cell.row), m.col.min(cell.col)),
            None => cell,
        });
        self.max = Some(match self.max {
            Some(m) => Cell::new(m.row.max(cell.row), m.col.max(cell.col)),
            None => cell,
        });
        self.cells.insert(cell, (ch, color));
    }

    /// Returns the glyph written at `cell`, if any.
    pub fn get(&self, cell: Cell) -> Option<(char, ColorIndex)> {
        self.cells.get(&cell).copied()
    }

    /// Compacts the accumulated glyphs into a dense grid.
    ///
    /// Returns `None` if nothing was written.
    pub fn compact(&self) -> Option<GlyphGrid> {
        let (min, max) = (self.min?, self.max?);
        let height = (max.row - min.row + 1) as usize;
        let width = (max.col - min.col + 1) as usize;

        let mut chars = vec![vec![EMPTY_CHAR; width]; height];
        let mut colors = vec![vec![ColorIndex::default(); width]; height];
        for (cell, &(ch, color)) in &self.cells {
            let r = (cell.row - min.row) as usize;
            let c = (cell.col - min.col) as usize;
            chars[r][c] = ch;
            colors[r][c] = color;
        }

        Some(GlyphGrid {
            chars,
            colors,
            origin: min,
        })
    }
}
