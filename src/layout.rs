// src/layout.rs
//
// Layout - pointer geometry
//
// Maps pointer positions in pixels to the grid cell they fall in and the
// position within that cell's unit square, which is the form the stroke
// tracker consumes.

use crate::config::LayoutConfig;
use crate::geometry::{Cell, UnitPoint};

/// Cell geometry of the drawing surface.
///
/// No bounds are applied: positions left of or above the padding map to
/// negative cells, and clipping is left to the compositor.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Width of a single cell in pixels
    pub cell_width_px: f32,

    /// Height of a single cell in pixels
    pub cell_height_px: f32,

    /// Horizontal padding/border in pixels
    pub padding_x: f32,

    /// Vertical padding/border in pixels
    pub padding_y: f32,
}

impl Layout {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            cell_width_px: config.cell_width_px.max(1.0),
            cell_height_px: config.cell_height_px.max(1.0),
            padding_x: config.padding_x,
            padding_y: config.padding_y,
        }
    }

    /// Converts a pointer position to its cell and the position inside it.
    pub fn locate(&self, x_px: f32, y_px: f32) -> (Cell, UnitPoint) {
        let fx = (x_px - self.padding_x) / self.cell_width_px;
        let fy = (y_px - self.padding_y) / self.cell_height_px;
        let (col, row) = (fx.floor(), fy.floor());

        let cell = Cell::new(row as i32, col as i32);
        let point = UnitPoint::new(fx - col, fy - row);
        (cell, point)
    }

    /// Pixel position of a cell's top-left corner.
    pub fn cell_origin_px(&self, cell: Cell) -> (f32, f32) {
        let x = self.padding_x + cell.col as f32 * self.cell_width_px;
        let y = self.padding_y + cell.row as f32 * self.cell_height_px;
        (x, y)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}
