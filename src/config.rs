// src/config.rs

//! Configuration consumed by the rasterizer's callers.
//!
//! The rasterizer itself is configured per call. These structs gather what
//! the host keeps between calls: the current brush, the line style used for
//! explicit line placements, and the cell geometry used to map pointer
//! positions into cells. Everything deserializes from JSON with defaults
//! for any missing field.

use crate::geometry::Cell;
use crate::glyph::ColorIndex;
use crate::template::{LineRequest, LineStyle, RightAngleStyle};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

// --- Top-Level Configuration Structure ---

/// Root of the configuration tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Current drawing character and colour.
    pub brush: BrushConfig,
    /// Explicit line placement settings.
    pub line: LineConfig,
    /// Cell geometry for pointer mapping.
    pub layout: LayoutConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse configuration JSON")
    }

    /// Reads and parses a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Builds a line placement request from the current brush and line settings.
    pub fn line_request(&self, start: Cell, end: Cell) -> LineRequest {
        LineRequest {
            start,
            end,
            color: self.brush.color,
            style: self.line.line_style(&self.brush),
            change_route: self.line.change_route,
        }
    }
}

// --- Brush Configuration ---

/// The current drawing character and colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    /// Character used by solid lines.
    pub character: char,
    /// Palette index for everything drawn.
    pub color: ColorIndex,
}

impl Default for BrushConfig {
    fn default() -> Self {
        BrushConfig {
            character: '*',
            color: ColorIndex(7),
        }
    }
}

// --- Line Configuration ---

/// Which renderer explicit line placements use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LineStyleKind {
    /// Catalog tiles with their own glyphs.
    #[default]
    Template,
    /// Catalog geometry drawn with the brush character.
    Solid,
    /// Two segments joined by a bend.
    RightAngle,
}

/// Settings for explicit line placements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LineConfig {
    pub style: LineStyleKind,
    /// Right-angle routes go vertical first when set.
    pub change_route: bool,
    /// Glyphs for right-angle routes.
    pub right_angle: RightAngleStyle,
}

impl LineConfig {
    pub fn line_style(&self, brush: &BrushConfig) -> LineStyle {
        match self.style {
            LineStyleKind::Template => LineStyle::Template,
            LineStyleKind::Solid => LineStyle::Solid(brush.character),
            LineStyleKind::RightAngle => LineStyle::RightAngle(self.right_angle),
        }
    }
}

// --- Layout Configuration ---

/// Pixel geometry of the character grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of a single cell in pixels.
    pub cell_width_px: f32,
    /// Height of a single cell in pixels.
    pub cell_height_px: f32,
    /// Horizontal border before the first column, in pixels.
    pub padding_x: f32,
    /// Vertical border before the first row, in pixels.
    pub padding_y: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            cell_width_px: 10.0,
            cell_height_px: 20.0,
            padding_x: 0.0,
            padding_y: 0.0,
        }
    }
}
