// src/template/render.rs

//! Rendering of explicit start/end lines: tiled straight lines and
//! two-segment right-angle routes.

use super::{closest_template, CATALOG};
use crate::geometry::Cell;
use crate::glyph::{ColorIndex, GlyphGrid, SparseGrid};
use bitflags::bitflags;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

bitflags! {
    /// Sides of a cell a line passes through.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Sides: u8 {
        const UP    = 1 << 0;
        const DOWN  = 1 << 1;
        const LEFT  = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

/// Direction of an axis-aligned segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Heading of the axis-aligned segment `from -> to`.
    ///
    /// Rows take precedence when both coordinates differ; callers only ask
    /// for aligned pairs.
    pub fn between(from: Cell, to: Cell) -> Self {
        if to.row < from.row {
            Heading::Up
        } else if to.row > from.row {
            Heading::Down
        } else if to.col < from.col {
            Heading::Left
        } else {
            Heading::Right
        }
    }

    /// The side of a cell a segment with this heading leaves through.
    pub fn side(self) -> Sides {
        match self {
            Heading::Up => Sides::UP,
            Heading::Down => Sides::DOWN,
            Heading::Left => Sides::LEFT,
            Heading::Right => Sides::RIGHT,
        }
    }

    /// The side of a cell a segment with this heading enters through.
    pub fn entry_side(self) -> Sides {
        match self {
            Heading::Up => Sides::DOWN,
            Heading::Down => Sides::UP,
            Heading::Left => Sides::RIGHT,
            Heading::Right => Sides::LEFT,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Heading::Left | Heading::Right)
    }
}

/// Bend glyphs, named by the two sides each one joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CornerSet {
    pub down_right: char,
    pub down_left: char,
    pub up_right: char,
    pub up_left: char,
}

impl Default for CornerSet {
    fn default() -> Self {
        CornerSet {
            down_right: '┌',
            down_left: '┐',
            up_right: '└',
            up_left: '┘',
        }
    }
}

impl CornerSet {
    pub const fn uniform(ch: char) -> Self {
        CornerSet {
            down_right: ch,
            down_left: ch,
            up_right: ch,
            up_left: ch,
        }
    }

    /// Glyph joining the given pair of sides.
    ///
    /// Returns `None` unless `sides` is exactly one vertical and one
    /// horizontal side.
    pub fn glyph(&self, sides: Sides) -> Option<char> {
        if sides == Sides::DOWN | Sides::RIGHT {
            Some(self.down_right)
        } else if sides == Sides::DOWN | Sides::LEFT {
            Some(self.down_left)
        } else if sides == Sides::UP | Sides::RIGHT {
            Some(self.up_right)
        } else if sides == Sides::UP | Sides::LEFT {
            Some(self.up_left)
        } else {
            None
        }
    }
}

/// Arrowheads, by the heading of the segment they terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowSet {
    pub up: char,
    pub down: char,
    pub left: char,
    pub right: char,
}

impl Default for ArrowSet {
    fn default() -> Self {
        ArrowSet {
            up: '^',
            down: 'v',
            left: '<',
            right: '>',
        }
    }
}

impl ArrowSet {
    pub fn glyph(&self, heading: Heading) -> char {
        match heading {
            Heading::Up => self.up,
            Heading::Down => self.down,
            Heading::Left => self.left,
            Heading::Right => self.right,
        }
    }
}

/// Glyphs for right-angle routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RightAngleStyle {
    pub horizontal: char,
    pub vertical: char,
    pub corners: CornerSet,
    /// Drawn on the start cell instead of an edge glyph.
    pub start_marker: Option<char>,
    /// Arrowhead drawn on the end cell instead of an edge glyph.
    pub arrows: Option<ArrowSet>,
}

impl Default for RightAngleStyle {
    fn default() -> Self {
        Self::light()
    }
}

impl RightAngleStyle {
    pub fn ascii() -> Self {
        RightAngleStyle {
            horizontal: '-',
            vertical: '|',
            corners: CornerSet::uniform('+'),
            start_marker: None,
            arrows: None,
        }
    }

    /// Plain ASCII with an arrowhead at the end.
    pub fn ascii_arrow() -> Self {
        RightAngleStyle {
            arrows: Some(ArrowSet::default()),
            ..Self::ascii()
        }
    }

    /// Box-drawing light lines.
    pub fn light() -> Self {
        RightAngleStyle {
            horizontal: '─',
            vertical: '│',
            corners: CornerSet::default(),
            start_marker: None,
            arrows: None,
        }
    }

    /// Box-drawing light lines with rounded bends.
    pub fn rounded() -> Self {
        RightAngleStyle {
            corners: CornerSet {
                down_right: '╭',
                down_left: '╮',
                up_right: '╰',
                up_left: '╯',
            },
            ..Self::light()
        }
    }

    fn edge(&self, heading: Heading) -> char {
        if heading.is_horizontal() {
            self.horizontal
        } else {
            self.vertical
        }
    }
}

/// How an explicit line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Catalog tiles, with their own glyphs.
    Template,
    /// Catalog tile geometry, every drawn cell using one character.
    Solid(char),
    /// Two axis-aligned segments joined by a bend.
    RightAngle(RightAngleStyle),
}

/// One explicit line placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRequest {
    pub start: Cell,
    pub end: Cell,
    pub color: ColorIndex,
    pub style: LineStyle,
    /// For right-angle routes: go vertical first instead of horizontal.
    pub change_route: bool,
}

/// Renders a line placement into a glyph grid.
pub fn render_line(request: &LineRequest) -> GlyphGrid {
    let grid = match request.style {
        LineStyle::Template => render_straight(request.start, request.end, request.color, None),
        LineStyle::Solid(ch) => render_straight(request.start, request.end, request.color, Some(ch)),
        LineStyle::RightAngle(style) => render_right_angle(
            request.start,
            request.end,
            request.color,
            &style,
            request.change_route,
        ),
    };
    debug!(
        "Rendered {:?} line {} -> {}: {}x{} at {}",
        request.style,
        request.start,
        request.end,
        grid.height(),
        grid.width(),
        grid.origin
    );
    grid
}

/// Tiles the closest catalog template from `start` towards `end`.
///
/// Exactly `max(|rise|, |run|) + 1` characters are drawn. With `solid`, every
/// drawn cell uses that character instead of the tile's own.
pub fn render_straight(start: Cell, end: Cell, color: ColorIndex, solid: Option<char>) -> GlyphGrid {
    let rise = end.row - start.row;
    let run = end.col - start.col;
    let length = rise.abs().max(run.abs()) as usize + 1;
    let mut grid = SparseGrid::new();

    let Some(template) = closest_template(rise, run) else {
        // Zero-length: a single cell drawn like the start of a horizontal line.
        let ch = solid.unwrap_or_else(horizontal_glyph);
        grid.put(start, ch, color);
        return compact(grid);
    };
    trace!(
        "line {} -> {}: template ({}, {}) for {} cells",
        start,
        end,
        template.rise,
        template.run,
        length
    );

    let placements = template.placements();
    let mut emitted = 0;
    let mut copy = 0;
    'tiles: loop {
        let anchor = start.offset(copy * template.rise, copy * template.run);
        for &(dr, dc, ch) in &placements {
            grid.put(anchor.offset(dr, dc), solid.unwrap_or(ch), color);
            emitted += 1;
            if emitted == length {
                break 'tiles;
            }
        }
        copy += 1;
    }
    compact(grid)
}

fn horizontal_glyph() -> char {
    CATALOG
        .iter()
        .find(|t| t.rise == 0)
        .and_then(|t| t.placements().first().map(|&(_, _, ch)| ch))
        .unwrap_or('-')
}

/// Draws an L-shaped route from `start` to `end`.
///
/// The bend sits at `(start.row, end.col)`, or at `(end.row, start.col)` with
/// `change_route`. When the bend coincides with an endpoint the route is a
/// single straight segment.
pub fn render_right_angle(
    start: Cell,
    end: Cell,
    color: ColorIndex,
    style: &RightAngleStyle,
    change_route: bool,
) -> GlyphGrid {
    let mut grid = SparseGrid::new();

    if start == end {
        grid.put(start, style.start_marker.unwrap_or(style.horizontal), color);
        return compact(grid);
    }

    let bend = if change_route {
        Cell::new(end.row, start.col)
    } else {
        Cell::new(start.row, end.col)
    };

    let last_heading = if bend == start || bend == end {
        trace!("right angle {} -> {}: straight", start, end);
        draw_segment(&mut grid, start, end, color, style)
    } else {
        let first = draw_segment(&mut grid, start, bend, color, style);
        let second = draw_segment(&mut grid, bend, end, color, style);
        let sides = first.entry_side() | second.side();
        if let Some(ch) = style.corners.glyph(sides) {
            grid.put(bend, ch, color);
        }
        trace!("right angle {} -> {}: bend at {} joining {:?}", start, end, bend, sides);
        second
    };

    if let Some(marker) = style.start_marker {
        grid.put(start, marker, color);
    }
    if let Some(arrows) = style.arrows {
        grid.put(end, arrows.glyph(last_heading), color);
    }
    compact(grid)
}

/// Draws edge glyphs on every cell of an aligned segment, both ends included.
fn draw_segment(grid: &mut SparseGrid, from: Cell, to: Cell, color: ColorIndex, style: &RightAngleStyle) -> Heading {
    let heading = Heading::between(from, to);
    let ch = style.edge(heading);
    let (step_row, step_col) = ((to.row - from.row).signum(), (to.col - from.col).signum());
    let mut cell = from;
    loop {
        grid.put(cell, ch, color);
        if cell == to {
            break;
        }
        cell = cell.offset(step_row, step_col);
    }
    heading
}

fn compact(grid: SparseGrid) -> GlyphGrid {
    grid.compact()
        .expect("line rendering always draws at least one cell")
}
