// src/tracker/mod.rs

//! Stateful freehand stroke tracking.
//!
//! The host feeds a [`StrokeTracker`] one pointer-down, any number of
//! pointer-moves, and one pointer-up. Each sample arrives already split into
//! the grid cell it falls in and its position within that cell. The tracker
//! records one [`ClassifiedCell`] per visited cell, fills in cells skipped by
//! fast motion, drops cells the stroke only grazed, and on pointer-up hands
//! back a dense [`GlyphGrid`].
//!
//! Only one stroke can be in flight. Sampling while idle, or pressing while
//! already tracking, is a caller bug and panics.

use crate::classifier::{classify, Classification};
use crate::geometry::{Cell, UnitPoint};
use crate::glyph::{ColorIndex, GlyphGrid, SparseGrid};
use crate::interpolate::interpolate;
use log::{debug, trace};

/// A visited cell together with the glyph chosen for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedCell {
    pub cell: Cell,
    pub entry: UnitPoint,
    pub exit: UnitPoint,
    pub classification: Classification,
}

impl ClassifiedCell {
    pub fn new(cell: Cell, entry: UnitPoint, exit: UnitPoint) -> Self {
        Self {
            cell,
            entry,
            exit,
            classification: classify(entry, exit),
        }
    }

    /// Moves the exit point and reclassifies.
    pub fn recompute(&mut self, exit: UnitPoint) {
        self.exit = exit;
        self.classification = classify(self.entry, exit);
    }

    pub fn character(&self) -> char {
        self.classification.character
    }
}

/// An in-progress stroke. Never empty.
///
/// Records stay in the order the cells were first entered. Only the most
/// recent record is ever removed.
#[derive(Debug, Clone)]
pub struct Stroke {
    cells: Vec<ClassifiedCell>,
    /// Record the pointer is in: the last one, or the one before it after
    /// doubling back.
    active: usize,
    color: ColorIndex,
}

impl Stroke {
    fn begin(point: UnitPoint, cell: Cell, color: ColorIndex) -> Self {
        Self {
            cells: vec![ClassifiedCell::new(cell, point, point)],
            active: 0,
            color,
        }
    }

    pub fn cells(&self) -> &[ClassifiedCell] {
        &self.cells
    }

    /// The cell currently being drawn in.
    fn active(&self) -> &ClassifiedCell {
        &self.cells[self.active]
    }

    fn active_mut(&mut self) -> &mut ClassifiedCell {
        &mut self.cells[self.active]
    }

    fn last_index(&self) -> usize {
        self.cells.len() - 1
    }

    /// The other of the two most recent records, which the pointer can move
    /// back into without creating a record.
    fn doubling_back_index(&self) -> Option<usize> {
        let last = self.last_index();
        let before = last.checked_sub(1)?;
        Some(if self.active == last { before } else { last })
    }

    fn advance(&mut self, point: UnitPoint, cell: Cell) {
        let active = self.active().cell;

        if cell == active {
            self.active_mut().recompute(point);
            trace!(
                "stroke: {} now '{}'",
                cell,
                self.active().character()
            );
            return;
        }

        if let Some(index) = self.doubling_back_index().filter(|&i| self.cells[i].cell == cell) {
            // Back into the cell just left: keep drawing there.
            self.active = index;
            self.active_mut().recompute(point);
            trace!(
                "stroke: doubled back from {} into {}, now '{}'",
                active,
                cell,
                self.active().character()
            );
            return;
        }

        if active.is_adjacent(cell) {
            self.leave_active(cell);
        } else {
            let filled = interpolate(active, cell, false, false);
            let next = filled.first().map_or(cell, |ic| ic.cell);
            self.leave_active(next);
            trace!(
                "stroke: skipped from {} to {}, filling {} cells",
                active,
                cell,
                filled.len()
            );
            self.cells.extend(
                filled
                    .into_iter()
                    .map(|ic| ClassifiedCell::new(ic.cell, ic.entry, ic.exit)),
            );
        }

        self.cells.push(ClassifiedCell::new(cell, point, point));
        self.active = self.last_index();
        trace!("stroke: entered {}", cell);
    }

    /// Drops the active cell if the stroke only grazed it, as long as it is
    /// the most recent record and the record before it still touches `next`.
    fn leave_active(&mut self, next: Cell) {
        let last = self.last_index();
        if self.active != last || last == 0 {
            // Revisited cells and the only cell are never pruned.
            return;
        }
        let active = &self.cells[last];
        if !active.classification.prunable || self.cells[last - 1].cell.chebyshev(next) > 1 {
            return;
        }
        trace!(
            "stroke: pruning {} (traversal {:.2})",
            active.cell,
            active.classification.traversal
        );
        self.cells.pop();
        self.active = self.last_index();
    }

    /// Renders the recorded cells. Later records overwrite earlier ones that
    /// landed on the same cell.
    fn to_grid(&self) -> GlyphGrid {
        let mut grid = SparseGrid::new();
        for cc in &self.cells {
            grid.put(cc.cell, cc.character(), self.color);
        }
        grid.compact()
            .expect("a stroke always holds at least one cell")
    }
}

/// Observable tracker state.
#[derive(Debug, Clone, Default)]
pub enum TrackerState {
    #[default]
    Idle,
    Tracking(Stroke),
}

/// Turns a pointer gesture into a glyph grid.
#[derive(Debug, Clone, Default)]
pub struct StrokeTracker {
    state: TrackerState,
    color: ColorIndex,
}

impl StrokeTracker {
    /// Creates an idle tracker that draws in `color`.
    pub fn new(color: ColorIndex) -> Self {
        Self {
            state: TrackerState::Idle,
            color,
        }
    }

    /// Colour used by strokes started from now on.
    pub fn set_color(&mut self, color: ColorIndex) {
        self.color = color;
    }

    pub fn color(&self) -> ColorIndex {
        self.color
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, TrackerState::Tracking(_))
    }

    /// Cells recorded so far. Empty while idle.
    pub fn cells(&self) -> &[ClassifiedCell] {
        match &self.state {
            TrackerState::Idle => &[],
            TrackerState::Tracking(stroke) => stroke.cells(),
        }
    }

    /// Starts a stroke.
    ///
    /// # Panics
    /// Panics if a stroke is already in progress.
    pub fn pointer_down(&mut self, point: UnitPoint, cell: Cell) {
        assert!(
            !self.is_tracking(),
            "pointer_down at {} while a stroke is already being tracked",
            cell
        );
        debug!("Stroke started at {} ({:.2}, {:.2})", cell, point.x, point.y);
        self.state = TrackerState::Tracking(Stroke::begin(point, cell, self.color));
    }

    /// Feeds one pointer sample.
    ///
    /// # Panics
    /// Panics if no stroke is in progress.
    pub fn pointer_move(&mut self, point: UnitPoint, cell: Cell) {
        match &mut self.state {
            TrackerState::Tracking(stroke) => stroke.advance(point, cell),
            TrackerState::Idle => panic!("pointer_move at {} while idle", cell),
        }
    }

    /// Ends the stroke and returns its glyphs. The tracker becomes idle.
    ///
    /// A release outside the active cell counts as one more sample at the
    /// centre of the release cell.
    ///
    /// # Panics
    /// Panics if no stroke is in progress.
    pub fn pointer_up(&mut self, cell: Cell) -> GlyphGrid {
        let mut stroke = match std::mem::take(&mut self.state) {
            TrackerState::Tracking(stroke) => stroke,
            TrackerState::Idle => panic!("pointer_up at {} while idle", cell),
        };
        if stroke.active().cell != cell {
            stroke.advance(UnitPoint::MIDPOINT, cell);
        }
        let grid = stroke.to_grid();
        debug!(
            "Stroke finalized: {} cells, {}x{} grid at {}",
            stroke.cells.len(),
            grid.height(),
            grid.width(),
            grid.origin
        );
        grid
    }

    /// Renders the stroke in progress without ending it.
    pub fn preview(&self) -> Option<GlyphGrid> {
        match &self.state {
            TrackerState::Idle => None,
            TrackerState::Tracking(stroke) => Some(stroke.to_grid()),
        }
    }

    /// Drops the stroke in progress, if any.
    pub fn abandon(&mut self) {
        if let TrackerState::Tracking(stroke) = std::mem::take(&mut self.state) {
            debug!("Stroke abandoned after {} cells", stroke.cells.len());
        }
    }
}
