// src/lib.rs

//! `gridstroke` turns pointer strokes into characters on a character grid.
//!
//! Two entry points exist:
//! - [`tracker::StrokeTracker`] consumes a live stream of pointer samples
//!   (down, move, up) and classifies every visited cell into a glyph.
//! - [`template::render_line`] draws an explicit start/end line from the
//!   pre-authored tile catalog, or as a right-angle route.
//!
//! Both produce a [`glyph::GlyphGrid`] anchored at an origin cell, which is
//! what the host's compositor merges into its layers.

pub mod classifier;
pub mod config;
pub mod geometry;
pub mod glyph;
pub mod interpolate;
pub mod layout;
pub mod template;
pub mod tracker;

pub use geometry::{Cell, UnitPoint};
pub use glyph::{ColorIndex, GlyphGrid, EMPTY_CHAR};
pub use tracker::StrokeTracker;
