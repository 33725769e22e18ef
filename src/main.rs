// src/main.rs

//! `gridstroke` replays a recorded drawing session through the rasterizer and
//! prints what each stroke and line produced.
//!
//! Usage: `gridstroke <session.json>`
//!
//! A session holds an optional configuration and a list of operations:
//!
//! ```json
//! {
//!   "config": { "line": { "style": "right_angle" } },
//!   "operations": [
//!     { "freehand": [[12.0, 30.0], [25.0, 31.0], [48.0, 33.0]] },
//!     { "line": { "start": { "row": 0, "col": 0 }, "end": { "row": 3, "col": 9 } } }
//!   ]
//! }
//! ```
//!
//! Freehand samples are pixel positions, mapped to cells through the
//! configured layout.

use anyhow::{bail, Context};
use gridstroke::config::Config;
use gridstroke::geometry::Cell;
use gridstroke::glyph::{GlyphGrid, SparseGrid};
use gridstroke::layout::Layout;
use gridstroke::template::render_line;
use gridstroke::StrokeTracker;
use log::{debug, info, warn};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Session {
    #[serde(default)]
    config: Config,
    operations: Vec<Operation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Operation {
    /// Pointer samples in pixels, pressed on the first and released on the last.
    Freehand(Vec<(f32, f32)>),
    /// An explicit line placement.
    Line {
        start: Cell,
        end: Cell,
        /// Overrides the configured change-route flag.
        #[serde(default)]
        change_route: Option<bool>,
    },
}

fn replay_freehand(tracker: &mut StrokeTracker, layout: &Layout, samples: &[(f32, f32)]) -> Option<GlyphGrid> {
    let (&(x0, y0), rest) = samples.split_first()?;
    let (cell, point) = layout.locate(x0, y0);
    tracker.pointer_down(point, cell);
    let mut last = cell;
    for &(x, y) in rest {
        let (cell, point) = layout.locate(x, y);
        tracker.pointer_move(point, cell);
        last = cell;
    }
    Some(tracker.pointer_up(last))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: gridstroke <session.json>");
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read session from {}", path))?;
    let session: Session =
        serde_json::from_str(&text).with_context(|| format!("Invalid session in {}", path))?;
    info!("Replaying {} operations from {}", session.operations.len(), path);

    let config = session.config;
    let layout = Layout::new(&config.layout);
    let mut tracker = StrokeTracker::new(config.brush.color);
    let mut scene = SparseGrid::new();

    for (i, op) in session.operations.iter().enumerate() {
        let grid = match op {
            Operation::Freehand(samples) => {
                match replay_freehand(&mut tracker, &layout, samples) {
                    Some(grid) => grid,
                    None => {
                        warn!("Operation {}: freehand stroke without samples, skipped", i);
                        continue;
                    }
                }
            }
            Operation::Line {
                start,
                end,
                change_route,
            } => {
                let mut request = config.line_request(*start, *end);
                if let Some(flag) = change_route {
                    request.change_route = *flag;
                }
                render_line(&request)
            }
        };

        println!(
            "#{} at {} ({}x{}):\n{}\n",
            i,
            grid.origin,
            grid.height(),
            grid.width(),
            grid
        );
        // Empty cells are transparent: later operations never erase earlier ones.
        let mut overdrawn = 0;
        for (cell, ch, color) in grid.drawn() {
            if scene.get(cell).is_some() {
                overdrawn += 1;
            }
            scene.put(cell, ch, color);
        }
        if overdrawn > 0 {
            debug!("Operation {}: drew over {} earlier cells", i, overdrawn);
        }
    }

    if scene.is_empty() {
        info!("Nothing was drawn.");
        return Ok(());
    }
    if let Some(scene) = scene.compact() {
        println!("Scene at {}:\n{}", scene.origin, scene);
    }
    Ok(())
}
