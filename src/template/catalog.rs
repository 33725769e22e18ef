// src/template/catalog.rs

//! The built-in line-template table.
//!
//! Built once on first use and never mutated, so it can be read from any
//! thread without locking.

use super::LineTemplate;
use log::debug;
use once_cell::sync::Lazy;

/// (rise, run, tile rows). Rows grow downward, columns rightward.
type Entry = (i32, i32, &'static [&'static str]);

#[rustfmt::skip]
const TABLE: &[Entry] = &[
    // Axis-aligned.
    ( 0,  1, &["-"]),
    ( 0, -1, &["-"]),
    ( 1,  0, &["|"]),
    (-1,  0, &["|"]),

    // Down and to the right.
    ( 1,  4, &["`--."]),
    ( 1,  3, &["`-."]),
    ( 1,  2, &["`."]),
    ( 1,  1, &["\\"]),
    ( 2,  1, &["|", "\\"]),
    ( 3,  1, &["|", "|", "\\"]),

    // Up and to the right.
    (-1,  4, &[".--'"]),
    (-1,  3, &[".-'"]),
    (-1,  2, &[".'"]),
    (-1,  1, &["/"]),
    (-2,  1, &["/", "|"]),
    (-3,  1, &["/", "|", "|"]),

    // Down and to the left.
    ( 1, -4, &[".--'"]),
    ( 1, -3, &[".-'"]),
    ( 1, -2, &[".'"]),
    ( 1, -1, &["/"]),
    ( 2, -1, &["|", "/"]),
    ( 3, -1, &["|", "|", "/"]),

    // Up and to the left.
    (-1, -4, &["`--."]),
    (-1, -3, &["`-."]),
    (-1, -2, &["`."]),
    (-1, -1, &["\\"]),
    (-2, -1, &["\\", "|"]),
    (-3, -1, &["\\", "|", "|"]),
];

/// Every built-in template, in lookup order.
pub static CATALOG: Lazy<Vec<LineTemplate>> = Lazy::new(|| {
    let templates: Vec<LineTemplate> = TABLE
        .iter()
        .map(|&(rise, run, rows)| LineTemplate::from_rows(rise, run, rows))
        .collect();
    for t in &templates {
        assert!(
            t.glyph_count() > 0,
            "line template ({}, {}) draws nothing",
            t.rise,
            t.run
        );
    }
    debug!("Line-template catalog initialized with {} entries", templates.len());
    templates
});
