// src/template/tests.rs

use super::*;
use crate::geometry::Cell;
use crate::glyph::ColorIndex;
use test_log::test;

const INK: ColorIndex = ColorIndex(7);

fn c(row: i32, col: i32) -> Cell {
    Cell::new(row, col)
}

// --- Catalog ---

#[test]
fn test_catalog_covers_every_quadrant_and_axis() {
    for (rs, cs) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
        let count = CATALOG
            .iter()
            .filter(|t| t.rise.signum() == rs && t.run.signum() == cs)
            .count();
        assert!(count >= 3, "quadrant ({}, {}) has {} templates", rs, cs, count);
    }
    for (rise, run) in [(0, 1), (0, -1), (1, 0), (-1, 0)] {
        let count = CATALOG
            .iter()
            .filter(|t| t.rise.signum() == rise && t.run.signum() == run)
            .count();
        assert_eq!(count, 1, "axis ({}, {}) must have exactly one template", rise, run);
    }
}

#[test]
fn test_every_template_draws_something() {
    for t in CATALOG.iter() {
        assert!(t.glyph_count() > 0);
        assert_eq!(t.placements().len(), t.glyph_count());
    }
}

#[test]
fn test_from_rows_pads_ragged_tiles() {
    let t = LineTemplate::from_rows(2, 1, &["|", " \\"]);
    assert_eq!(t.width(), 2);
    assert_eq!(t.height(), 2);
    assert_eq!(t.tile[0], vec!['|', ' ']);
    assert_eq!(t.glyph_count(), 2);
}

#[test]
fn test_placements_walk_backward_on_negative_axes() {
    let t = LineTemplate::from_rows(-2, -1, &["\\", "|"]);
    assert_eq!(t.placements(), vec![(0, 0, '|'), (-1, 0, '\\')]);

    let t = LineTemplate::from_rows(1, -2, &[".'"]);
    assert_eq!(t.placements(), vec![(0, 0, '\''), (0, -1, '.')]);
}

// --- Lookup ---

#[test]
fn test_nearest_slope_selection() {
    let chosen = closest_template(2, 8).expect("direction has templates");
    assert_eq!((chosen.rise, chosen.run), (1, 4));

    // It really is the closest among same-quadrant candidates.
    let best = CATALOG
        .iter()
        .filter(|t| t.rise > 0 && t.run > 0)
        .map(|t| (t.ratio() - 0.25).abs())
        .fold(f64::INFINITY, f64::min);
    assert_eq!((chosen.ratio() - 0.25).abs(), best);
}

#[test]
fn test_lookup_respects_quadrant() {
    let up_right = closest_template(-2, 8).unwrap();
    assert_eq!((up_right.rise, up_right.run), (-1, 4));

    let down_left = closest_template(9, -4).unwrap();
    assert_eq!((down_left.rise, down_left.run), (2, -1));

    let steep = closest_template(-40, -1).unwrap();
    assert_eq!((steep.rise, steep.run), (-3, -1));
}

#[test]
fn test_axis_lookup_is_exact() {
    let t = closest_template(5, 0).unwrap();
    assert_eq!((t.rise, t.run), (1, 0));
    let t = closest_template(-3, 0).unwrap();
    assert_eq!((t.rise, t.run), (-1, 0));
    let t = closest_template(0, -7).unwrap();
    assert_eq!((t.rise, t.run), (0, -1));
}

#[test]
fn test_zero_length_has_no_template() {
    assert!(closest_template(0, 0).is_none());
}

// --- Straight lines ---

#[test]
fn test_horizontal_line_of_eight() {
    let grid = render_straight(c(0, 0), c(0, 7), INK, None);
    assert_eq!(grid.origin, c(0, 0));
    assert_eq!(grid.height(), 1);
    assert_eq!(grid.drawn_count(), 8);
    assert_eq!(grid.chars[0], vec!['-'; 8]);
    assert!(grid.colors[0].iter().all(|&color| color == INK));
}

#[test]
fn test_leftward_line_extends_before_start() {
    let grid = render_straight(c(3, 7), c(3, 0), INK, None);
    assert_eq!(grid.origin, c(3, 0));
    assert_eq!(grid.chars, vec![vec!['-'; 8]]);
}

#[test]
fn test_diagonal_line() {
    let grid = render_straight(c(0, 0), c(3, 3), INK, None);
    assert_eq!(grid.to_string(), "\\   \n \\  \n  \\ \n   \\");
}

#[test]
fn test_shallow_rising_line() {
    let grid = render_straight(c(4, 0), c(2, 4), INK, None);
    assert_eq!(grid.origin, c(2, 0));
    assert_eq!(grid.to_string(), "    .\n  .' \n.'   ");
}

#[test]
fn test_steep_line_down_and_left() {
    let grid = render_straight(c(0, 0), c(4, -2), INK, None);
    assert_eq!(grid.origin, c(0, -2));
    assert_eq!(grid.to_string(), "  |\n  /\n | \n / \n|  ");
}

#[test]
fn test_emitted_count_matches_line_length() {
    for (end_row, end_col) in [(0, 12), (7, 2), (-5, 9), (-3, -11), (6, -6), (10, 0), (1, 4)] {
        let grid = render_straight(c(0, 0), c(end_row, end_col), INK, None);
        let expected = end_row.abs().max(end_col.abs()) as usize + 1;
        assert_eq!(grid.drawn_count(), expected, "line to ({}, {})", end_row, end_col);
    }
}

#[test]
fn test_solid_line_uses_brush_character() {
    let grid = render_straight(c(0, 0), c(2, 2), INK, Some('*'));
    let drawn: Vec<char> = grid.drawn().map(|(_, ch, _)| ch).collect();
    assert_eq!(drawn, vec!['*'; 3]);
}

#[test]
fn test_zero_length_line_draws_one_cell() {
    let grid = render_straight(c(2, 2), c(2, 2), INK, None);
    assert_eq!(grid.chars, vec![vec!['-']]);
    assert_eq!(grid.origin, c(2, 2));
}

// --- Right angles ---

#[test]
fn test_corner_lookup() {
    let corners = CornerSet::default();
    assert_eq!(corners.glyph(Sides::UP | Sides::LEFT), Some('┘'));
    assert_eq!(corners.glyph(Sides::DOWN | Sides::RIGHT), Some('┌'));
    assert_eq!(corners.glyph(Sides::UP | Sides::DOWN), None);
}

#[test]
fn test_right_angle_horizontal_first() {
    let grid = render_right_angle(c(0, 0), c(2, 3), INK, &RightAngleStyle::light(), false);
    assert_eq!(grid.to_string(), "───┐\n   │\n   │");
}

#[test]
fn test_right_angle_change_route_goes_vertical_first() {
    let grid = render_right_angle(c(0, 0), c(2, 3), INK, &RightAngleStyle::light(), true);
    assert_eq!(grid.to_string(), "│   \n│   \n└───");
}

#[test]
fn test_right_angle_up_and_left_with_arrow() {
    let grid = render_right_angle(c(2, 3), c(0, 0), INK, &RightAngleStyle::ascii_arrow(), false);
    assert_eq!(grid.origin, c(0, 0));
    assert_eq!(grid.to_string(), "^   \n|   \n+---");
}

#[test]
fn test_rounded_bend_depends_on_direction() {
    let style = RightAngleStyle::rounded();
    let down_then_right = render_right_angle(c(0, 0), c(1, 1), INK, &style, true);
    assert_eq!(down_then_right.get(c(1, 0)).map(|(ch, _)| ch), Some('╰'));

    let right_then_up = render_right_angle(c(1, 0), c(0, 1), INK, &style, false);
    assert_eq!(right_then_up.get(c(1, 1)).map(|(ch, _)| ch), Some('╯'));
}

#[test]
fn test_right_angle_collapses_when_bend_is_an_endpoint() {
    let grid = render_right_angle(c(1, 1), c(1, 5), INK, &RightAngleStyle::ascii_arrow(), true);
    assert_eq!(grid.to_string(), "---->");

    let grid = render_right_angle(c(4, 2), c(1, 2), INK, &RightAngleStyle::light(), false);
    assert_eq!(grid.to_string(), "│\n│\n│\n│");
}

#[test]
fn test_right_angle_start_marker() {
    let style = RightAngleStyle {
        start_marker: Some('o'),
        ..RightAngleStyle::ascii_arrow()
    };
    let grid = render_right_angle(c(0, 0), c(0, 3), INK, &style, false);
    assert_eq!(grid.to_string(), "o-->");

    let single = render_right_angle(c(5, 5), c(5, 5), INK, &style, false);
    assert_eq!(single.to_string(), "o");
}

#[test]
fn test_render_line_dispatches_on_style() {
    let mut request = LineRequest {
        start: c(0, 0),
        end: c(0, 3),
        color: INK,
        style: LineStyle::Template,
        change_route: false,
    };
    assert_eq!(render_line(&request).to_string(), "----");

    request.style = LineStyle::Solid('#');
    assert_eq!(render_line(&request).to_string(), "####");

    request.style = LineStyle::RightAngle(RightAngleStyle::light());
    assert_eq!(render_line(&request).to_string(), "────");
}
