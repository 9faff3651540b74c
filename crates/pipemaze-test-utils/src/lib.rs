//! Test utilities for pipemaze development.
//!
//! Provides canonical puzzle [`fixtures`] with known answers and a
//! builder for rectangular loops of any size, used by property tests
//! and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::Fixture;

use pipemaze_core::{Pipe, Pos};

/// Positions on the border of a `width x height` rectangle, clockwise
/// from the top-left corner.
pub fn perimeter(width: usize, height: usize) -> Vec<Pos> {
    assert!(width >= 2 && height >= 2, "a loop needs at least 2x2 tiles");
    let (w, h) = (width as i32, height as i32);
    let mut out = Vec::with_capacity(2 * (width + height) - 4);
    out.extend((0..w).map(|x| Pos::new(x, 0)));
    out.extend((1..h).map(|y| Pos::new(w - 1, y)));
    out.extend((0..w - 1).rev().map(|x| Pos::new(x, h - 1)));
    out.extend((1..h - 1).rev().map(|y| Pos::new(0, y)));
    out
}

/// Render a rectangular pipe loop as puzzle text.
///
/// The loop is `width x height` tiles, surrounded by `padding` rings of
/// ground. `start` is relative to the loop's top-left corner and must
/// lie on its border; that tile is written as `S`.
pub fn rectangle_loop(width: usize, height: usize, padding: usize, start: Pos) -> String {
    let border = perimeter(width, height);
    assert!(border.contains(&start), "start {start} is not on the loop");

    let (w, h) = (width as i32, height as i32);
    let glyph_at = |x: i32, y: i32| -> char {
        if Pos::new(x, y) == start {
            return Pipe::Start.glyph();
        }
        let (top, bottom) = (y == 0, y == h - 1);
        let (left, right) = (x == 0, x == w - 1);
        let pipe = match (top, bottom, left, right) {
            (true, _, true, _) => Pipe::SouthEast,
            (true, _, _, true) => Pipe::SouthWest,
            (_, true, true, _) => Pipe::NorthEast,
            (_, true, _, true) => Pipe::NorthWest,
            (true, _, _, _) | (_, true, _, _) => Pipe::Horizontal,
            (_, _, true, _) | (_, _, _, true) => Pipe::Vertical,
            _ => Pipe::Ground,
        };
        pipe.glyph()
    };

    let pad = padding as i32;
    let mut rows = Vec::with_capacity(height + 2 * padding);
    for y in -pad..h + pad {
        let row: String = (-pad..w + pad)
            .map(|x| {
                if (0..w).contains(&x) && (0..h).contains(&y) {
                    glyph_at(x, y)
                } else {
                    Pipe::Ground.glyph()
                }
            })
            .collect();
        rows.push(row);
    }
    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perimeter_counts_border_tiles_once() {
        assert_eq!(perimeter(2, 2).len(), 4);
        assert_eq!(perimeter(5, 3).len(), 12);
        let p = perimeter(4, 4);
        let mut dedup = p.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), p.len());
    }

    #[test]
    fn rectangle_matches_square_fixture() {
        let text = rectangle_loop(3, 3, 1, Pos::new(0, 0));
        assert_eq!(text, fixtures::SQUARE.input);
    }

    #[test]
    fn unpadded_rectangle() {
        assert_eq!(rectangle_loop(2, 2, 0, Pos::new(1, 1)), "F7\nLS");
    }
}
