//! Benchmark profiles and utilities for the pipemaze solver.
//!
//! Provides deterministic large puzzles with known answers:
//!
//! - [`reference_profile`]: 150x100 comb (15K tiles)
//! - [`stress_profile`]: 450x300 comb (135K tiles)
//! - [`comb_maze`]: the underlying generator

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use pipemaze_core::Pipe;

/// A generated puzzle together with its answers.
#[derive(Clone, Debug)]
pub struct Profile {
    /// Puzzle text.
    pub input: String,
    /// Number of tiles on the loop.
    pub loop_len: usize,
    /// Number of tiles enclosed by the loop.
    pub enclosed: usize,
}

/// Build a comb-shaped loop: `teeth` U-shaped teeth, each three columns
/// wide with a ground column inside, joined by a spine along the bottom
/// row. The start sits in the bottom-left corner.
///
/// ```text
/// F-7F-7F-7
/// |.||.||.|
/// |.LJ.LJ.|
/// S-------J
/// ```
///
/// # Panics
///
/// Panics if `teeth == 0` or `height < 3`.
pub fn comb_maze(teeth: usize, height: usize) -> Profile {
    assert!(teeth > 0, "comb needs at least one tooth");
    assert!(height >= 3, "comb needs at least three rows");

    let width = 3 * teeth;
    let glyph_at = |x: usize, y: usize| -> Pipe {
        let column = x % 3;
        if y == 0 {
            return [Pipe::SouthEast, Pipe::Horizontal, Pipe::SouthWest][column];
        }
        if y == height - 1 {
            return match x {
                0 => Pipe::Start,
                _ if x == width - 1 => Pipe::NorthWest,
                _ => Pipe::Horizontal,
            };
        }
        if column == 1 {
            return Pipe::Ground;
        }
        if y < height - 2 || x == 0 || x == width - 1 {
            return Pipe::Vertical;
        }
        // Bottom of a tooth turns into its neighbour.
        if column == 0 {
            Pipe::NorthWest
        } else {
            Pipe::NorthEast
        }
    };

    let input = (0..height)
        .map(|y| (0..width).map(|x| glyph_at(x, y).glyph()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");

    Profile {
        input,
        loop_len: teeth * (2 * height + 2),
        enclosed: teeth * (height - 2),
    }
}

/// Reference benchmark profile: 50 teeth by 100 rows (15K tiles).
pub fn reference_profile() -> Profile {
    comb_maze(50, 100)
}

/// Stress benchmark profile: 150 teeth by 300 rows (135K tiles).
pub fn stress_profile() -> Profile {
    comb_maze(150, 300)
}
