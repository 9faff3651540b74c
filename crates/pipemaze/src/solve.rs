//! The two puzzle questions, end to end from input text.

use crate::config::SolverConfig;
use crate::error::SolveError;
use pipemaze_grid::{Grid, Layer, VisitMap, ENCLOSED_GLYPH, LOOP_GLYPH, OUTSIDE_GLYPH};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// An answer plus, if requested, the grid rendering that explains it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// The puzzle answer.
    pub answer: usize,
    /// Diagnostic overlay of the grid, when [`SolverConfig::render`] is set.
    pub rendering: Option<String>,
}

/// Read a puzzle file into a string.
pub fn read_input(path: impl AsRef<Path>) -> Result<String, SolveError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| SolveError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Distance from the start to the farthest point of the loop.
///
/// The rendering paints the loop tiles with [`LOOP_GLYPH`].
pub fn solve_part_a(input: &str, config: &SolverConfig) -> Result<Solution, SolveError> {
    let grid = Grid::parse(input)?;
    let pipe_loop = grid.trace_loop()?;
    info!(len = pipe_loop.len(), "loop traced");

    let rendering = config
        .render
        .then(|| grid.render(&[Layer::Paint(LOOP_GLYPH, pipe_loop.positions().collect())]));
    Ok(Solution {
        answer: pipe_loop.half_length(),
        rendering,
    })
}

/// Number of tiles enclosed by the loop.
///
/// Works on its own freshly parsed grid. The rendering draws the loop as
/// arrows, enclosed tiles as [`ENCLOSED_GLYPH`], and everything else as
/// [`OUTSIDE_GLYPH`].
pub fn solve_part_b(input: &str, config: &SolverConfig) -> Result<Solution, SolveError> {
    let grid = Grid::parse(input)?;
    let pipe_loop = grid.trace_loop()?;

    let orientation = config.orientation.resolve(&pipe_loop);
    debug!(
        ?orientation,
        signed_area = pipe_loop.signed_area(),
        clockwise_side_bounded = grid.is_enclosed_side_clockwise(&pipe_loop),
        "kernel orientation chosen"
    );

    let mut visited = VisitMap::new(&grid);
    let enclosed = grid.flood_enclosed(&pipe_loop, orientation, &mut visited)?;
    info!(
        loop_len = pipe_loop.len(),
        enclosed = enclosed.len(),
        "enclosure computed"
    );

    let rendering = config.render.then(|| {
        let others = grid.other_tiles(&pipe_loop, &enclosed);
        grid.render(&[
            Layer::Arrows(&pipe_loop),
            Layer::Paint(ENCLOSED_GLYPH, enclosed.iter().copied().collect()),
            Layer::Paint(OUTSIDE_GLYPH, others),
        ])
    });
    Ok(Solution {
        answer: enclosed.len(),
        rendering,
    })
}
