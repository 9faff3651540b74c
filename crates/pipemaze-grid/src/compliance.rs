//! Solver invariant test helpers.
//!
//! These functions trace and fill a grid and verify the properties every
//! well-formed puzzle must satisfy. Reused by the fixture tests and the
//! property tests.

use crate::grid::Grid;
use crate::render::Layer;
use crate::trace::PipeLoop;
use crate::visit::VisitMap;
use indexmap::IndexSet;
use pipemaze_core::{Pipe, Pos};

/// Assert the loop is closed, even-length, and starts at the start tile.
pub fn assert_loop_well_formed(grid: &Grid, pipe_loop: &PipeLoop) {
    assert!(pipe_loop.is_closed(), "loop from {} is open", pipe_loop.start());
    assert_eq!(pipe_loop.len() % 2, 0, "loop length {} is odd", pipe_loop.len());
    assert_eq!(pipe_loop.half_length(), pipe_loop.len() / 2);
    let start = grid.start().expect("grid should have one start");
    assert_eq!(pipe_loop.positions().next(), Some(start.pos()));
}

/// Assert consecutive loop tiles are adjacent and agree on the shared side.
pub fn assert_passages_consistent(grid: &Grid, pipe_loop: &PipeLoop) {
    let walk: Vec<(Pos, _)> = pipe_loop.passages().collect();
    for (i, (pos, passage)) in walk.iter().enumerate() {
        let (next_pos, next_passage) = walk[(i + 1) % walk.len()];
        let exit = passage
            .exited_towards
            .unwrap_or_else(|| panic!("{pos} has no exit"));
        assert_eq!(exit.apply(*pos), next_pos, "{pos} exits away from {next_pos}");
        assert_eq!(
            next_passage.entered_from,
            Some(exit.connects_to()),
            "{next_pos} entry does not face {pos}"
        );
        let tile = grid.tile(*pos).expect("loop tile on grid");
        assert!(tile.connects_towards(exit), "{pos} has no pipe towards {exit}");
    }
}

/// Assert ground tiles never appear on the loop.
pub fn assert_no_ground_on_loop(grid: &Grid, pipe_loop: &PipeLoop) {
    for pos in pipe_loop.positions() {
        let pipe = grid.tile(pos).map(|t| t.pipe());
        assert_ne!(pipe, Some(Pipe::Ground), "ground tile {pos} on loop");
    }
}

/// Assert enclosed tiles are on the grid and off the loop, and that loop,
/// enclosed, and other tiles partition the grid.
pub fn assert_enclosed_partition(grid: &Grid, pipe_loop: &PipeLoop, enclosed: &IndexSet<Pos>) {
    for pos in enclosed {
        assert!(grid.contains(*pos), "enclosed {pos} off grid");
        assert!(!pipe_loop.contains(*pos), "{pos} both on loop and enclosed");
    }
    let others = grid.other_tiles(pipe_loop, enclosed);
    assert_eq!(
        pipe_loop.len() + enclosed.len() + others.len(),
        grid.len(),
        "loop, enclosed, and other tiles do not partition the grid"
    );
}

/// Assert a second flood fill over the same visit map finds nothing.
pub fn assert_flood_idempotent(grid: &Grid, pipe_loop: &PipeLoop) {
    let mut visited = VisitMap::new(grid);
    grid.flood_enclosed(pipe_loop, pipe_loop.orientation(), &mut visited)
        .expect("first flood fill should succeed");
    let again = grid
        .flood_enclosed(pipe_loop, pipe_loop.orientation(), &mut visited)
        .expect("second flood fill should succeed");
    assert!(again.is_empty(), "second flood fill found {} tiles", again.len());
}

/// Assert the diagnostic rendering covers every loop and enclosed tile.
pub fn assert_overlay_hides_ground(grid: &Grid, pipe_loop: &PipeLoop, enclosed: &IndexSet<Pos>) {
    let rendering = grid.render(&[
        Layer::Arrows(pipe_loop),
        Layer::Paint('@', enclosed.iter().copied().collect()),
    ]);
    let rows: Vec<Vec<char>> = rendering.lines().map(|l| l.chars().collect()).collect();
    for pos in pipe_loop.positions().chain(enclosed.iter().copied()) {
        let glyph = rows[pos.y as usize][pos.x as usize];
        assert_ne!(glyph, '.', "{pos} still shows ground");
    }
}

/// Run every invariant check on a grid holding one closed loop.
pub fn run_full_compliance(grid: &Grid) {
    let pipe_loop = grid.trace_loop().expect("trace should succeed");
    let enclosed = grid
        .enclosed_tiles(&pipe_loop)
        .expect("enclosure should succeed");
    assert_loop_well_formed(grid, &pipe_loop);
    assert_passages_consistent(grid, &pipe_loop);
    assert_no_ground_on_loop(grid, &pipe_loop);
    assert_enclosed_partition(grid, &pipe_loop, &enclosed);
    assert_flood_idempotent(grid, &pipe_loop);
    assert_overlay_hides_ground(grid, &pipe_loop, &enclosed);
}
