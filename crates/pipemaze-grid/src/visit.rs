//! Per-tile visited flags kept beside the grid.

use crate::grid::Grid;
use pipemaze_core::Pos;

/// A boolean layer with one flag per grid tile.
///
/// Algorithms that need to remember which tiles they have processed
/// take a `&mut VisitMap` instead of writing to the tiles. Passing the
/// same map to a second run makes that run skip everything the first
/// one already claimed.
#[derive(Clone, Debug)]
pub struct VisitMap {
    width: usize,
    height: usize,
    visited: Vec<bool>,
    count: usize,
}

impl VisitMap {
    /// An all-unvisited map sized for `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            visited: vec![false; grid.len()],
            count: 0,
        }
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Mark `pos` visited. Returns `true` if it was not visited before;
    /// positions off the grid are never marked and return `false`.
    pub fn visit(&mut self, pos: Pos) -> bool {
        let Some(i) = self.index(pos) else {
            return false;
        };
        if self.visited[i] {
            return false;
        }
        self.visited[i] = true;
        self.count += 1;
        true
    }

    /// Whether `pos` has been visited. Off-grid positions report `false`.
    pub fn is_visited(&self, pos: Pos) -> bool {
        self.index(pos).is_some_and(|i| self.visited[i])
    }

    /// Number of visited tiles.
    pub fn visited_count(&self) -> usize {
        self.count
    }
}
