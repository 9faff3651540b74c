//! Classifying non-loop tiles as inside or outside the loop.
//!
//! Two analyses are provided:
//!
//! - [`Grid::is_enclosed_side_clockwise`]: a ray cast from every loop
//!   tile towards its clockwise side, reporting whether none of those
//!   rays escape the grid through loop tiles alone.
//! - [`Grid::flood_enclosed`]: seeds a flood fill from the tiles known to
//!   sit just inside each bend of the loop ([`kernel`]) and collects
//!   every tile reachable from them without crossing the loop.

use crate::grid::Grid;
use crate::trace::{Orientation, PipeLoop};
use crate::visit::VisitMap;
use indexmap::IndexSet;
use pipemaze_core::{Direction, EnclosureError, Neighbour, Pos};
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Offsets just inside a clockwise loop, indexed by
/// `[entered_from][exited_towards]`. Entering and leaving through the
/// same side is not a pipe, so the diagonal is empty.
const KERNELS: [[&[Neighbour]; 4]; 4] = {
    use Neighbour::*;
    [
        // entered from Top
        [&[], &[W, SW, S], &[W], &[NW]],
        // entered from Right
        [&[NE], &[], &[N, NW, W], &[N]],
        // entered from Bottom
        [&[E], &[SE], &[], &[N, NE, E]],
        // entered from Left
        [&[S, SE, E], &[S], &[SW], &[]],
    ]
};

/// Offsets guaranteed to lie inside a clockwise loop next to a tile the
/// walk entered through `entered_from` and left through `exited_towards`.
///
/// Returns `None` for the four same-side pairs, which no pipe produces.
pub fn kernel(entered_from: Direction, exited_towards: Direction) -> Option<&'static [Neighbour]> {
    let offsets = KERNELS[entered_from as usize][exited_towards as usize];
    (!offsets.is_empty()).then_some(offsets)
}

impl Grid {
    /// Whether the clockwise side of the walk is bounded everywhere.
    ///
    /// For each loop tile, looks from the tile towards the side a quarter
    /// turn clockwise from its exit, skipping loop tiles. Reaching a
    /// non-loop tile settles that tile; running off the grid first means
    /// the clockwise side is open and the answer is `false`. A tile with
    /// no recorded exit (the end of an open walk) also yields `false`.
    ///
    /// This is a weak check: it cannot tell interior from exterior when
    /// ground surrounds the loop. [`PipeLoop::orientation`] decides which
    /// way the kernels are read.
    pub fn is_enclosed_side_clockwise(&self, pipe_loop: &PipeLoop) -> bool {
        pipe_loop.passages().all(|(pos, passage)| {
            let Some(exit) = passage.exited_towards else {
                return false;
            };
            let dir = exit.turn_clockwise();
            let mut probe = dir.apply(pos);
            loop {
                if !self.contains(probe) {
                    return false;
                }
                if !pipe_loop.contains(probe) {
                    return true;
                }
                probe = dir.apply(probe);
            }
        })
    }

    /// Tiles enclosed by `pipe_loop`, reading kernels by its own
    /// orientation.
    pub fn enclosed_tiles(&self, pipe_loop: &PipeLoop) -> Result<IndexSet<Pos>, EnclosureError> {
        let mut visited = VisitMap::new(self);
        self.flood_enclosed(pipe_loop, pipe_loop.orientation(), &mut visited)
    }

    /// Flood-fill the tiles enclosed by `pipe_loop`.
    ///
    /// `orientation` says which way the walk went around; a
    /// counter-clockwise walk is read as its reverse, so each tile's pair
    /// is looked up as `(exited_towards, entered_from)`. Loop tiles are
    /// marked in `visited` first, then every unvisited kernel tile seeds a
    /// breadth-first fill over 4-connected unvisited neighbours. Tiles
    /// already marked in `visited` are never returned, so a second call
    /// with the same map yields an empty set.
    ///
    /// Returns `Err(EnclosureError::OpenLoop)` if the walk never closed and
    /// `Err(EnclosureError::UnrecognizedPipeShape)` if a loop tile's pair
    /// has no kernel.
    pub fn flood_enclosed(
        &self,
        pipe_loop: &PipeLoop,
        orientation: Orientation,
        visited: &mut VisitMap,
    ) -> Result<IndexSet<Pos>, EnclosureError> {
        if !pipe_loop.is_closed() {
            return Err(EnclosureError::OpenLoop {
                start: pipe_loop.start(),
                end: pipe_loop.end(),
            });
        }
        for pos in pipe_loop.positions() {
            visited.visit(pos);
        }

        let mut enclosed = IndexSet::new();
        let mut queue = VecDeque::new();
        for (pos, passage) in pipe_loop.passages() {
            let (entered, exited) = match orientation {
                Orientation::Clockwise => (passage.entered_from, passage.exited_towards),
                Orientation::CounterClockwise => (passage.exited_towards, passage.entered_from),
            };
            let offsets = entered
                .zip(exited)
                .and_then(|(e, x)| kernel(e, x))
                .ok_or(EnclosureError::UnrecognizedPipeShape {
                    pos,
                    entered_from: passage.entered_from,
                    exited_towards: passage.exited_towards,
                })?;

            queue.extend(
                offsets
                    .iter()
                    .filter_map(|&offset| self.neighbour_at(pos, offset))
                    .map(|tile| tile.pos())
                    .filter(|&seed| !visited.is_visited(seed)),
            );
            while let Some(tile) = queue.pop_front() {
                if !visited.visit(tile) {
                    continue;
                }
                trace!(pos = %tile, "visiting");
                enclosed.insert(tile);
                queue.extend(
                    self.neighbours(tile)
                        .iter()
                        .map(|n| n.pos())
                        .filter(|&n| !visited.is_visited(n)),
                );
            }
        }

        debug!(?orientation, enclosed = enclosed.len(), "flood fill complete");
        Ok(enclosed)
    }

    /// Tiles neither on the loop nor in `enclosed`, row-major.
    pub fn other_tiles(&self, pipe_loop: &PipeLoop, enclosed: &IndexSet<Pos>) -> Vec<Pos> {
        self.tiles()
            .map(|t| t.pos())
            .filter(|&pos| !pipe_loop.contains(pos) && !enclosed.contains(&pos))
            .collect()
    }
}
