//! Loop tracing from the start tile.
//!
//! [`Grid::trace_loop`] walks the pipe loop that passes through the start
//! tile and returns it as a [`PipeLoop`]: the tiles in walking order,
//! each with the sides the walk entered and left through.

use crate::grid::Grid;
use crate::tile::Tile;
use crate::visit::VisitMap;
use indexmap::IndexMap;
use pipemaze_core::{Direction, Pos, TraceError};
use tracing::{debug, warn};

/// How the walk passed through one loop tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Passage {
    /// Side of this tile the walk came in through. Unset on the start
    /// tile until the loop closes.
    pub entered_from: Option<Direction>,
    /// Side of this tile the walk left through. Unset on the last tile
    /// of an open walk.
    pub exited_towards: Option<Direction>,
}

/// Rotational sense of a loop as drawn on screen (`y` down).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Interior on the right-hand side of the walk.
    Clockwise,
    /// Interior on the left-hand side of the walk.
    CounterClockwise,
}

impl Orientation {
    /// The orientation of the same loop walked backwards.
    pub fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// A traced loop: tiles in walking order with O(1) membership.
///
/// The start tile comes first and appears exactly once, so [`len`](Self::len)
/// is the loop length.
#[derive(Clone, Debug)]
pub struct PipeLoop {
    start: Pos,
    closed: bool,
    passages: IndexMap<Pos, Passage>,
}

impl PipeLoop {
    /// Number of tiles on the loop.
    pub fn len(&self) -> usize {
        self.passages.len()
    }

    /// Always `false`: a trace holds at least the start tile.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Steps from the start to the farthest point of the loop.
    pub fn half_length(&self) -> usize {
        self.len() / 2
    }

    /// The start tile.
    pub fn start(&self) -> Pos {
        self.start
    }

    /// The last tile walked before the loop closed (or dead-ended).
    pub fn end(&self) -> Pos {
        self.passages
            .last()
            .map_or(self.start, |(&pos, _)| pos)
    }

    /// Whether the walk made it back to the start tile.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether `pos` is on the loop.
    pub fn contains(&self, pos: Pos) -> bool {
        self.passages.contains_key(&pos)
    }

    /// Loop tiles in walking order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.passages.keys().copied()
    }

    /// Loop tiles with their passages, in walking order.
    pub fn passages(&self) -> impl Iterator<Item = (Pos, &Passage)> + '_ {
        self.passages.iter().map(|(&pos, passage)| (pos, passage))
    }

    /// The passage recorded for `pos`, if it is on the loop.
    pub fn passage(&self, pos: Pos) -> Option<&Passage> {
        self.passages.get(&pos)
    }

    /// Twice the signed area enclosed by the walk (shoelace formula over
    /// tile positions). Positive when the walk is clockwise on screen.
    pub fn signed_area(&self) -> i64 {
        let positions: Vec<Pos> = self.positions().collect();
        let next = positions.iter().cycle().skip(1);
        positions
            .iter()
            .zip(next)
            .map(|(a, b)| i64::from(a.x) * i64::from(b.y) - i64::from(b.x) * i64::from(a.y))
            .sum()
    }

    /// The rotational sense the walk travelled in.
    pub fn orientation(&self) -> Orientation {
        if self.signed_area() > 0 {
            Orientation::Clockwise
        } else {
            Orientation::CounterClockwise
        }
    }
}

impl Grid {
    /// Walk the loop through the start tile.
    ///
    /// From each tile the walk takes the first connection, in
    /// [`Direction::ALL`] order and skipping the side it entered through,
    /// whose neighbour is unvisited and connects back. When no such
    /// neighbour exists the walk tries to step onto the start tile
    /// instead; if it can, the loop is closed and both ends of that step
    /// are recorded. Otherwise the open path is returned as is.
    ///
    /// Returns a [`TraceError`] unless the grid has exactly one start.
    pub fn trace_loop(&self) -> Result<PipeLoop, TraceError> {
        let start = self.start()?;
        let mut visited = VisitMap::new(self);
        let mut passages = IndexMap::new();
        visited.visit(start.pos());
        passages.insert(start.pos(), Passage::default());

        let mut current = start;
        let mut closed = false;
        loop {
            let entered_from = passages
                .get(&current.pos())
                .and_then(|p: &Passage| p.entered_from);

            if let Some((dir, next)) =
                self.exit_towards(current, entered_from, |t| !visited.is_visited(t.pos()))
            {
                if let Some(p) = passages.get_mut(&current.pos()) {
                    p.exited_towards = Some(dir);
                }
                passages.insert(
                    next.pos(),
                    Passage {
                        entered_from: Some(dir.connects_to()),
                        exited_towards: None,
                    },
                );
                visited.visit(next.pos());
                current = next;
                continue;
            }

            let closing =
                self.exit_towards(current, entered_from, |t| t.pos() == start.pos());
            if let Some((dir, _)) = closing {
                if let Some(p) = passages.get_mut(&current.pos()) {
                    p.exited_towards = Some(dir);
                }
                if let Some(p) = passages.get_mut(&start.pos()) {
                    p.entered_from = Some(dir.connects_to());
                }
                closed = true;
            }
            break;
        }

        let pipe_loop = PipeLoop {
            start: start.pos(),
            closed,
            passages,
        };
        if closed {
            debug!(
                start = %pipe_loop.start(),
                len = pipe_loop.len(),
                "traced closed loop"
            );
        } else {
            warn!(
                start = %pipe_loop.start(),
                end = %pipe_loop.end(),
                len = pipe_loop.len(),
                "pipe walk dead-ended before returning to the start"
            );
        }
        Ok(pipe_loop)
    }

    /// First side of `tile` (other than `entered_from`) leading to a
    /// neighbour that satisfies `accept` and connects back.
    fn exit_towards(
        &self,
        tile: &Tile,
        entered_from: Option<Direction>,
        accept: impl Fn(&Tile) -> bool,
    ) -> Option<(Direction, &Tile)> {
        tile.connections()
            .iter()
            .copied()
            .filter(|&dir| Some(dir) != entered_from)
            .filter_map(|dir| self.neighbour(tile.pos(), dir).map(|n| (dir, n)))
            .find(|&(dir, n)| accept(n) && n.connects_back(dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipemaze_test_utils::{fixtures, perimeter, rectangle_loop};
    use proptest::prelude::*;

    fn p(x: i32, y: i32) -> Pos {
        Pos::new(x, y)
    }

    fn trace(input: &str) -> PipeLoop {
        Grid::parse(input).unwrap().trace_loop().unwrap()
    }

    // ── Walk order ──────────────────────────────────────────────

    #[test]
    fn square_walks_clockwise_from_start() {
        let l = trace(fixtures::SQUARE.input);
        let walk: Vec<Pos> = l.positions().collect();
        assert_eq!(
            walk,
            vec![
                p(1, 1),
                p(2, 1),
                p(3, 1),
                p(3, 2),
                p(3, 3),
                p(2, 3),
                p(1, 3),
                p(1, 2)
            ]
        );
        assert_eq!(l.start(), p(1, 1));
        assert_eq!(l.end(), p(1, 2));
        assert_eq!(l.half_length(), 4);
    }

    #[test]
    fn passages_record_entry_and_exit() {
        let l = trace(fixtures::SQUARE.input);
        assert_eq!(
            l.passage(p(3, 1)),
            Some(&Passage {
                entered_from: Some(Direction::Left),
                exited_towards: Some(Direction::Bottom),
            })
        );
        // Closing the loop fills in the start tile's entry side.
        assert_eq!(
            l.passage(p(1, 1)),
            Some(&Passage {
                entered_from: Some(Direction::Bottom),
                exited_towards: Some(Direction::Right),
            })
        );
        assert!(l.passages().all(|(_, pass)| pass.entered_from.is_some()
            && pass.exited_towards.is_some()
            && pass.entered_from != pass.exited_towards));
    }

    #[test]
    fn junk_pipes_are_not_followed() {
        let l = trace(fixtures::SQUARE_WITH_JUNK.input);
        assert_eq!(l.len(), 8);
        assert!(!l.contains(p(2, 2)));
        assert!(!l.contains(p(1, 0)));
    }

    // ── Fixtures ────────────────────────────────────────────────

    #[test]
    fn fixture_lengths_and_orientation() {
        for fx in fixtures::ALL {
            let l = trace(fx.input);
            assert!(l.is_closed(), "{}", fx.name);
            assert_eq!(l.len(), fx.loop_len, "{}", fx.name);
            assert_eq!(l.half_length(), fx.half_length(), "{}", fx.name);
            let expected = if fx.clockwise {
                Orientation::Clockwise
            } else {
                Orientation::CounterClockwise
            };
            assert_eq!(l.orientation(), expected, "{}", fx.name);
        }
    }

    #[test]
    fn ground_is_never_on_the_loop() {
        for fx in fixtures::ALL {
            let grid = Grid::parse(fx.input).unwrap();
            let l = grid.trace_loop().unwrap();
            for pos in l.positions() {
                assert_ne!(
                    grid.tile(pos).unwrap().pipe(),
                    pipemaze_core::Pipe::Ground,
                    "{} at {pos}",
                    fx.name
                );
            }
        }
    }

    // ── Open and failing walks ──────────────────────────────────

    #[test]
    fn dead_end_returns_open_path() {
        let l = trace("S-7\n..|\n...");
        assert!(!l.is_closed());
        assert_eq!(l.len(), 4);
        assert_eq!(l.end(), p(2, 1));
        assert_eq!(l.passage(p(2, 1)).unwrap().exited_towards, None);
        assert_eq!(l.passage(p(0, 0)).unwrap().entered_from, None);
    }

    #[test]
    fn isolated_start_is_a_single_tile_path() {
        let l = trace("...\n.S.\n...");
        assert_eq!(l.len(), 1);
        assert!(!l.is_closed());
        assert_eq!(l.end(), l.start());
    }

    #[test]
    fn trace_requires_a_start() {
        let grid = Grid::parse("F7\nLJ").unwrap();
        assert_eq!(grid.trace_loop().unwrap_err(), TraceError::NoStartFound);
    }

    // ── Orientation ─────────────────────────────────────────────

    #[test]
    fn signed_area_of_tiny_square() {
        let l = trace(fixtures::TINY.input);
        assert_eq!(l.signed_area(), 2);
        assert_eq!(l.orientation(), Orientation::Clockwise);
        assert_eq!(l.orientation().reversed(), Orientation::CounterClockwise);
    }

    #[test]
    fn start_in_bottom_right_corner_walks_counter_clockwise() {
        let l = trace(&rectangle_loop(4, 3, 1, p(3, 2)));
        assert_eq!(l.orientation(), Orientation::CounterClockwise);
        assert!(l.signed_area() < 0);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn rectangle_loops_trace_fully(
            width in 2usize..12,
            height in 2usize..12,
            padding in 0usize..3,
            pick in any::<prop::sample::Index>(),
        ) {
            let border = perimeter(width, height);
            let start = border[pick.index(border.len())];
            let l = trace(&rectangle_loop(width, height, padding, start));

            prop_assert!(l.is_closed());
            prop_assert_eq!(l.len(), 2 * (width + height - 2));
            prop_assert_eq!(l.len() % 2, 0);
            prop_assert_eq!(
                l.signed_area().unsigned_abs(),
                2 * ((width - 1) * (height - 1)) as u64
            );
        }
    }
}
