//! A single grid cell.

use pipemaze_core::{Direction, Pipe, Pos};

/// One tile of the grid: where it is and what pipe it holds.
///
/// Tiles are immutable after parsing. Traversal state lives in the
/// structures the algorithms return ([`PipeLoop`](crate::PipeLoop),
/// [`VisitMap`](crate::VisitMap)), not on the tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    pos: Pos,
    pipe: Pipe,
}

impl Tile {
    /// Create a tile holding `pipe` at `pos`.
    pub fn new(pos: Pos, pipe: Pipe) -> Self {
        Self { pos, pipe }
    }

    /// Position on the grid.
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// The pipe shape on this tile.
    pub fn pipe(&self) -> Pipe {
        self.pipe
    }

    /// Sides this tile connects through, in [`Direction::ALL`] order.
    pub fn connections(&self) -> &'static [Direction] {
        self.pipe.connections()
    }

    /// `true` for the start tile, the only shape with four connections.
    pub fn is_start(&self) -> bool {
        self.connections().len() == 4
    }

    /// Whether this tile connects through side `dir`.
    pub fn connects_towards(&self, dir: Direction) -> bool {
        self.connections().contains(&dir)
    }

    /// Whether a walk heading `dir` from a neighbour can enter this tile.
    pub fn connects_back(&self, dir: Direction) -> bool {
        self.connects_towards(dir.connects_to())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_the_only_degree_four_shape() {
        for c in Pipe::GLYPHS {
            let pipe = Pipe::from_glyph(c).unwrap();
            let tile = Tile::new(Pos::new(0, 0), pipe);
            assert_eq!(tile.is_start(), pipe == Pipe::Start, "{c}");
        }
    }

    #[test]
    fn connects_back_checks_the_facing_side() {
        // `7` connects left and bottom: enterable by walking right or up.
        let tile = Tile::new(Pos::new(3, 1), Pipe::SouthWest);
        assert!(tile.connects_back(Direction::Right));
        assert!(tile.connects_back(Direction::Top));
        assert!(!tile.connects_back(Direction::Left));
        assert!(!tile.connects_back(Direction::Bottom));
    }

    #[test]
    fn ground_connects_nowhere() {
        let tile = Tile::new(Pos::new(0, 0), Pipe::Ground);
        assert!(Direction::ALL.iter().all(|&d| !tile.connects_back(d)));
    }
}
