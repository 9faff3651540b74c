//! Compass directions for 4-connected movement and 8-connected offsets.

use crate::pos::Pos;
use std::fmt;

/// One of the four axis-aligned directions a pipe can connect through.
///
/// The declaration order (Top, Right, Bottom, Left) is the natural
/// enumeration order used wherever directions are tried in sequence, and
/// it is clockwise, so rotations are index arithmetic modulo 4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards row `y - 1`.
    Top,
    /// Towards column `x + 1`.
    Right,
    /// Towards row `y + 1`.
    Bottom,
    /// Towards column `x - 1`.
    Left,
}

impl Direction {
    /// All four directions in enumeration (clockwise) order.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// Unit `(dx, dy)` offset of this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Top => (0, -1),
            Self::Right => (1, 0),
            Self::Bottom => (0, 1),
            Self::Left => (-1, 0),
        }
    }

    /// Rotate clockwise by `n` quarter turns.
    pub const fn turn_by(self, n: usize) -> Self {
        Self::ALL[(self as usize + n) % Self::ALL.len()]
    }

    /// The direction a quarter turn clockwise from this one.
    pub const fn turn_clockwise(self) -> Self {
        self.turn_by(1)
    }

    /// The side of a neighbouring tile that faces back through this side.
    ///
    /// Leaving a tile towards `d` means entering the neighbour through
    /// `d.connects_to()`, i.e. the opposite direction.
    pub const fn connects_to(self) -> Self {
        self.turn_by(2)
    }

    /// Arrow glyph used when drawing a loop in its walking direction.
    pub const fn arrow(self) -> char {
        match self {
            Self::Top => '^',
            Self::Right => '>',
            Self::Bottom => 'v',
            Self::Left => '<',
        }
    }

    /// The position one step from `pos` in this direction.
    pub const fn apply(self, pos: Pos) -> Pos {
        let (dx, dy) = self.delta();
        pos.step(dx, dy)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}

/// An 8-connected offset, used for enclosure kernels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Neighbour {
    /// North.
    N,
    /// North-east.
    NE,
    /// East.
    E,
    /// South-east.
    SE,
    /// South.
    S,
    /// South-west.
    SW,
    /// West.
    W,
    /// North-west.
    NW,
}

impl Neighbour {
    /// All eight offsets, clockwise from north.
    pub const ALL: [Neighbour; 8] = [
        Neighbour::N,
        Neighbour::NE,
        Neighbour::E,
        Neighbour::SE,
        Neighbour::S,
        Neighbour::SW,
        Neighbour::W,
        Neighbour::NW,
    ];

    /// Unit `(dx, dy)` offset. North is `y - 1`.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::N => (0, -1),
            Self::NE => (1, -1),
            Self::E => (1, 0),
            Self::SE => (1, 1),
            Self::S => (0, 1),
            Self::SW => (-1, 1),
            Self::W => (-1, 0),
            Self::NW => (-1, -1),
        }
    }

    /// The position at this offset from `pos`.
    pub const fn apply(self, pos: Pos) -> Pos {
        let (dx, dy) = self.delta();
        pos.step(dx, dy)
    }
}
