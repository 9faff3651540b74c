//! Grid positions.

use std::cmp::Ordering;
use std::fmt;

/// A tile position on the puzzle grid.
///
/// `x` grows to the right and `y` grows downwards, matching the layout
/// of the input text (column, line). Positions are plain values and may
/// lie outside any particular grid; bounds are checked by the grid.
///
/// Ordering is row-major: positions compare by `y` first, then `x`,
/// which is the order the grid stores and iterates its tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Pos {
    /// Construct a position from a column and row.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position translated by `(dx, dy)`.
    pub const fn step(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

impl From<(i32, i32)> for Pos {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
