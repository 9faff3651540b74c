//! Rectangular grid of pipe tiles built from puzzle text.

use crate::tile::Tile;
use pipemaze_core::{Direction, GridError, Neighbour, Pipe, Pos, TraceError};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// A rectangular grid of [`Tile`]s.
///
/// Each tile has position `[x, y]` where `0 <= x < width` and
/// `0 <= y < height`; `y` is the input line and `x` the column. Tiles are
/// stored row-major. Lookups off the edge return `None`: the grid does
/// not wrap.
///
/// The normalized input text is retained for rendering overlays.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    source: String,
}

impl Grid {
    /// Build a grid from puzzle text, one row per line.
    ///
    /// `\r\n` line endings are accepted and trailing blank lines are
    /// ignored. Returns `Err(GridError::EmptyGrid)` if no rows remain,
    /// `Err(GridError::RaggedRow)` if a row's width differs from the
    /// first row's, and `Err(GridError::InvalidGlyph)` for a character
    /// outside the pipe alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipemaze_grid::Grid;
    ///
    /// let grid = Grid::parse(".....\n.S-7.\n.|.|.\n.L-J.\n.....\n").unwrap();
    /// assert_eq!((grid.width(), grid.height()), (5, 5));
    /// assert!(Grid::parse("S-7\n|O|\nL-J").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, GridError> {
        let mut rows: Vec<&str> = input.lines().collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        let Some(first) = rows.first() else {
            return Err(GridError::EmptyGrid);
        };

        let width = first.chars().count();
        let height = rows.len();
        let mut tiles = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let pos = Pos::new(x as i32, y as i32);
                let pipe =
                    Pipe::from_glyph(glyph).ok_or(GridError::InvalidGlyph { glyph, pos })?;
                tiles.push(Tile::new(pos, pipe));
            }
        }

        Ok(Self {
            width,
            height,
            tiles,
            source: rows.join("\n"),
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false`: parsing rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The input text the grid was parsed from, rows joined by `\n`.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether `pos` lies on the grid.
    pub fn contains(&self, pos: Pos) -> bool {
        self.index(pos).is_some()
    }

    /// Row-major index of `pos`, or `None` off the grid.
    pub(crate) fn index(&self, pos: Pos) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// The tile at `pos`, if on the grid.
    pub fn tile(&self, pos: Pos) -> Option<&Tile> {
        self.index(pos).map(|i| &self.tiles[i])
    }

    /// The tile one step from `pos` towards `dir`.
    pub fn neighbour(&self, pos: Pos, dir: Direction) -> Option<&Tile> {
        self.tile(dir.apply(pos))
    }

    /// The tile at an 8-connected offset from `pos`.
    pub fn neighbour_at(&self, pos: Pos, offset: Neighbour) -> Option<&Tile> {
        self.tile(offset.apply(pos))
    }

    /// The 4-connected neighbours of `pos` in [`Direction::ALL`] order.
    /// Edge tiles have fewer.
    pub fn neighbours(&self, pos: Pos) -> SmallVec<[&Tile; 4]> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.neighbour(pos, dir))
            .collect()
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter()
    }

    /// The unique start tile.
    ///
    /// Returns `Err(TraceError::NoStartFound)` or
    /// `Err(TraceError::MultipleStartsFound)` unless exactly one tile
    /// connects through all four sides.
    pub fn start(&self) -> Result<&Tile, TraceError> {
        let mut starts = self.tiles.iter().filter(|t| t.is_start());
        let first = starts.next().ok_or(TraceError::NoStartFound)?;
        let rest: Vec<Pos> = starts.map(Tile::pos).collect();
        if rest.is_empty() {
            return Ok(first);
        }
        let mut positions = Vec::with_capacity(rest.len() + 1);
        positions.push(first.pos());
        positions.extend(rest);
        Err(TraceError::MultipleStartsFound { positions })
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
