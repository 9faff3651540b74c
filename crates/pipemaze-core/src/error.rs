//! Error types for the pipemaze solver.
//!
//! Organized by stage: grid construction, loop tracing, and enclosure
//! analysis. Every variant is fatal for the run that raised it.

use crate::direction::Direction;
use crate::pos::Pos;
use std::error::Error;
use std::fmt;

/// Errors from building a grid out of puzzle text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A character outside the pipe alphabet was found.
    InvalidGlyph {
        /// The offending character.
        glyph: char,
        /// Where it appeared.
        pos: Pos,
    },
    /// The input contained no rows.
    EmptyGrid,
    /// A row's length differs from the first row's.
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGlyph { glyph, pos } => {
                write!(f, "'{glyph}' at {pos} is not a valid pipe")
            }
            Self::EmptyGrid => write!(f, "grid has no rows"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} tiles, expected {expected} like the first row"
            ),
        }
    }
}

impl Error for GridError {}

/// Errors from locating the start tile before tracing the loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceError {
    /// No tile connects through all four sides.
    NoStartFound,
    /// More than one tile connects through all four sides.
    MultipleStartsFound {
        /// Every candidate start, in row-major order.
        positions: Vec<Pos>,
    },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoStartFound => write!(f, "grid has no start tile"),
            Self::MultipleStartsFound { positions } => {
                write!(f, "grid has {} start tiles:", positions.len())?;
                for pos in positions {
                    write!(f, " {pos}")?;
                }
                Ok(())
            }
        }
    }
}

impl Error for TraceError {}

/// Errors from classifying tiles as enclosed by the loop.
///
/// Both variants indicate a traced loop that does not match the pipe
/// model; they are internal consistency failures rather than bad input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnclosureError {
    /// A loop tile's entry/exit pair has no kernel.
    UnrecognizedPipeShape {
        /// The loop tile.
        pos: Pos,
        /// Side the walk entered through.
        entered_from: Option<Direction>,
        /// Side the walk left through.
        exited_towards: Option<Direction>,
    },
    /// The traced path never returned to the start tile.
    OpenLoop {
        /// The start tile.
        start: Pos,
        /// Where the walk dead-ended.
        end: Pos,
    },
}

impl fmt::Display for EnclosureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedPipeShape {
                pos,
                entered_from,
                exited_towards,
            } => {
                write!(f, "unrecognized pipe shape at {pos}: entered from ")?;
                match entered_from {
                    Some(d) => write!(f, "{d}")?,
                    None => write!(f, "nowhere")?,
                }
                write!(f, ", exited towards ")?;
                match exited_towards {
                    Some(d) => write!(f, "{d}"),
                    None => write!(f, "nowhere"),
                }
            }
            Self::OpenLoop { start, end } => {
                write!(f, "loop from {start} is open, walk ended at {end}")
            }
        }
    }
}

impl Error for EnclosureError {}
