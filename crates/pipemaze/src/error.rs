//! Top-level error type for solving a puzzle.

use pipemaze_core::{EnclosureError, GridError, TraceError};
use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Any failure while reading or solving a puzzle.
#[derive(Debug)]
pub enum SolveError {
    /// The puzzle file could not be read.
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The puzzle text is not a valid grid.
    Grid(GridError),
    /// The start tile could not be located.
    Trace(TraceError),
    /// The traced loop could not be analysed.
    Enclosure(EnclosureError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, .. } => write!(f, "cannot read '{}'", path.display()),
            Self::Grid(_) => write!(f, "invalid puzzle grid"),
            Self::Trace(_) => write!(f, "cannot trace the loop"),
            Self::Enclosure(_) => write!(f, "cannot determine enclosed tiles"),
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Grid(e) => Some(e),
            Self::Trace(e) => Some(e),
            Self::Enclosure(e) => Some(e),
        }
    }
}

impl From<GridError> for SolveError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<TraceError> for SolveError {
    fn from(e: TraceError) -> Self {
        Self::Trace(e)
    }
}

impl From<EnclosureError> for SolveError {
    fn from(e: EnclosureError) -> Self {
        Self::Enclosure(e)
    }
}
