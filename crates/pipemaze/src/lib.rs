//! Pipemaze: trace the pipe loop in a tile grid and count what it encloses.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the pipemaze sub-crates and adds the end-to-end solvers used by the
//! `pipemaze` binary.
//!
//! # Quick start
//!
//! ```rust
//! use pipemaze::prelude::*;
//!
//! let input = "\
//! .....
//! .S-7.
//! .|.|.
//! .L-J.
//! .....";
//!
//! let config = SolverConfig::default();
//! assert_eq!(solve_part_a(input, &config).unwrap().answer, 4);
//! assert_eq!(solve_part_b(input, &config).unwrap().answer, 1);
//!
//! // Or drive the pieces directly.
//! let grid = Grid::parse(input).unwrap();
//! let pipe_loop = grid.trace_loop().unwrap();
//! assert_eq!(pipe_loop.len(), 8);
//! assert_eq!(grid.enclosed_tiles(&pipe_loop).unwrap().len(), 1);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `pipemaze-core` | Positions, directions, pipe shapes, errors |
//! | [`grid`] | `pipemaze-grid` | Grid, loop tracer, enclosure analysis, rendering |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`pipemaze-core`).
pub use pipemaze_core as types;

/// Grid construction and the algorithms over it (`pipemaze-grid`).
pub use pipemaze_grid as grid;

pub mod config;
pub mod error;
pub mod logging;
pub mod solve;

pub use config::{OrientationPolicy, SolverConfig};
pub use error::SolveError;
pub use solve::{read_input, solve_part_a, solve_part_b, Solution};

/// Common imports for typical pipemaze usage.
///
/// ```rust
/// use pipemaze::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use pipemaze_core::{Direction, Neighbour, Pipe, Pos};

    // Errors
    pub use pipemaze_core::{EnclosureError, GridError, TraceError};
    pub use crate::error::SolveError;

    // Grid and algorithms
    pub use pipemaze_grid::{Grid, Layer, Orientation, Passage, PipeLoop, Tile, VisitMap};

    // Driver
    pub use crate::config::{OrientationPolicy, SolverConfig};
    pub use crate::solve::{solve_part_a, solve_part_b, Solution};
}
