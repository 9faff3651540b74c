//! Core types for the pipemaze loop solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: grid positions,
//! compass directions, pipe shapes, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod pipe;
pub mod pos;

pub use direction::{Direction, Neighbour};
pub use error::{EnclosureError, GridError, TraceError};
pub use pipe::Pipe;
pub use pos::Pos;
