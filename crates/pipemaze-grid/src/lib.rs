//! Pipe grid, loop tracing, and enclosure analysis.
//!
//! This crate defines the [`Grid`] built from puzzle text along with the
//! algorithms that run over it.
//!
//! # Pipeline
//!
//! - [`Grid::parse`]: text to an immutable grid of [`Tile`]s
//! - [`Grid::trace_loop`]: walk the loop through the start tile into a [`PipeLoop`]
//! - [`Grid::enclosed_tiles`] / [`Grid::flood_enclosed`]: kernel-seeded flood
//!   fill of the tiles inside the loop
//! - [`Grid::is_enclosed_side_clockwise`]: ray-cast diagnostic of the walk's
//!   clockwise side
//! - [`Grid::render`]: diagnostic text overlays
//!
//! Traversal state never lives on the tiles: the tracer returns it in the
//! [`PipeLoop`] and the flood fill records it in a [`VisitMap`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod enclosure;
pub mod grid;
pub mod render;
pub mod tile;
pub mod trace;
pub mod visit;

#[cfg(test)]
pub(crate) mod compliance;

pub use enclosure::kernel;
pub use grid::Grid;
pub use render::{Layer, ENCLOSED_GLYPH, LOOP_GLYPH, OUTSIDE_GLYPH};
pub use tile::Tile;
pub use trace::{Orientation, Passage, PipeLoop};
pub use visit::VisitMap;
