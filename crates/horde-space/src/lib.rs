//! Obstacle grid for horde simulations.
//!
//! This crate defines [`Grid`], the fixed-size matrix of empty/full cells
//! that every distance field and movement decision is evaluated against,
//! together with its bounds-checked mutation API and the clipped four- and
//! eight-way neighbourhood enumeration.
//!
//! Neighbour enumeration never wraps or reflects at the edges: a neighbour
//! that would fall outside the grid is simply omitted, so a corner cell has
//! two four-way neighbours and three eight-way neighbours.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub(crate) mod grid2d;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::SpaceError;
pub use grid::{CellState, Grid, Neighbours};
