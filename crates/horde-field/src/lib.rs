//! Distance fields and movement policies for horde simulations.
//!
//! The two halves of every tick live here:
//!
//! 1. [`build_distance_field`] runs a multi-source BFS over a
//!    [`Grid`](horde_space::Grid), driven by a FIFO [`Frontier`], and returns
//!    a [`DistanceField`] of shortest four-connected path lengths.
//! 2. [`advance`] (or its [`flee`] / [`pursue`] shorthands) moves one
//!    population greedily along the field seeded by the other.
//!
//! Randomness enters only through the `rng` argument of the policies, so a
//! seeded generator makes every tick reproducible.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod distance;
pub mod frontier;
pub mod movement;
mod visited;

pub use distance::{build_distance_field, DistanceField};
pub use frontier::{Frontier, FrontierError};
pub use movement::{advance, flee, next_cell, pursue, MovementPolicy, PolicyError};
