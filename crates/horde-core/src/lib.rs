//! Core types for the horde pursuit/evasion simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: grid cell
//! coordinates, the two agent populations, neighbourhood connectivity, and
//! the tick counter.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod id;
pub mod kind;

pub use cell::Cell;
pub use id::TickId;
pub use kind::{Connectivity, EntityKind};
