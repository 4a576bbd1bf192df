//! Horde: zombies chase humans across an obstacle grid.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! horde sub-crates. For most users, adding `horde` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use horde::prelude::*;
//!
//! let config = WorldConfig::from_map(
//!     "
//!     Z....
//!     .###.
//!     ....H
//!     ",
//!     42,
//! )
//! .unwrap();
//! let mut world = Apocalypse::new(config).unwrap();
//!
//! let field = world.compute_distance_field(EntityKind::Zombie).unwrap();
//! assert_eq!(field.get(Cell::new(2, 4)), Some(6));
//!
//! world.step().unwrap();
//! assert_eq!(world.current_tick(), TickId(1));
//! assert_eq!(world.zombies().len(), 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `horde-core` | Cells, tick IDs, entity kinds, connectivity |
//! | [`space`] | `horde-space` | The obstacle grid and neighbour queries |
//! | [`field`] | `horde-field` | Frontier queue, distance fields, movement policies |
//! | [`engine`] | `horde-engine` | World config, the `Apocalypse` world, step metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`horde-core`).
///
/// [`types::Cell`], [`types::TickId`], [`types::EntityKind`] and
/// [`types::Connectivity`].
pub use horde_core as types;

/// The obstacle grid (`horde-space`).
pub use horde_space as space;

/// Distance fields and movement policies (`horde-field`).
///
/// [`field::build_distance_field`] is the BFS; [`field::flee`] and
/// [`field::pursue`] move a population along a field.
pub use horde_field as field;

/// Simulation engine (`horde-engine`).
pub use horde_engine as engine;

/// Common imports for typical horde usage.
///
/// ```rust
/// use horde::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use horde_core::{Cell, Connectivity, EntityKind, TickId};

    // Space
    pub use horde_space::{CellState, Grid};

    // Fields and policies
    pub use horde_field::{build_distance_field, DistanceField, MovementPolicy};

    // Errors
    pub use horde_engine::{ConfigError, StepError};
    pub use horde_field::PolicyError;
    pub use horde_space::SpaceError;

    // Engine
    pub use horde_engine::{Apocalypse, Roster, StepMetrics, WorldConfig};
}
