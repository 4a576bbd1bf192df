//! Simulation engine for horde worlds.
//!
//! [`Apocalypse`] ties a [`Grid`](horde_space::Grid), two populations and
//! a seeded random source together and advances them one tick at a time.
//! [`WorldConfig`] describes the starting state; [`StepMetrics`] reports
//! what each tick cost.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod metrics;
pub mod world;

pub use config::{ConfigError, WorldConfig};
pub use error::StepError;
pub use metrics::StepMetrics;
pub use world::{Apocalypse, Roster};
