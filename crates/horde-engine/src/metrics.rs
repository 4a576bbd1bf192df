//! Per-tick metrics for the simulation engine.
//!
//! [`StepMetrics`] captures timing and movement counts for a single
//! [`step()`](crate::world::Apocalypse::step).

/// Timing and movement data collected during a single tick.
///
/// All durations are in microseconds. The world overwrites these after
/// each successful `step()`; a failed step leaves the previous values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire tick, in microseconds.
    pub total_us: u64,
    /// Time spent building the zombie-seeded field, in microseconds.
    pub zombie_field_us: u64,
    /// Time spent building the human-seeded field, in microseconds.
    pub human_field_us: u64,
    /// Number of humans whose cell changed this tick.
    pub humans_moved: usize,
    /// Number of zombies whose cell changed this tick.
    pub zombies_moved: usize,
}
