//! Benchmark profiles for horde worlds.
//!
//! Provides pre-built [`WorldConfig`] profiles for benchmarks and examples:
//!
//! - [`reference_profile`]: 30x40 grid with two broken walls, 8 zombies, 40 humans
//! - [`stress_profile`]: 300x400 grid with the same layout scaled up
//! - [`scatter_agents`]: deterministic agent placement on open cells

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashSet;

use horde_core::Cell;
use horde_engine::WorldConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Build the reference profile: a 30x40 grid (1200 cells).
///
/// One horizontal and one vertical wall cross the grid, each with a gap
/// every ten cells. Agents are scattered over the remaining open cells.
pub fn reference_profile(seed: u64) -> WorldConfig {
    walled_profile(30, 40, 8, 40, seed)
}

/// Build a stress profile: a 300x400 grid (120K cells).
///
/// Same layout as [`reference_profile`] at 100x the cell count.
pub fn stress_profile(seed: u64) -> WorldConfig {
    walled_profile(300, 400, 80, 400, seed)
}

fn walled_profile(rows: u32, cols: u32, zombies: usize, humans: usize, seed: u64) -> WorldConfig {
    let mid_row = rows / 2;
    let mid_col = cols / 2;
    let horizontal = (0..cols)
        .filter(|c| c % 10 != 5)
        .map(|c| Cell::new(mid_row, c));
    let vertical = (0..rows)
        .filter(|r| r % 10 != 5 && *r != mid_row)
        .map(|r| Cell::new(r, mid_col));
    let obstacles: Vec<Cell> = horizontal.chain(vertical).collect();

    let mut placed = scatter_agents(rows, cols, &obstacles, zombies + humans, seed).into_iter();
    WorldConfig::new(rows, cols)
        .with_obstacles(obstacles)
        .with_zombies(placed.by_ref().take(zombies))
        .with_humans(placed)
        .with_seed(seed)
}

/// Place `n` agents on distinct open cells, deterministically from `seed`.
///
/// Returns fewer than `n` cells if the grid does not have `n` open cells.
pub fn scatter_agents(rows: u32, cols: u32, obstacles: &[Cell], n: usize, seed: u64) -> Vec<Cell> {
    let mut taken: HashSet<Cell> = obstacles.iter().copied().collect();
    let open = (rows as usize * cols as usize).saturating_sub(taken.len());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut agents = Vec::with_capacity(n.min(open));

    while agents.len() < n.min(open) {
        let cell = Cell::new(rng.random_range(0..rows), rng.random_range(0..cols));
        if taken.insert(cell) {
            agents.push(cell);
        }
    }
    agents
}
