//! Test utilities for horde development.
//!
//! Provides standard grid fixtures, a seeded random source, and
//! [`reference_distances`], a deliberately naive shortest-path solver used
//! to cross-check the BFS distance field builder.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use horde_core::Cell;
use horde_space::Grid;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub mod fixtures;

pub use fixtures::{grid_from_rows, open_grid, walled_3x3, WALLED_3X3_OBSTACLES};

/// Deterministic generator for tie-breaking in tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Shortest four-connected distances by repeated relaxation.
///
/// Independent of the BFS builder: starts every in-bounds source at 0 and
/// sweeps the whole grid, lowering each open cell to one more than its
/// best four-way neighbour, until a sweep changes nothing. Unreached cells
/// hold `rows * cols`. Values are returned row-major.
///
/// Quadratic in the cell count; only meant for small fixtures.
pub fn reference_distances(grid: &Grid, sources: &[Cell]) -> Vec<u32> {
    let sentinel = grid.rows() * grid.cols();
    let cols = grid.cols() as usize;
    let idx = |c: Cell| c.row as usize * cols + c.col as usize;

    let mut dist = vec![sentinel; grid.cell_count()];
    for &s in sources.iter().filter(|s| grid.contains(**s)) {
        dist[idx(s)] = 0;
    }

    let mut changed = true;
    while changed {
        changed = false;
        for cell in grid.cells() {
            if !grid.is_open(cell) {
                continue;
            }
            let best = [(-1i32, 0i32), (1, 0), (0, -1), (0, 1)]
                .into_iter()
                .filter_map(|(dr, dc)| cell.offset(dr, dc))
                .filter(|nb| grid.contains(*nb))
                .map(|nb| dist[idx(nb)])
                .filter(|&d| d < sentinel)
                .min();
            if let Some(best) = best {
                if best + 1 < dist[idx(cell)] {
                    dist[idx(cell)] = best + 1;
                    changed = true;
                }
            }
        }
    }
    dist
}
