//! Grid compliance test helpers.
//!
//! These functions verify invariants every grid shape must satisfy.
//! Reused by the grid test module for square, strip and degenerate shapes.

use crate::grid::Grid;
use horde_core::{Cell, Connectivity};
use std::collections::HashSet;

const BOTH: [Connectivity; 2] = [Connectivity::Four, Connectivity::Eight];

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(grid: &Grid) {
    for conn in BOTH {
        for cell in grid.cells() {
            for nb in grid.neighbours(cell, conn) {
                assert!(
                    grid.neighbours(nb, conn).contains(&cell),
                    "{conn:?} symmetry violated: {nb} in N({cell}) but {cell} not in N({nb})"
                );
            }
        }
    }
}

/// Assert that no cell is its own neighbour and no neighbour repeats.
pub fn assert_neighbours_distinct(grid: &Grid) {
    for conn in BOTH {
        for cell in grid.cells() {
            let nbs = grid.neighbours(cell, conn);
            let unique: HashSet<Cell> = nbs.iter().copied().collect();
            assert_eq!(unique.len(), nbs.len(), "duplicate neighbour of {cell}");
            assert!(!unique.contains(&cell), "{cell} is its own neighbour");
        }
    }
}

/// Assert that two enumerations of the same cell return the same order.
pub fn assert_neighbour_order_deterministic(grid: &Grid) {
    for conn in BOTH {
        for cell in grid.cells() {
            assert_eq!(grid.neighbours(cell, conn), grid.neighbours(cell, conn));
        }
    }
}

/// Assert that `cells()` returns exactly `cell_count` unique cells and that
/// each round-trips through `index_of`/`cell_at`.
pub fn assert_cells_complete(grid: &Grid) {
    let all: Vec<Cell> = grid.cells().collect();
    assert_eq!(all.len(), grid.cell_count());
    let unique: HashSet<&Cell> = all.iter().collect();
    assert_eq!(unique.len(), grid.cell_count(), "cells() has duplicates");
    for (i, cell) in all.iter().enumerate() {
        assert_eq!(grid.index_of(*cell).ok(), Some(i));
        assert_eq!(grid.cell_at(i), Some(*cell));
    }
}

/// Run all compliance checks on a grid.
pub fn run_full_compliance(grid: &Grid) {
    assert_neighbours_symmetric(grid);
    assert_neighbours_distinct(grid);
    assert_neighbour_order_deterministic(grid);
    assert_cells_complete(grid);
}
