//! Reusable grid fixtures.
//!
//! - [`open_grid`] — obstacle-free grid of any size.
//! - [`walled_3x3`] — the 3x3 layout with obstacles at (0,1), (1,2), (2,1).
//! - [`grid_from_rows`] — build a grid from `#`/`.` text rows.

use horde_core::Cell;
use horde_space::Grid;

/// Obstacles of the [`walled_3x3`] layout.
pub const WALLED_3X3_OBSTACLES: [Cell; 3] = [Cell::new(0, 1), Cell::new(1, 2), Cell::new(2, 1)];

/// Obstacle-free `rows x cols` grid.
pub fn open_grid(rows: u32, cols: u32) -> Grid {
    Grid::new(rows, cols).expect("fixture dimensions are non-zero")
}

/// ```text
/// . # .
/// . . #
/// . # .
/// ```
pub fn walled_3x3() -> Grid {
    let mut grid = open_grid(3, 3);
    for cell in WALLED_3X3_OBSTACLES {
        grid.set_full(cell.row, cell.col)
            .expect("fixture obstacles are in bounds");
    }
    grid
}

/// Build a grid from text rows: `#` is an obstacle, anything else is open.
///
/// Panics on ragged or empty input.
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    let cols = rows.first().map_or(0, |r| r.chars().count());
    assert!(
        rows.iter().all(|r| r.chars().count() == cols),
        "ragged fixture rows"
    );
    let mut grid = open_grid(rows.len() as u32, cols as u32);
    for (r, line) in rows.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            if ch == '#' {
                grid.set_full(r as u32, c as u32)
                    .expect("fixture cell is in bounds");
            }
        }
    }
    grid
}
