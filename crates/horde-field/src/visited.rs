//! Per-build visited markers.

use horde_core::Cell;
use horde_space::Grid;

/// Boolean marker per grid cell, owned by a single field build.
///
/// Kept apart from the obstacle grid: a cell can be empty and visited or
/// empty and unvisited. A fresh mask is created for every build and dropped
/// with it, so no marks survive between ticks.
#[derive(Debug)]
pub(crate) struct VisitedMask {
    cols: usize,
    marks: Vec<bool>,
}

impl VisitedMask {
    /// All-unvisited mask shaped like `grid`.
    pub(crate) fn for_grid(grid: &Grid) -> Self {
        Self {
            cols: grid.cols() as usize,
            marks: vec![false; grid.cell_count()],
        }
    }

    /// Mark `cell`; returns `true` if it was not marked before.
    ///
    /// `cell` must lie inside the grid the mask was built for.
    pub(crate) fn mark(&mut self, cell: Cell) -> bool {
        let i = self.index(cell);
        !std::mem::replace(&mut self.marks[i], true)
    }

    pub(crate) fn is_marked(&self, cell: Cell) -> bool {
        self.marks[self.index(cell)]
    }

    fn index(&self, cell: Cell) -> usize {
        cell.row as usize * self.cols + cell.col as usize
    }
}
