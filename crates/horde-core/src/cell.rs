//! Grid cell coordinates.

use std::fmt;

/// A `(row, col)` coordinate on a rectangular grid.
///
/// Rows grow downward and columns grow rightward. A `Cell` carries no
/// knowledge of the grid it belongs to; bounds are checked by the grid when
/// a caller hands one in.
///
/// Ordering is row-major, so sorting a list of cells yields canonical grid
/// order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index, `0` at the top.
    pub row: u32,
    /// Column index, `0` at the left.
    pub col: u32,
}

impl Cell {
    /// Create a cell from a row and a column.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Apply a signed `(d_row, d_col)` offset.
    ///
    /// Returns `None` if either axis would go below zero or overflow. The
    /// result is not checked against any grid's upper bound.
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(Self { row, col })
    }

    /// Manhattan (L1) distance, ignoring obstacles.
    pub fn manhattan(self, other: Self) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Chebyshev (L-inf) distance, ignoring obstacles.
    pub fn chebyshev(self, other: Self) -> u32 {
        self.row
            .abs_diff(other.row)
            .max(self.col.abs_diff(other.col))
    }
}

impl From<(u32, u32)> for Cell {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

impl From<Cell> for (u32, u32) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
