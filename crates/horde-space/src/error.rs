//! Error types for grid operations.

use horde_core::Cell;
use std::fmt;

/// Errors arising from grid construction or cell access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A cell is outside the bounds of the grid.
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Number of rows in the grid.
        rows: u32,
        /// Number of columns in the grid.
        cols: u32,
    },
    /// Attempted to construct a grid with zero cells.
    EmptySpace,
    /// `rows * cols` does not fit in `u32`, so no distance sentinel exists.
    CellCountOverflow {
        /// Requested rows.
        rows: u32,
        /// Requested columns.
        cols: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutOfBounds { cell, rows, cols } => {
                write!(f, "cell {cell} out of bounds: [0, {rows}) x [0, {cols})")
            }
            Self::EmptySpace => write!(f, "grid must have at least one cell"),
            Self::CellCountOverflow { rows, cols } => {
                write!(f, "grid {rows}x{cols} has more than u32::MAX cells")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
