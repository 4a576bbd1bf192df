//! Shared helpers for 2D row-major grids.

use crate::error::SpaceError;
use horde_core::{Cell, Connectivity};
use smallvec::SmallVec;

/// Check that a cell is in bounds and return it unchanged.
pub(crate) fn check_2d_bounds(cell: Cell, rows: u32, cols: u32) -> Result<Cell, SpaceError> {
    if cell.row >= rows || cell.col >= cols {
        return Err(SpaceError::CellOutOfBounds { cell, rows, cols });
    }
    Ok(cell)
}

/// Row-major canonical ordering: `(0,0), (0,1), ..., (rows-1, cols-1)`.
pub(crate) fn canonical_ordering_2d(rows: u32, cols: u32) -> impl Iterator<Item = Cell> {
    (0..rows).flat_map(move |r| (0..cols).map(move |c| Cell::new(r, c)))
}

/// Resolve a single axis value, clipping at the edges.
/// Returns `None` when the value falls outside `[0, len)`.
pub(crate) fn resolve_axis(val: u32, delta: i32, len: u32) -> Option<u32> {
    let moved = val.checked_add_signed(delta)?;
    (moved < len).then_some(moved)
}

/// Neighbours of `cell` under `connectivity`, in offset order, with
/// out-of-grid positions omitted.
pub(crate) fn neighbours_clipped(
    cell: Cell,
    rows: u32,
    cols: u32,
    connectivity: Connectivity,
) -> SmallVec<[Cell; 8]> {
    let mut result = SmallVec::new();
    for &(dr, dc) in connectivity.offsets() {
        let nr = resolve_axis(cell.row, dr, rows);
        let nc = resolve_axis(cell.col, dc, cols);
        if let (Some(nr), Some(nc)) = (nr, nc) {
            result.push(Cell::new(nr, nc));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_axis_in_bounds() {
        assert_eq!(resolve_axis(2, 1, 5), Some(3));
        assert_eq!(resolve_axis(0, 0, 5), Some(0));
    }

    #[test]
    fn resolve_axis_clips_both_edges() {
        assert_eq!(resolve_axis(0, -1, 5), None);
        assert_eq!(resolve_axis(4, 1, 5), None);
    }

    #[test]
    fn check_bounds_rejects_each_axis() {
        assert!(check_2d_bounds(Cell::new(2, 3), 3, 4).is_ok());
        assert!(check_2d_bounds(Cell::new(3, 0), 3, 4).is_err());
        assert!(check_2d_bounds(Cell::new(0, 4), 3, 4).is_err());
    }

    #[test]
    fn canonical_ordering_is_row_major() {
        let cells: Vec<Cell> = canonical_ordering_2d(2, 2).collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(1, 1)
            ]
        );
    }

    #[test]
    fn clipped_corner_four_way() {
        let n = neighbours_clipped(Cell::new(0, 0), 3, 3, Connectivity::Four);
        assert_eq!(n.as_slice(), &[Cell::new(1, 0), Cell::new(0, 1)]);
    }

    #[test]
    fn clipped_corner_eight_way() {
        let n = neighbours_clipped(Cell::new(2, 2), 3, 3, Connectivity::Eight);
        assert_eq!(
            n.as_slice(),
            &[Cell::new(1, 2), Cell::new(2, 1), Cell::new(1, 1)]
        );
    }
}
