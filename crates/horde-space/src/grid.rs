//! Fixed-size 2D obstacle grid with clipped 4- and 8-connected neighbourhoods.

use crate::error::SpaceError;
use crate::grid2d;
use horde_core::{Cell, Connectivity};
use smallvec::SmallVec;
use std::fmt;

/// Neighbour list returned by [`Grid`] enumeration.
///
/// Eight inline slots cover both neighbourhoods without heap allocation.
pub type Neighbours = SmallVec<[Cell; 8]>;

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Walkable.
    #[default]
    Empty,
    /// Blocked by an obstacle.
    Full,
}

/// A two-dimensional matrix of [`CellState`]s.
///
/// Each cell has coordinate `(row, col)` where `0 <= row < rows` and
/// `0 <= col < cols`. Storage is row-major. Dimensions are fixed at
/// construction; only cell states change afterwards.
///
/// Neighbour enumeration clips to the grid: neighbours that would fall
/// outside are omitted, never wrapped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a new all-empty grid with `rows * cols` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::CellCountOverflow)` if the cell count does not fit
    /// in `u32` (distance fields use the cell count as their sentinel).
    ///
    /// # Examples
    ///
    /// ```
    /// use horde_core::Cell;
    /// use horde_space::Grid;
    ///
    /// let grid = Grid::new(16, 16).unwrap();
    /// assert_eq!(grid.cell_count(), 256);
    ///
    /// // Corner cell: only 2 four-way neighbours.
    /// assert_eq!(grid.four_neighbours(Cell::new(0, 0)).len(), 2);
    /// ```
    pub fn new(rows: u32, cols: u32) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if rows.checked_mul(cols).is_none() {
            return Err(SpaceError::CellCountOverflow { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::Empty; rows as usize * cols as usize],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells, `rows * cols`.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Row-major flat index of `cell`.
    pub fn index_of(&self, cell: Cell) -> Result<usize, SpaceError> {
        let cell = grid2d::check_2d_bounds(cell, self.rows, self.cols)?;
        Ok(self.flat(cell))
    }

    /// Inverse of [`index_of`](Self::index_of).
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        if index >= self.cells.len() {
            return None;
        }
        let cols = self.cols as usize;
        Some(Cell::new((index / cols) as u32, (index % cols) as u32))
    }

    /// Mark `(row, col)` as an obstacle.
    pub fn set_full(&mut self, row: u32, col: u32) -> Result<(), SpaceError> {
        self.set(Cell::new(row, col), CellState::Full)
    }

    /// Mark `(row, col)` as walkable.
    pub fn set_empty(&mut self, row: u32, col: u32) -> Result<(), SpaceError> {
        self.set(Cell::new(row, col), CellState::Empty)
    }

    /// Set the state of `cell`.
    pub fn set(&mut self, cell: Cell, state: CellState) -> Result<(), SpaceError> {
        let i = self.index_of(cell)?;
        self.cells[i] = state;
        Ok(())
    }

    /// Checked query: is `(row, col)` walkable?
    pub fn is_empty(&self, row: u32, col: u32) -> Result<bool, SpaceError> {
        Ok(self.state(Cell::new(row, col))? == CellState::Empty)
    }

    /// State of `cell`.
    pub fn state(&self, cell: Cell) -> Result<CellState, SpaceError> {
        let i = self.index_of(cell)?;
        Ok(self.cells[i])
    }

    /// Unchecked walkability test for cells produced by neighbour
    /// enumeration. Cells outside the grid are never open.
    pub fn is_open(&self, cell: Cell) -> bool {
        self.contains(cell) && self.cells[self.flat(cell)] == CellState::Empty
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
    }

    /// Number of obstacle cells.
    pub fn full_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s == CellState::Full).count()
    }

    /// Obstacle cells in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Cell> + '_ {
        grid2d::canonical_ordering_2d(self.rows, self.cols)
            .zip(self.cells.iter())
            .filter(|(_, s)| **s == CellState::Full)
            .map(|(c, _)| c)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        grid2d::canonical_ordering_2d(self.rows, self.cols)
    }

    /// Up, down, left, right neighbours of `cell`, clipped to the grid.
    pub fn four_neighbours(&self, cell: Cell) -> Neighbours {
        self.neighbours(cell, Connectivity::Four)
    }

    /// Four-way neighbours followed by up-left, up-right, down-left,
    /// down-right, clipped to the grid.
    pub fn eight_neighbours(&self, cell: Cell) -> Neighbours {
        self.neighbours(cell, Connectivity::Eight)
    }

    /// Neighbours of `cell` in the fixed order of
    /// [`Connectivity::offsets`]. A `cell` outside the grid has none.
    pub fn neighbours(&self, cell: Cell, connectivity: Connectivity) -> Neighbours {
        if !self.contains(cell) {
            return Neighbours::new();
        }
        grid2d::neighbours_clipped(cell, self.rows, self.cols, connectivity)
    }

    fn flat(&self, cell: Cell) -> usize {
        cell.row as usize * self.cols as usize + cell.col as usize
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols as usize) {
            for state in row {
                let glyph = match state {
                    CellState::Empty => '.',
                    CellState::Full => '#',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
