//! Multi-source BFS distance fields.
//!
//! [`build_distance_field`] seeds a breadth-first search from every source
//! cell at once and expands through empty cells with four-way connectivity.
//! Each reached cell ends up holding the length of the shortest walking path
//! to its nearest source; obstacles are hard walls.
//!
//! Cells no source can reach keep the sentinel value `rows * cols`, which is
//! larger than any real path length on the grid.

use crate::frontier::Frontier;
use crate::visited::VisitedMask;
use horde_core::{Cell, Connectivity};
use horde_space::{Grid, SpaceError};
use std::fmt;
use tracing::trace;

/// Grid-shaped map from cell to shortest four-connected path length.
///
/// Values are stored row-major. Fields are immutable once built and carry
/// their own shape so policies can reject a field built for another grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceField {
    rows: u32,
    cols: u32,
    values: Vec<u32>,
}

impl DistanceField {
    /// A field with every cell at the sentinel.
    fn unreached(rows: u32, cols: u32) -> Self {
        let sentinel = rows * cols;
        Self {
            rows,
            cols,
            values: vec![sentinel; rows as usize * cols as usize],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// The "unreached" marker, `rows * cols`.
    pub fn sentinel(&self) -> u32 {
        self.rows * self.cols
    }

    /// Whether this field has the same shape as `grid`.
    pub fn matches(&self, grid: &Grid) -> bool {
        self.rows == grid.rows() && self.cols == grid.cols()
    }

    /// Distance at `cell`, or `None` if `cell` is outside the field.
    ///
    /// Unreached cells report the sentinel, not `None`.
    pub fn get(&self, cell: Cell) -> Option<u32> {
        if cell.row >= self.rows || cell.col >= self.cols {
            return None;
        }
        Some(self.values[self.index(cell)])
    }

    /// `true` if some source reaches `cell`.
    pub fn is_reachable(&self, cell: Cell) -> bool {
        self.get(cell).is_some_and(|d| d < self.sentinel())
    }

    /// Row-major values.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Number of cells holding a finite distance.
    pub fn reached_count(&self) -> usize {
        let sentinel = self.sentinel();
        self.values.iter().filter(|&&d| d < sentinel).count()
    }

    /// Largest finite distance, if any cell was reached.
    pub fn max_reached(&self) -> Option<u32> {
        let sentinel = self.sentinel();
        self.values.iter().copied().filter(|&d| d < sentinel).max()
    }

    fn index(&self, cell: Cell) -> usize {
        cell.row as usize * self.cols as usize + cell.col as usize
    }

    fn set(&mut self, cell: Cell, value: u32) {
        let i = self.index(cell);
        self.values[i] = value;
    }
}

impl fmt::Display for DistanceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sentinel = self.sentinel();
        let width = self
            .max_reached()
            .map_or(1, |m| m.to_string().len());
        for row in self.values.chunks(self.cols as usize) {
            for (i, &d) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                if d >= sentinel {
                    write!(f, "{:>width$}", "-")?;
                } else {
                    write!(f, "{d:>width$}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Build the four-connected distance field seeded by `sources`.
///
/// Sources are seeded in the order given: each is marked visited, set to
/// distance 0 and enqueued. The frontier is then drained; an unvisited
/// neighbour is expanded only if the grid marks it empty, and receives the
/// dequeued cell's distance plus one.
///
/// A source standing on an obstacle still gets distance 0 but propagation
/// never passes through other obstacles. Duplicate sources are seeded
/// once. With no sources every cell holds the sentinel.
///
/// # Errors
///
/// Returns [`SpaceError::CellOutOfBounds`] for the first source outside
/// `grid`. No field is built in that case.
///
/// # Examples
///
/// ```
/// use horde_core::Cell;
/// use horde_field::build_distance_field;
/// use horde_space::Grid;
///
/// let grid = Grid::new(5, 5).unwrap();
/// let field = build_distance_field(&grid, [Cell::new(0, 0)]).unwrap();
/// assert_eq!(field.get(Cell::new(4, 4)), Some(8));
/// ```
pub fn build_distance_field<I>(grid: &Grid, sources: I) -> Result<DistanceField, SpaceError>
where
    I: IntoIterator<Item = Cell>,
{
    let mut field = DistanceField::unreached(grid.rows(), grid.cols());
    let mut visited = VisitedMask::for_grid(grid);
    let mut frontier = Frontier::with_capacity(grid.cell_count());
    let mut seeded = 0usize;

    for source in sources {
        grid.index_of(source)?;
        if visited.mark(source) {
            field.set(source, 0);
            frontier.enqueue(source);
            seeded += 1;
        }
    }

    while let Some(current) = frontier.try_dequeue() {
        let next = field.values[field.index(current)] + 1;
        for nb in grid.neighbours(current, Connectivity::Four) {
            if !visited.is_marked(nb) && grid.is_open(nb) {
                visited.mark(nb);
                field.set(nb, next);
                frontier.enqueue(nb);
            }
        }
    }

    trace!(
        rows = grid.rows(),
        cols = grid.cols(),
        seeded,
        reached = field.reached_count(),
        "distance field built"
    );
    Ok(field)
}
