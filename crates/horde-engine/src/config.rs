//! World configuration, validation, and error types.
//!
//! [`WorldConfig`] is the constructor input for an
//! [`Apocalypse`](crate::world::Apocalypse). [`validate()`](WorldConfig::validate)
//! checks structural invariants up front so construction either succeeds
//! completely or not at all.

use std::error::Error;
use std::fmt;

use horde_core::Cell;
use horde_space::{Grid, SpaceError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating or parsing a [`WorldConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid dimensions or a listed cell are invalid.
    Space(SpaceError),
    /// A text map could not be parsed.
    Map {
        /// 1-based line number of the offending row.
        line: usize,
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::Map { line, reason } => write!(f, "map line {line}: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Map { .. } => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── WorldConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing a simulation world.
///
/// Empty lists mean "none". Zombie and human lists keep their order; the
/// world preserves it for the lifetime of each agent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldConfig {
    /// Grid height.
    pub rows: u32,
    /// Grid width.
    pub cols: u32,
    /// Cells to mark as obstacles.
    pub obstacles: Vec<Cell>,
    /// Initial zombie positions, in agent order.
    pub zombies: Vec<Cell>,
    /// Initial human positions, in agent order.
    pub humans: Vec<Cell>,
    /// RNG seed for tie-breaking between equally good moves.
    pub seed: u64,
}

impl WorldConfig {
    /// An empty `rows x cols` world with seed 0.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            obstacles: Vec::new(),
            zombies: Vec::new(),
            humans: Vec::new(),
            seed: 0,
        }
    }

    /// Set the obstacle list.
    pub fn with_obstacles(mut self, obstacles: impl IntoIterator<Item = Cell>) -> Self {
        self.obstacles = obstacles.into_iter().collect();
        self
    }

    /// Set the zombie list.
    pub fn with_zombies(mut self, zombies: impl IntoIterator<Item = Cell>) -> Self {
        self.zombies = zombies.into_iter().collect();
        self
    }

    /// Set the human list.
    pub fn with_humans(mut self, humans: impl IntoIterator<Item = Cell>) -> Self {
        self.humans = humans.into_iter().collect();
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate all structural invariants.
    ///
    /// Checks that the dimensions describe a non-empty grid whose cell
    /// count fits in `u32`, and that every listed cell is in bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build_grid().map(|_| ())
    }

    /// Build the obstacle grid described by this config.
    pub(crate) fn build_grid(&self) -> Result<Grid, ConfigError> {
        let mut grid = Grid::new(self.rows, self.cols)?;
        for cell in &self.obstacles {
            grid.set_full(cell.row, cell.col)?;
        }
        for &cell in self.zombies.iter().chain(&self.humans) {
            grid.index_of(cell)?;
        }
        Ok(grid)
    }

    /// Parse a text layout.
    ///
    /// One line per row, all of equal length. `.` is empty, `#` an
    /// obstacle, `Z` a zombie, `H` a human and `X` a zombie and a human on
    /// the same cell. Agents are numbered in reading order. Blank lines
    /// before and after the layout are ignored.
    ///
    /// ```
    /// use horde_engine::WorldConfig;
    ///
    /// let config = WorldConfig::from_map(
    ///     "
    ///     .#Z
    ///     .H#
    ///     .#.
    ///     ",
    ///     7,
    /// )
    /// .unwrap();
    /// assert_eq!((config.rows, config.cols), (3, 3));
    /// assert_eq!(config.obstacles.len(), 3);
    /// assert_eq!(config.seed, 7);
    /// ```
    pub fn from_map(text: &str, seed: u64) -> Result<Self, ConfigError> {
        let lines: Vec<(usize, &str)> = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .skip_while(|(_, l)| l.is_empty())
            .collect();
        let end = lines
            .iter()
            .rposition(|(_, l)| !l.is_empty())
            .map_or(0, |p| p + 1);
        let lines = &lines[..end];

        let Some(&(_, first)) = lines.first() else {
            return Err(ConfigError::Map {
                line: 1,
                reason: "map has no rows".into(),
            });
        };
        let cols = first.chars().count();
        let mut config = Self::new(lines.len() as u32, cols as u32).with_seed(seed);

        for (r, &(line, text)) in lines.iter().enumerate() {
            let width = text.chars().count();
            if width != cols {
                return Err(ConfigError::Map {
                    line,
                    reason: format!("row has {width} cells, expected {cols}"),
                });
            }
            for (c, ch) in text.chars().enumerate() {
                let cell = Cell::new(r as u32, c as u32);
                match ch {
                    '.' => {}
                    '#' => config.obstacles.push(cell),
                    'Z' => config.zombies.push(cell),
                    'H' => config.humans.push(cell),
                    'X' => {
                        config.zombies.push(cell);
                        config.humans.push(cell);
                    }
                    other => {
                        return Err(ConfigError::Map {
                            line,
                            reason: format!("unknown cell glyph {other:?}"),
                        })
                    }
                }
            }
        }
        config.validate()?;
        Ok(config)
    }
}
