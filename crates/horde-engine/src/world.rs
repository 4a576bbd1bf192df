//! The simulation world.
//!
//! [`Apocalypse`] owns an obstacle [`Grid`], the zombie and human lists,
//! and the random source used for tie-breaking. Each
//! [`step()`](Apocalypse::step) builds both distance fields from the
//! positions at the start of the tick, moves both populations against
//! them, and commits the new lists together.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self`. [`zombies()`](Apocalypse::zombies)
//! and [`humans()`](Apocalypse::humans) hand out a [`Roster`] that borrows
//! the world, so the borrow checker rules out stepping while a caller is
//! still walking a population.

use std::fmt;
use std::iter::FusedIterator;
use std::slice;
use std::time::Instant;

use horde_core::{Cell, EntityKind, TickId};
use horde_field::{advance, build_distance_field, DistanceField, MovementPolicy, PolicyError};
use horde_space::{Grid, SpaceError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::config::{ConfigError, WorldConfig};
use crate::error::StepError;
use crate::metrics::StepMetrics;

// Compile-time assertion: the default world is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Apocalypse>();
    }
};

// ── Roster ──────────────────────────────────────────────────────

/// Iterator over one population, in insertion order.
///
/// A clone walks the remaining cells independently, so cloning a fresh
/// roster gives as many passes over the population as needed.
#[derive(Clone, Debug)]
pub struct Roster<'w> {
    inner: slice::Iter<'w, Cell>,
}

impl<'w> Roster<'w> {
    fn new(cells: &'w [Cell]) -> Self {
        Self {
            inner: cells.iter(),
        }
    }

    /// The cells not yet yielded, as a slice.
    pub fn as_slice(&self) -> &'w [Cell] {
        self.inner.as_slice()
    }
}

impl Iterator for Roster<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Roster<'_> {
    fn next_back(&mut self) -> Option<Cell> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for Roster<'_> {}

impl FusedIterator for Roster<'_> {}

// ── Apocalypse ──────────────────────────────────────────────────

/// A grid of obstacles with a zombie horde and the humans fleeing it.
///
/// Humans move in eight directions away from the nearest zombie; zombies
/// move in four directions towards the nearest human. Distances are always
/// four-connected path lengths around obstacles.
///
/// The random source `R` only breaks ties between equally good moves. The
/// default [`ChaCha8Rng`] is seeded from [`WorldConfig::seed`], so two
/// worlds built from the same config evolve identically.
///
/// # Example
///
/// ```
/// use horde_core::Cell;
/// use horde_engine::{Apocalypse, WorldConfig};
///
/// let config = WorldConfig::new(5, 5)
///     .with_zombies([Cell::new(0, 0)])
///     .with_humans([Cell::new(2, 2)]);
/// let mut world = Apocalypse::new(config).unwrap();
/// world.step().unwrap();
/// assert_eq!(world.num_humans(), 1);
/// assert_eq!(world.current_tick().0, 1);
/// ```
#[derive(Debug)]
pub struct Apocalypse<R = ChaCha8Rng> {
    grid: Grid,
    zombies: Vec<Cell>,
    humans: Vec<Cell>,
    rng: R,
    seed: u64,
    tick: TickId,
    last_metrics: StepMetrics,
}

impl Apocalypse<ChaCha8Rng> {
    /// Create a world from a [`WorldConfig`], seeding the tie-break RNG
    /// with `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the dimensions are invalid or any listed
    /// cell lies outside the grid.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }

    /// Restart the tie-break RNG from `seed`.
    ///
    /// Positions and the tick counter are unchanged.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }
}

impl<R: Rng> Apocalypse<R> {
    /// Create a world from a [`WorldConfig`] with an explicit random source.
    ///
    /// `config.seed` is still recorded and reported by
    /// [`seed()`](Self::seed), but `rng` is used as given.
    pub fn with_rng(config: WorldConfig, rng: R) -> Result<Self, ConfigError> {
        let grid = config.build_grid()?;
        let world = Self {
            grid,
            zombies: config.zombies,
            humans: config.humans,
            rng,
            seed: config.seed,
            tick: TickId::default(),
            last_metrics: StepMetrics::default(),
        };
        info!(
            rows = world.grid.rows(),
            cols = world.grid.cols(),
            obstacles = world.grid.full_count(),
            zombies = world.zombies.len(),
            humans = world.humans.len(),
            seed = world.seed,
            "world created"
        );
        debug!("initial layout\n{world}");
        Ok(world)
    }

    /// Remove every obstacle, zombie and human. Dimensions are kept.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.zombies.clear();
        self.humans.clear();
        info!(
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            "world cleared"
        );
    }

    /// Mark `(row, col)` as an obstacle.
    ///
    /// Agents already on that cell stay where they are.
    pub fn add_obstacle(&mut self, row: u32, col: u32) -> Result<(), SpaceError> {
        self.grid.set_full(row, col)
    }

    /// Append a zombie at `(row, col)`.
    pub fn add_zombie(&mut self, row: u32, col: u32) -> Result<(), SpaceError> {
        let cell = Cell::new(row, col);
        self.grid.index_of(cell)?;
        self.zombies.push(cell);
        Ok(())
    }

    /// Append a human at `(row, col)`.
    pub fn add_human(&mut self, row: u32, col: u32) -> Result<(), SpaceError> {
        let cell = Cell::new(row, col);
        self.grid.index_of(cell)?;
        self.humans.push(cell);
        Ok(())
    }

    /// Number of zombies.
    pub fn num_zombies(&self) -> usize {
        self.zombies.len()
    }

    /// Number of humans.
    pub fn num_humans(&self) -> usize {
        self.humans.len()
    }

    /// Current zombie positions, in insertion order.
    pub fn zombies(&self) -> Roster<'_> {
        Roster::new(&self.zombies)
    }

    /// Current human positions, in insertion order.
    pub fn humans(&self) -> Roster<'_> {
        Roster::new(&self.humans)
    }

    /// Positions of the given population.
    pub fn population(&self, kind: EntityKind) -> Roster<'_> {
        Roster::new(self.agents(kind))
    }

    fn agents(&self, kind: EntityKind) -> &[Cell] {
        match kind {
            EntityKind::Zombie => &self.zombies,
            EntityKind::Human => &self.humans,
        }
    }

    /// Shortest four-connected distance from every cell to the nearest
    /// member of `kind`.
    ///
    /// # Errors
    ///
    /// [`SpaceError::CellOutOfBounds`] if a member of `kind` lies outside
    /// the grid. Positions are checked on entry, so this only fires if that
    /// invariant has been broken.
    pub fn compute_distance_field(&self, kind: EntityKind) -> Result<DistanceField, SpaceError> {
        build_distance_field(&self.grid, self.population(kind))
    }

    /// New positions for `kind` moving along `field`. Nothing is committed.
    fn next_positions(
        &mut self,
        kind: EntityKind,
        field: &DistanceField,
    ) -> Result<Vec<Cell>, PolicyError> {
        let agents = match kind {
            EntityKind::Zombie => &self.zombies,
            EntityKind::Human => &self.humans,
        };
        advance(MovementPolicy::for_kind(kind), &self.grid, field, agents, &mut self.rng)
    }

    /// Move every human one step away from the zombies described by
    /// `zombie_field`.
    ///
    /// # Errors
    ///
    /// [`PolicyError::ShapeMismatch`] if the field was built for another
    /// grid shape, or [`PolicyError::AgentOutOfBounds`] if a human lies
    /// outside the grid. The human list is unchanged on error.
    pub fn move_humans(&mut self, zombie_field: &DistanceField) -> Result<(), PolicyError> {
        self.humans = self.next_positions(EntityKind::Human, zombie_field)?;
        Ok(())
    }

    /// Move every zombie one step towards the humans described by
    /// `human_field`.
    ///
    /// # Errors
    ///
    /// [`PolicyError::ShapeMismatch`] if the field was built for another
    /// grid shape, or [`PolicyError::AgentOutOfBounds`] if a zombie lies
    /// outside the grid. The zombie list is unchanged on error.
    pub fn move_zombies(&mut self, human_field: &DistanceField) -> Result<(), PolicyError> {
        self.zombies = self.next_positions(EntityKind::Zombie, human_field)?;
        Ok(())
    }

    /// Advance the world by one tick.
    ///
    /// Both fields are built from the positions at the start of the tick,
    /// so neither population reacts to the other's move in the same tick.
    /// The new lists are committed only if both fields build and both
    /// policies succeed.
    ///
    /// # Errors
    ///
    /// [`StepError`] wrapping the first field or policy failure.
    pub fn step(&mut self) -> Result<&StepMetrics, StepError> {
        let tick_start = Instant::now();

        let t = Instant::now();
        let zombie_field = self.compute_distance_field(EntityKind::Zombie)?;
        let zombie_field_us = t.elapsed().as_micros() as u64;

        let t = Instant::now();
        let human_field = self.compute_distance_field(EntityKind::Human)?;
        let human_field_us = t.elapsed().as_micros() as u64;

        let humans = self.next_positions(EntityKind::Human, &zombie_field)?;
        let zombies = self.next_positions(EntityKind::Zombie, &human_field)?;

        let humans_moved = count_moved(&self.humans, &humans);
        let zombies_moved = count_moved(&self.zombies, &zombies);
        self.humans = humans;
        self.zombies = zombies;
        self.tick = self.tick.next();

        self.last_metrics = StepMetrics {
            total_us: tick_start.elapsed().as_micros() as u64,
            zombie_field_us,
            human_field_us,
            humans_moved,
            zombies_moved,
        };
        debug!(
            tick = %self.tick,
            humans_moved,
            zombies_moved,
            total_us = self.last_metrics.total_us,
            "tick complete"
        );
        Ok(&self.last_metrics)
    }

    /// The obstacle grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of completed ticks.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// The seed this world was configured (or last reseeded) with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Metrics from the most recent successful [`step()`](Self::step).
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}

fn count_moved(before: &[Cell], after: &[Cell]) -> usize {
    before.iter().zip(after).filter(|(a, b)| a != b).count()
}

/// Row per line: `#` obstacle, `Z` zombie, `H` human, `X` both, `.` empty.
impl<R> fmt::Display for Apocalypse<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const ZOMBIE: u8 = 0b01;
        const HUMAN: u8 = 0b10;

        let mut occupancy = vec![0u8; self.grid.cell_count()];
        for (agents, bit) in [(&self.zombies, ZOMBIE), (&self.humans, HUMAN)] {
            for &cell in agents {
                if let Ok(i) = self.grid.index_of(cell) {
                    occupancy[i] |= bit;
                }
            }
        }

        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                let cell = Cell::new(row, col);
                let glyph = if !self.grid.is_open(cell) {
                    '#'
                } else {
                    match self.grid.index_of(cell).map(|i| occupancy[i]) {
                        Ok(b) if b == ZOMBIE | HUMAN => 'X',
                        Ok(ZOMBIE) => EntityKind::Zombie.glyph(),
                        Ok(HUMAN) => EntityKind::Human.glyph(),
                        _ => '.',
                    }
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horde_test_utils::{seeded_rng, WALLED_3X3_OBSTACLES};

    fn c(r: u32, col: u32) -> Cell {
        Cell::new(r, col)
    }

    fn walled() -> Apocalypse {
        let config = WorldConfig::new(3, 3)
            .with_obstacles(WALLED_3X3_OBSTACLES)
            .with_zombies([c(0, 2)])
            .with_humans([c(1, 1)]);
        Apocalypse::new(config).unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_copies_config() {
        let world = walled();
        assert_eq!(world.num_zombies(), 1);
        assert_eq!(world.num_humans(), 1);
        assert_eq!(world.grid().full_count(), 3);
        assert_eq!(world.current_tick(), TickId(0));
        assert_eq!(world.last_metrics(), &StepMetrics::default());
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = WorldConfig::new(2, 2).with_zombies([c(5, 5)]);
        assert!(matches!(
            Apocalypse::new(config),
            Err(ConfigError::Space(SpaceError::CellOutOfBounds { .. }))
        ));
    }

    #[test]
    fn with_rng_records_config_seed() {
        let world = Apocalypse::with_rng(WorldConfig::new(2, 2).with_seed(9), seeded_rng(1)).unwrap();
        assert_eq!(world.seed(), 9);
    }

    // ── Mutation ────────────────────────────────────────────────

    #[test]
    fn add_agents_append_in_order() {
        let mut world = Apocalypse::new(WorldConfig::new(4, 4)).unwrap();
        world.add_human(0, 0).unwrap();
        world.add_human(3, 3).unwrap();
        world.add_human(0, 0).unwrap();
        world.add_zombie(2, 1).unwrap();
        assert_eq!(
            world.humans().collect::<Vec<_>>(),
            vec![c(0, 0), c(3, 3), c(0, 0)]
        );
        assert_eq!(world.zombies().collect::<Vec<_>>(), vec![c(2, 1)]);
    }

    #[test]
    fn add_out_of_bounds_is_rejected_and_not_recorded() {
        let mut world = Apocalypse::new(WorldConfig::new(2, 3)).unwrap();
        assert!(world.add_human(2, 0).is_err());
        assert!(world.add_zombie(0, 3).is_err());
        assert!(world.add_obstacle(9, 9).is_err());
        assert_eq!(world.num_humans(), 0);
        assert_eq!(world.num_zombies(), 0);
        assert_eq!(world.grid().full_count(), 0);
    }

    #[test]
    fn clear_keeps_dimensions() {
        let mut world = walled();
        world.clear();
        assert_eq!(world.num_zombies(), 0);
        assert_eq!(world.num_humans(), 0);
        assert_eq!(world.grid().full_count(), 0);
        assert_eq!((world.grid().rows(), world.grid().cols()), (3, 3));
    }

    #[test]
    fn reseed_replays_tie_breaks() {
        let config = WorldConfig::new(7, 7)
            .with_zombies([c(3, 3)])
            .with_humans([c(0, 3), c(6, 3)]);
        let mut world = Apocalypse::new(config).unwrap();
        world.reseed(42);
        world.step().unwrap();
        let first: Vec<Cell> = world.humans().collect();

        let config = WorldConfig::new(7, 7)
            .with_zombies([c(3, 3)])
            .with_humans([c(0, 3), c(6, 3)])
            .with_seed(42);
        let mut replay = Apocalypse::new(config).unwrap();
        replay.step().unwrap();
        assert_eq!(replay.humans().collect::<Vec<_>>(), first);
        assert_eq!(world.seed(), 42);
    }

    // ── Roster ──────────────────────────────────────────────────

    #[test]
    fn roster_is_exact_size_and_clonable() {
        let world = walled();
        let mut roster = world.humans();
        assert_eq!(roster.len(), 1);
        let again = roster.clone();
        assert_eq!(roster.next(), Some(c(1, 1)));
        assert_eq!(roster.next(), None);
        assert_eq!(again.as_slice(), &[c(1, 1)]);
    }

    #[test]
    fn population_selects_by_kind() {
        let world = walled();
        assert!(world.population(EntityKind::Zombie).eq(world.zombies()));
        assert!(world.population(EntityKind::Human).eq(world.humans()));
    }

    // ── Fields and moves ────────────────────────────────────────

    #[test]
    fn zombie_field_in_walled_world() {
        let world = walled();
        let field = world.compute_distance_field(EntityKind::Zombie).unwrap();
        assert_eq!(field.get(c(0, 2)), Some(0));
        assert_eq!(field.reached_count(), 1);
    }

    #[test]
    fn move_humans_rejects_foreign_field() {
        let mut world = walled();
        let other = Apocalypse::new(WorldConfig::new(4, 4).with_zombies([c(0, 0)])).unwrap();
        let field = other.compute_distance_field(EntityKind::Zombie).unwrap();
        assert!(matches!(
            world.move_humans(&field),
            Err(PolicyError::ShapeMismatch { .. })
        ));
        assert_eq!(world.humans().collect::<Vec<_>>(), vec![c(1, 1)]);
    }

    #[test]
    fn move_zombies_steps_towards_human() {
        let mut world = Apocalypse::new(
            WorldConfig::new(1, 5)
                .with_zombies([c(0, 0)])
                .with_humans([c(0, 4)]),
        )
        .unwrap();
        let field = world.compute_distance_field(EntityKind::Human).unwrap();
        world.move_zombies(&field).unwrap();
        assert_eq!(world.zombies().collect::<Vec<_>>(), vec![c(0, 1)]);
        assert_eq!(world.humans().collect::<Vec<_>>(), vec![c(0, 4)]);
    }

    // ── Step ────────────────────────────────────────────────────

    #[test]
    fn step_advances_tick_and_records_metrics() {
        let mut world = Apocalypse::new(
            WorldConfig::new(1, 6)
                .with_zombies([c(0, 0)])
                .with_humans([c(0, 2)]),
        )
        .unwrap();
        let metrics = world.step().unwrap().clone();
        assert_eq!(metrics.zombies_moved, 1);
        assert_eq!(metrics.humans_moved, 1);
        assert_eq!(world.current_tick(), TickId(1));
        assert_eq!(world.last_metrics(), &metrics);
        assert_eq!(world.zombies().collect::<Vec<_>>(), vec![c(0, 1)]);
        assert_eq!(world.humans().collect::<Vec<_>>(), vec![c(0, 3)]);
    }

    #[test]
    fn walled_world_is_frozen() {
        let mut world = walled();
        for _ in 0..5 {
            let m = world.step().unwrap();
            assert_eq!(m.humans_moved + m.zombies_moved, 0);
        }
        assert_eq!(world.zombies().collect::<Vec<_>>(), vec![c(0, 2)]);
        assert_eq!(world.humans().collect::<Vec<_>>(), vec![c(1, 1)]);
    }

    #[test]
    fn failed_step_commits_nothing() {
        let mut world = walled();
        world.humans.push(c(9, 9));
        let err = world.step().unwrap_err();
        assert!(matches!(
            err,
            StepError::Field(SpaceError::CellOutOfBounds { .. })
        ));
        assert_eq!(world.current_tick(), TickId(0));
        assert_eq!(world.last_metrics(), &StepMetrics::default());
        assert_eq!(world.humans().collect::<Vec<_>>(), vec![c(1, 1), c(9, 9)]);
        assert_eq!(world.zombies().collect::<Vec<_>>(), vec![c(0, 2)]);
    }

    #[test]
    fn move_humans_rejects_agent_outside_grid() {
        let mut world = walled();
        world.humans.push(c(0, 3));
        let field = world.compute_distance_field(EntityKind::Zombie).unwrap();
        assert_eq!(
            world.move_humans(&field),
            Err(PolicyError::AgentOutOfBounds {
                index: 1,
                cell: c(0, 3)
            })
        );
    }

    #[test]
    fn empty_world_steps() {
        let mut world = Apocalypse::new(WorldConfig::new(3, 3)).unwrap();
        let m = world.step().unwrap();
        assert_eq!(m.humans_moved + m.zombies_moved, 0);
        assert_eq!(world.current_tick(), TickId(1));
    }

    // ── Display ─────────────────────────────────────────────────

    #[test]
    fn display_renders_all_glyphs() {
        let config = WorldConfig::from_map("Z#.\n.X.\n..H", 0).unwrap();
        let world = Apocalypse::new(config).unwrap();
        assert_eq!(world.to_string(), "Z#.\n.X.\n..H\n");
    }

    #[test]
    fn display_walled_world() {
        assert_eq!(walled().to_string(), ".#Z\n.H#\n.#.\n");
    }
}
