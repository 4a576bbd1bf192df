//! Greedy gradient-following movement policies.
//!
//! Both policies look at an agent's open neighbours, pick the best distance
//! value among them, and step there only if it strictly improves on the
//! agent's own cell. Ties are broken uniformly at random.
//!
//! | Policy | Agents | Candidates | Seeks |
//! |--------|--------|------------|-------|
//! | [`MovementPolicy::Flee`] | humans | eight-way | largest zombie distance |
//! | [`MovementPolicy::Pursue`] | zombies | four-way | smallest human distance |
//!
//! Every decision reads the field and the input positions only; the output
//! is a brand-new list, so no agent ever sees another agent's move from the
//! same pass.

use crate::distance::DistanceField;
use horde_core::{Cell, Connectivity, EntityKind};
use horde_space::Grid;
use rand::seq::IndexedRandom;
use rand::Rng;
use smallvec::SmallVec;
use std::error::Error;
use std::fmt;
use tracing::debug;

/// Errors from applying a movement policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolicyError {
    /// The distance field was built for a grid of another shape.
    ShapeMismatch {
        /// Grid shape as `(rows, cols)`.
        grid: (u32, u32),
        /// Field shape as `(rows, cols)`.
        field: (u32, u32),
    },
    /// An agent position lies outside the grid.
    AgentOutOfBounds {
        /// Index of the agent in its population list.
        index: usize,
        /// The offending position.
        cell: Cell,
    },
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { grid, field } => write!(
                f,
                "distance field is {}x{} but grid is {}x{}",
                field.0, field.1, grid.0, grid.1
            ),
            Self::AgentOutOfBounds { index, cell } => {
                write!(f, "agent {index} at {cell} is outside the grid")
            }
        }
    }
}

impl Error for PolicyError {}

/// Which way an agent climbs the distance field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MovementPolicy {
    /// Step toward the largest value (away from the field's sources).
    Flee,
    /// Step toward the smallest value (toward the field's sources).
    Pursue,
}

impl MovementPolicy {
    /// The policy a population follows.
    pub fn for_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Human => Self::Flee,
            EntityKind::Zombie => Self::Pursue,
        }
    }

    /// The population that follows this policy.
    pub fn kind(self) -> EntityKind {
        match self {
            Self::Flee => EntityKind::Human,
            Self::Pursue => EntityKind::Zombie,
        }
    }

    /// Neighbourhood searched for candidate moves.
    pub fn connectivity(self) -> Connectivity {
        self.kind().move_connectivity()
    }

    /// Best value among `values` under this policy.
    fn best(self, values: impl Iterator<Item = u32>) -> Option<u32> {
        match self {
            Self::Flee => values.max(),
            Self::Pursue => values.min(),
        }
    }

    /// `true` if moving to `candidate` beats staying on `current`.
    fn improves(self, candidate: u32, current: u32) -> bool {
        match self {
            Self::Flee => candidate > current,
            Self::Pursue => candidate < current,
        }
    }
}

/// Decide one agent's next cell.
///
/// `agent` must lie inside `grid` and `field` must match the grid's shape;
/// [`advance`] checks both before calling this for each agent. An agent
/// with no open neighbour stays where it is, under either policy.
pub fn next_cell<R: Rng + ?Sized>(
    policy: MovementPolicy,
    grid: &Grid,
    field: &DistanceField,
    agent: Cell,
    rng: &mut R,
) -> Cell {
    let candidates: SmallVec<[(Cell, u32); 8]> = grid
        .neighbours(agent, policy.connectivity())
        .into_iter()
        .filter(|&nb| grid.is_open(nb))
        .filter_map(|nb| field.get(nb).map(|d| (nb, d)))
        .collect();

    let Some(best) = policy.best(candidates.iter().map(|&(_, d)| d)) else {
        debug!(?policy, %agent, "no open neighbour, staying put");
        return agent;
    };

    let current = field.get(agent).unwrap_or(field.sentinel());
    if !policy.improves(best, current) {
        return agent;
    }

    let ties: SmallVec<[Cell; 8]> = candidates
        .iter()
        .filter(|&&(_, d)| d == best)
        .map(|&(nb, _)| nb)
        .collect();
    ties.choose(rng).copied().unwrap_or(agent)
}

/// Apply `policy` to every agent and return the new positions.
///
/// The output has the same length and order as `agents`: entry `i` is where
/// agent `i` ends up. `agents` itself is left untouched.
///
/// # Errors
///
/// Returns [`PolicyError::ShapeMismatch`] if `field` was built for a grid
/// of another shape, or [`PolicyError::AgentOutOfBounds`] for the first
/// agent outside `grid`. Nothing is computed in either case.
pub fn advance<R: Rng + ?Sized>(
    policy: MovementPolicy,
    grid: &Grid,
    field: &DistanceField,
    agents: &[Cell],
    rng: &mut R,
) -> Result<Vec<Cell>, PolicyError> {
    if !field.matches(grid) {
        return Err(PolicyError::ShapeMismatch {
            grid: (grid.rows(), grid.cols()),
            field: (field.rows(), field.cols()),
        });
    }
    if let Some((index, &cell)) = agents.iter().enumerate().find(|(_, c)| !grid.contains(**c)) {
        return Err(PolicyError::AgentOutOfBounds { index, cell });
    }

    Ok(agents
        .iter()
        .map(|&agent| next_cell(policy, grid, field, agent, rng))
        .collect())
}

/// Humans fleeing along a zombie-seeded field.
pub fn flee<R: Rng + ?Sized>(
    grid: &Grid,
    zombie_field: &DistanceField,
    humans: &[Cell],
    rng: &mut R,
) -> Result<Vec<Cell>, PolicyError> {
    advance(MovementPolicy::Flee, grid, zombie_field, humans, rng)
}

/// Zombies pursuing along a human-seeded field.
pub fn pursue<R: Rng + ?Sized>(
    grid: &Grid,
    human_field: &DistanceField,
    zombies: &[Cell],
    rng: &mut R,
) -> Result<Vec<Cell>, PolicyError> {
    advance(MovementPolicy::Pursue, grid, human_field, zombies, rng)
}
