//! Agent populations and neighbourhood connectivity.

use std::fmt;

/// The four cardinal offsets: N, S, W, E.
const OFFSETS_4: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// One of the two mobile agent populations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Evaders. Flee from zombies, may step diagonally.
    Human,
    /// Pursuers. Advance on humans, cardinal steps only.
    Zombie,
}

impl EntityKind {
    /// Neighbourhood used when this population picks its next step.
    pub fn move_connectivity(self) -> Connectivity {
        match self {
            Self::Human => Connectivity::Eight,
            Self::Zombie => Connectivity::Four,
        }
    }

    /// Single-character glyph used by text renderings.
    pub fn glyph(self) -> char {
        match self {
            Self::Human => 'H',
            Self::Zombie => 'Z',
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Zombie => write!(f, "zombie"),
        }
    }
}

/// Which adjacent cells count as neighbours.
///
/// Distance fields are always built with [`Connectivity::Four`]; the
/// eight-way neighbourhood is only used to enumerate candidate moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// Orthogonal neighbours only (up, down, left, right).
    Four,
    /// Orthogonal plus diagonal neighbours.
    Eight,
}

impl Connectivity {
    /// `(d_row, d_col)` offsets in enumeration order.
    ///
    /// The order is fixed: up, down, left, right, then (for `Eight`)
    /// up-left, up-right, down-left, down-right.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Self::Four => &OFFSETS_4,
            Self::Eight => &OFFSETS_8,
        }
    }
}
