//! Errors from advancing a world.

use std::error::Error;
use std::fmt;

use horde_field::PolicyError;
use horde_space::SpaceError;

/// Errors from [`Apocalypse::step()`](crate::Apocalypse::step).
///
/// A failed step commits nothing: positions, tick and metrics keep their
/// values from before the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// A distance field could not be built from the current positions.
    Field(SpaceError),
    /// A movement policy rejected its inputs.
    Policy(PolicyError),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(e) => write!(f, "distance field: {e}"),
            Self::Policy(e) => write!(f, "movement: {e}"),
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(e) => Some(e),
            Self::Policy(e) => Some(e),
        }
    }
}

impl From<SpaceError> for StepError {
    fn from(e: SpaceError) -> Self {
        Self::Field(e)
    }
}

impl From<PolicyError> for StepError {
    fn from(e: PolicyError) -> Self {
        Self::Policy(e)
    }
}
