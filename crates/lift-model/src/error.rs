use lift_core::{CoreError, RiderId};
use thiserror::Error;

use crate::Location;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("{0} not found")]
    UnknownRider(RiderId),

    #[error("{rider} is {found:?}, expected {expected:?}")]
    UnexpectedLocation {
        rider:    RiderId,
        expected: Location,
        found:    Location,
    },

    #[error("membership invariant violated: {0}")]
    Membership(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
