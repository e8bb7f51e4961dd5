use lift_core::{CoreError, Tick};
use lift_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("step failed: {0}")]
    Model(#[from] ModelError),

    /// Nothing left to run before `max_tick`: some step failed to schedule
    /// its successor.
    #[error("agenda ran dry at {at} before the run ended")]
    AgendaExhausted { at: Tick },
}

pub type SimResult<T> = Result<T, SimError>;
