use lift_core::Tick;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgendaError {
    #[error("agenda is empty at {now}")]
    Empty { now: Tick },

    #[error("cannot schedule at {at}: clock is already at {now}")]
    ScheduledInPast { at: Tick, now: Tick },
}

pub type AgendaResult<T> = Result<T, AgendaError>;
