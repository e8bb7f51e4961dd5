//! Failures raised while a trace is being persisted.

use thiserror::Error;

/// A trace backend could not accept a batch, the summary, or its final flush.
///
/// [`TraceObserver`][crate::TraceObserver] keeps the first of these and hands
/// it back through `take_error`; later failures are discarded.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Opening an output file, or writing the text table to its sink.
    #[error("trace sink I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("trace CSV could not be written: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "sqlite")]
    #[error("trace database rejected a write: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;
