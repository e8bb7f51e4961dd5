//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where configuration or arrival data can fail.

use thiserror::Error;

/// The top-level error type for `lift-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid arrival: {0}")]
    InvalidArrival(String),
}

/// Shorthand result type for `lift-core`.
pub type CoreResult<T> = Result<T, CoreError>;
