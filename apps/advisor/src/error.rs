//! Advisor error types.

use thiserror::Error;

use mesa_core::{CoreError, ValidationError};

/// Everything that can stop a command.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Record {index} in {path}: {source}")]
    Record {
        path: String,
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("Failed to write output: {0}")]
    Output(#[source] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Stdout(#[source] std::io::Error),
}

pub type AdvisorResult<T> = Result<T, AdvisorError>;
