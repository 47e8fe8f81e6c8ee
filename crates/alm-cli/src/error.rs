//! CLI error types.

use alm_core::AlmError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input file could not be read as CSV.
    #[error("Failed to read {path}: {source}")]
    Csv {
        /// Path of the input file.
        path: String,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// Input or computation rejected by the engine.
    #[error(transparent)]
    Alm(#[from] AlmError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
