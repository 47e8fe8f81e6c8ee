//! Error types for ALM analytics.
//!
//! This module defines the error taxonomy shared by every ALM crate.

use thiserror::Error;

/// Result type for ALM operations.
pub type AlmResult<T> = Result<T, AlmError>;

/// Errors that can occur during ALM analytics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlmError {
    /// Structurally invalid input (zero denominators, negative maturities,
    /// malformed curves, unmatched sensitivity keys under the strict policy).
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// The reason the input is invalid.
        reason: String,
    },

    /// A scenario set was supplied without the baseline scenario.
    #[error("Missing baseline scenario '{name}'")]
    MissingBaseline {
        /// The expected baseline scenario name.
        name: String,
    },

    /// Tabular input is missing a required column or cell.
    #[error("Schema error in column '{column}': {reason}")]
    Schema {
        /// The offending column.
        column: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AlmError {
    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create a missing baseline error.
    #[must_use]
    pub fn missing_baseline(name: impl Into<String>) -> Self {
        Self::MissingBaseline { name: name.into() }
    }

    /// Create a schema error.
    #[must_use]
    pub fn schema(column: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Schema {
            column: column.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing required column error.
    #[must_use]
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::schema(column, "required column is missing")
    }

    /// Returns true if the error belongs to the ingestion boundary.
    #[must_use]
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema { .. })
    }
}
