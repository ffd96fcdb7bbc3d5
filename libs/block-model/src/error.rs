//! # Model Errors
//!
//! Error types for block model operations.
//!
//! ## Error Policy
//!
//! - Failures are reported to the immediate caller unchanged
//! - No block is skipped or auto-corrected

use thiserror::Error;

/// Errors raised by model-level operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// The model has no blocks, so no minimum or bounds are defined.
    #[error("Block model is empty")]
    EmptyModel,

    /// A block violates a data-model invariant.
    #[error("Invalid block {index}: {message}")]
    InvalidRecord {
        /// Position of the offending block in its input sequence
        index: usize,
        /// What was wrong with it
        message: String,
    },
}

impl ModelError {
    /// Creates an invalid record error.
    pub fn invalid_record(index: usize, message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            index,
            message: message.into(),
        }
    }
}

/// Errors raised while reading tabular block data.
///
/// Every variant carries the 1-based line number of the offending input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IngestError {
    /// The input holds no header line.
    #[error("Input is empty: expected a header line")]
    Empty,

    /// A required column is absent from the header.
    #[error("Line {line}: missing required column '{column}'")]
    MissingColumn { line: usize, column: String },

    /// A row has a different number of fields than the header.
    #[error("Line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A numeric field could not be parsed.
    #[error("Line {line}: column '{column}' is not a number: '{value}'")]
    InvalidNumber {
        line: usize,
        column: String,
        value: String,
    },

    /// A boolean field could not be parsed.
    #[error("Line {line}: column '{column}' is not a flag: '{value}'")]
    InvalidFlag {
        line: usize,
        column: String,
        value: String,
    },

    /// A field parsed but violates a data-model invariant.
    #[error("Line {line}: column '{column}' {message}")]
    InvalidValue {
        line: usize,
        column: String,
        message: String,
    },
}
