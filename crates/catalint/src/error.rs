//! Error types for the catalint library.

use thiserror::Error;

use crate::validation::ValidationReport;

/// Main error type for catalint operations.
#[derive(Debug, Error)]
pub enum CatalintError {
    /// Input text could not be split into well-formed rows.
    #[error("Parse error at row {row}: {message}")]
    Parse { row: usize, message: String },

    /// Sheet name is not one of the built-in sheets.
    #[error("Unknown sheet '{0}' (expected one of: catalog, authors, publishers, places)")]
    UnknownSheet(String),

    /// A row carries more columns than the sheet schema declares.
    #[error("Row {row} has {found} fields but the sheet declares {expected}")]
    RowShape {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The header row does not list the schema's fields in order.
    #[error("Header mismatch: expected [{}], found [{}]", expected.join(", "), found.join(", "))]
    HeaderMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// At least one record violated its sheet schema.
    #[error(
        "Validation failed: {} violation(s) in {} record(s)",
        .0.violation_count(),
        .0.len()
    )]
    Validation(ValidationReport),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Regex compilation error.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl CatalintError {
    /// The aggregated report, when this is a validation failure.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            CatalintError::Validation(report) => Some(report),
            _ => None,
        }
    }
}

/// Result type alias for catalint operations.
pub type Result<T> = std::result::Result<T, CatalintError>;
