//! Error types for the skew-boxcox library.

use thiserror::Error;

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur while loading, ranking or transforming data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// No column is strictly positive, so nothing can be Box-Cox transformed.
    #[error("no positive features available for Box-Cox transformation")]
    NoPositiveFeature,

    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// The requested column does not exist in the table.
    #[error("unknown feature: {0}")]
    UnknownFeature(String),

    /// The column holds values that are zero, negative or missing.
    #[error("feature '{feature}' has {count} non-positive value(s); Box-Cox requires x > 0")]
    NonPositiveValues { feature: String, count: usize },

    /// Two columns share the same name.
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),

    /// A column length does not match the table's row count.
    #[error("dimension mismatch in column '{column}': expected {expected}, got {got}")]
    DimensionMismatch {
        column: String,
        expected: usize,
        got: usize,
    },

    /// A cell could not be parsed as a number.
    #[error("cannot parse '{value}' in column '{column}' at row {row} as a number")]
    Parse {
        row: usize,
        column: String,
        value: String,
    },

    /// Malformed CSV input.
    #[error("csv error: {0}")]
    Csv(String),

    /// Filesystem error.
    #[error("io error: {0}")]
    Io(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Computation error (e.g., numerical issues).
    #[error("computation error: {0}")]
    ComputationError(String),
}

impl From<csv::Error> for AnalysisError {
    fn from(err: csv::Error) -> Self {
        AnalysisError::Csv(err.to_string())
    }
}

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        AnalysisError::Io(err.to_string())
    }
}
