//! Error types for ix-io.

use thiserror::Error;

use ix_network::NetworkError;

/// Failures that abort reading or writing a whole table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{table}: missing required column {column:?}")]
    MissingColumn { table: String, column: &'static str },

    #[error("{table}: geometry column {column:?} must come first")]
    GeometryNotFirst { table: String, column: &'static str },
}

/// Alias for `Result<T, TableError>`.
pub type TableResult<T> = Result<T, TableError>;

/// Why a single input row was skipped.
#[derive(Debug, Error)]
pub enum RowError {
    #[error("malformed record: {0}")]
    Record(#[from] csv::Error),

    #[error("invalid layer {0:?}")]
    Layer(String),

    #[error("unrecognised traffic direction {0:?}")]
    Direction(String),

    #[error("invalid geometry: {0}")]
    Geometry(String),

    #[error(transparent)]
    Network(#[from] NetworkError),
}
