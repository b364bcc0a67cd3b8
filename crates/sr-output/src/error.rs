//! Error types for sr-output.

use sr_core::CoreError;
use sr_history::HistoryError;
use sr_roadgraph::RoadGraphError;
use thiserror::Error;

/// Errors that can occur when assembling or writing a motion record.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("record is missing field {0}")]
    MissingField(String),

    #[error("record has unexpected field {0}")]
    UnexpectedField(String),

    #[error("field {field}: expected dtype {expected}, got {got}")]
    DType { field: String, expected: &'static str, got: &'static str },

    #[error("field {field}: expected shape {expected:?}, got {got:?}")]
    Shape { field: String, expected: Vec<usize>, got: Vec<usize> },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed record file: {0}")]
    Malformed(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    RoadGraph(#[from] RoadGraphError),

    #[cfg(feature = "parquet")]
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[cfg(feature = "parquet")]
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
