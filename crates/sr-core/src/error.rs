//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they need to.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("array of shape {shape:?} needs {expected} elements, got {got}")]
    ShapeMismatch { shape: Vec<usize>, expected: usize, got: usize },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `sr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
