//! Shared error type.
//!
//! Sub-crates define their own enums for their own failure modes and wrap
//! `IxError` where configuration problems surface.

use thiserror::Error;

/// Errors raised by core types: invalid configuration or unparsable values.
#[derive(Debug, Error)]
pub enum IxError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for core operations.
pub type IxResult<T> = Result<T, IxError>;
