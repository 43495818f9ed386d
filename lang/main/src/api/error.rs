//! Error types for language operations

use thiserror::Error;

/// Result type for language operations
pub type LangResult<T> = Result<T, LangError>;

/// Errors that can occur while loading or running a pipeline
#[derive(Error, Debug)]
pub enum LangError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Package file missing: {0}")]
    MissingFile(String),

    #[error("Unknown pipeline component: {0}")]
    UnknownComponent(String),

    #[error("Text of {length} characters exceeds max_length {max_length}")]
    TextTooLong { length: usize, max_length: usize },
}
