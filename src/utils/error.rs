use std::io;
use thiserror::Error;

/// Common result type for CLI-level plumbing
pub type BoxResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Result type for docpage library operations
pub type Result<T> = std::result::Result<T, DocpageError>;

/// Error types for docpage operations
#[derive(Debug, Error)]
pub enum DocpageError {
    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
    /// Markdown processing error
    #[error("Markdown error: {0}")]
    Markdown(String),
    /// Clipboard write failure
    #[error("Clipboard error: {0}")]
    Clipboard(String),
    /// Generic error message
    #[error("{0}")]
    Generic(String),
}

impl From<String> for DocpageError {
    fn from(msg: String) -> Self {
        DocpageError::Generic(msg)
    }
}

impl From<&str> for DocpageError {
    fn from(msg: &str) -> Self {
        DocpageError::Generic(msg.to_string())
    }
}
