use thiserror::Error;

/// Unified error type for stampver operations
#[derive(Error, Debug)]
pub enum StampError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in stampver
pub type Result<T> = std::result::Result<T, StampError>;

impl StampError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        StampError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        StampError::Version(msg.into())
    }
}
