//! Centralized error types for projboard.

use thiserror::Error;

/// Main error type for board operations.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

impl BoardError {
    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error is a rejected form submission.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
