//! Error types for weekcal.

use thiserror::Error;

/// Errors that can occur in weekcal operations.
#[derive(Error, Debug)]
pub enum WeekcalError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for weekcal operations.
pub type WeekcalResult<T> = Result<T, WeekcalError>;
