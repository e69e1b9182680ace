//! Common error types for Songbook

use thiserror::Error;

/// Common result type for Songbook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the Songbook crates
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// List-field encoding or decoding error (wraps serde_json::Error)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Stored record identifier could not be parsed
    #[error("Invalid record id: {0}")]
    InvalidId(#[from] uuid::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Required form field absent from the submission
    #[error("Missing form field: {0}")]
    MissingField(String),

    /// Requested record not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Store write was not acknowledged
    #[error("Persistence error: {0}")]
    Persistence(String),
}
