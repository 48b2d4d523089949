//! Error types for checklist-core

use thiserror::Error;

/// Result type alias using checklist-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in checklist-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Note not found
    #[error("Note not found: {0}")]
    NotFound(String),

    /// Date could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
