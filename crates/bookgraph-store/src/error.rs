//! Error types for storage operations

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Referenced user is not registered
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Referenced book is not registered
    #[error("Book not found: {0}")]
    BookNotFound(String),

    /// Dataset file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset TOML could not be parsed
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Dataset JSON could not be parsed
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dataset file extension is not recognised
    #[error("Unsupported dataset format: {0}")]
    UnsupportedFormat(String),
}

impl StoreError {
    /// Whether this error reports an unknown user or book
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::UserNotFound(_) | StoreError::BookNotFound(_))
    }
}
