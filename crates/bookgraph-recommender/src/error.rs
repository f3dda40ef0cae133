//! Error types for recommendation queries

use thiserror::Error;

/// Errors that can occur during recommendation queries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    /// Target user is not registered
    #[error("User not found: {0}")]
    UserNotFound(String),
}
