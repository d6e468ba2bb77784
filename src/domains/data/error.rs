//! Data-provider error types.

use thiserror::Error;

/// Errors that can occur while reading from the data store.
#[derive(Debug, Error)]
pub enum DataError {
    /// No user exists with the given id.
    #[error("User {0} not found")]
    UserNotFound(String),

    /// The metric kind string is not one of the known kinds.
    #[error("Unknown metric type: {0}")]
    UnknownMetricKind(String),
}

impl DataError {
    /// Create a new "user not found" error.
    pub fn user_not_found(id: impl Into<String>) -> Self {
        Self::UserNotFound(id.into())
    }
}
