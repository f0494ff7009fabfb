//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Time of day is not a valid `HH:MM` value
    #[error("Invalid time '{value}': {reason}")]
    InvalidTime { value: String, reason: String },

    /// Trip identifier is not a non-negative integer
    #[error("Id must be a non-negative integer, got '{0}'")]
    InvalidTripId(String),

    /// User identifier cannot be used as a session key
    #[error("Invalid user id: {0}")]
    InvalidUserId(String),

    /// File extension does not name a known data format
    #[error("Unsupported format: {0}")]
    UnknownFormat(String),

    /// A CSV row does not split into the expected number of fields
    #[error("Expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create an invalid time error
    pub fn invalid_time(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTime {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
