//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// File content is malformed or does not match the expected layout
    #[error("Data doesn't meet the format: {0}")]
    FormatViolation(String),

    /// File extension names no supported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The operation needs a loaded collection but none is open
    #[error("None files are open")]
    NoCollectionOpen,

    /// A multi-value filter argument could not be split
    #[error("Invalid filter input: {0}")]
    InvalidFilterInput(String),

    /// Conversational input matches no command
    #[error("Undefined command: {0}")]
    UnsupportedCommand(String),

    /// Reading, writing, or deleting a persisted file failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Create a format violation error
    pub fn format_violation(message: impl Into<String>) -> Self {
        Self::FormatViolation(message.into())
    }
}
