//! User identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Maximum length of a user identifier
pub const MAX_USER_ID_LEN: usize = 64;

/// Identifier of a chat user, as delivered by the transport
///
/// Only ASCII alphanumerics, `_` and `-` are accepted so the identifier can be
/// used verbatim as a file stem inside the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Create a user ID, validating its character set and length
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::InvalidUserId(
                "user id must not be empty".to_string(),
            ));
        }

        if value.len() > MAX_USER_ID_LEN {
            return Err(DomainError::InvalidUserId(format!(
                "user id must be at most {MAX_USER_ID_LEN} characters"
            )));
        }

        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(DomainError::InvalidUserId(format!(
                "'{value}' contains characters other than letters, digits, '_' or '-'"
            )));
        }

        Ok(Self(value))
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UserId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for UserId {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}
