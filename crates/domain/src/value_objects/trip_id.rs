//! Trip identifier value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Local identifier of a trip within a schedule file
///
/// A non-negative integer, rendered in canonical decimal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TripId(u64);

impl TripId {
    /// Parse a trip ID from its decimal form
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidTripId(value.to_string()));
        }

        value
            .parse()
            .map(Self)
            .map_err(|_| DomainError::InvalidTripId(value.to_string()))
    }

    /// Get the numeric value
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TripId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TripId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TripId> for String {
    fn from(id: TripId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_id_is_parsed() {
        let id = TripId::parse("42").unwrap();
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn zero_is_valid() {
        assert_eq!(TripId::parse("0").unwrap().value(), 0);
    }

    #[test]
    fn negative_and_signed_ids_are_rejected() {
        assert!(TripId::parse("-1").is_err());
        assert!(TripId::parse("+1").is_err());
    }

    #[test]
    fn non_numeric_ids_are_rejected() {
        assert!(TripId::parse("").is_err());
        assert!(TripId::parse("12a").is_err());
        assert!(TripId::parse(" 1").is_err());
    }

    #[test]
    fn overflowing_id_is_rejected() {
        assert!(TripId::parse("99999999999999999999999").is_err());
    }
}
