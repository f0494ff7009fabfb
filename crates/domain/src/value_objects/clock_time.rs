//! Time-of-day value object in `HH:MM` form

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated wall-clock time with minute precision
///
/// Parsed from and rendered as exactly five characters `HH:MM`, hours 0-23,
/// minutes 0-59. Ordering is chronological, which for this zero-padded form
/// coincides with ordinal string ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Parse an `HH:MM` string
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let Some((hours, minutes)) = value.split_once(':') else {
            return Err(DomainError::invalid_time(value, "must meet the format HH:MM"));
        };

        if value.len() != 5 || hours.len() != 2 || minutes.len() != 2 {
            return Err(DomainError::invalid_time(value, "must meet the format HH:MM"));
        }

        let hour = parse_two_digits(hours)
            .ok_or_else(|| DomainError::invalid_time(value, "must meet the format HH:MM"))?;
        let minute = parse_two_digits(minutes)
            .ok_or_else(|| DomainError::invalid_time(value, "must meet the format HH:MM"))?;

        Self::from_hm(hour, minute)
            .map_err(|_| DomainError::invalid_time(value, "time is out of range"))
    }

    /// Build a time from hour and minute components
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, DomainError> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self).ok_or_else(|| {
            DomainError::invalid_time(format!("{hour:02}:{minute:02}"), "time is out of range")
        })
    }

    /// Hour component (0-23)
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Minute component (0-59)
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

fn parse_two_digits(part: &str) -> Option<u32> {
    if part.bytes().all(|b| b.is_ascii_digit()) {
        part.parse().ok()
    } else {
        None
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for ClockTime {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_time_is_accepted() {
        let time = ClockTime::parse("08:00").unwrap();
        assert_eq!(time.hour(), 8);
        assert_eq!(time.minute(), 0);
        assert_eq!(time.to_string(), "08:00");
    }

    #[test]
    fn boundaries_are_accepted() {
        assert!(ClockTime::parse("00:00").is_ok());
        assert!(ClockTime::parse("23:59").is_ok());
    }

    #[test]
    fn hour_out_of_range_is_rejected() {
        let err = ClockTime::parse("25:00").unwrap_err();
        assert!(err.to_string().contains("out of range"));
        assert!(ClockTime::parse("24:00").is_err());
    }

    #[test]
    fn minute_out_of_range_is_rejected() {
        assert!(ClockTime::parse("08:60").is_err());
    }

    #[test]
    fn malformed_times_are_rejected() {
        for value in ["8:00", "08:0", "0800", "08-00", "ab:cd", "+8:00", "08:00:00", "", " 8:00"] {
            assert!(ClockTime::parse(value).is_err(), "accepted {value:?}");
        }
    }

    #[test]
    fn ordering_is_chronological() {
        let early = ClockTime::parse("06:45").unwrap();
        let late = ClockTime::parse("18:05").unwrap();
        assert!(early < late);
    }

    #[test]
    fn serde_uses_string_form() {
        let time = ClockTime::parse("07:30").unwrap();
        assert_eq!(serde_json::to_string(&time).unwrap(), r#""07:30""#);
        let back: ClockTime = serde_json::from_str(r#""07:30""#).unwrap();
        assert_eq!(back, time);
        assert!(serde_json::from_str::<ClockTime>(r#""7:30""#).is_err());
    }
}
