//! Trip entity - one scheduled departure of a line

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{ClockTime, TripId};

/// Number of fields every trip carries
pub const TRIP_FIELD_COUNT: usize = 7;

/// Characters that delimit tokens in a CSV trip row
pub const CSV_SEPARATORS: [char; 2] = [';', '"'];

/// Addressable fields of a trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TripField {
    Id,
    StationStart,
    Line,
    TimeStart,
    StationEnd,
    TimeEnd,
    GlobalId,
}

impl TripField {
    /// Fields in file column order
    pub const ALL: [Self; TRIP_FIELD_COUNT] = [
        Self::Id,
        Self::StationStart,
        Self::Line,
        Self::TimeStart,
        Self::StationEnd,
        Self::TimeEnd,
        Self::GlobalId,
    ];

    /// Column name used by both file formats
    pub const fn column_name(&self) -> &'static str {
        match self {
            Self::Id => "Id",
            Self::StationStart => "StationStart",
            Self::Line => "Line",
            Self::TimeStart => "TimeStart",
            Self::StationEnd => "StationEnd",
            Self::TimeEnd => "TimeEnd",
            Self::GlobalId => "global_id",
        }
    }
}

impl fmt::Display for TripField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// A single scheduled trip
///
/// All fields are validated on construction: times must be `HH:MM`, the id a
/// non-negative integer, and text fields non-empty without CSV delimiters or
/// line breaks. A trip is never mutated in place; [`Trip::with_field`]
/// produces a new, revalidated value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TripRecord", into = "TripRecord")]
pub struct Trip {
    id: TripId,
    station_start: String,
    line: String,
    time_start: ClockTime,
    station_end: String,
    time_end: ClockTime,
    global_id: String,
}

impl Trip {
    /// Create a trip from its raw textual fields
    pub fn new(
        id: &str,
        station_start: &str,
        line: &str,
        time_start: &str,
        station_end: &str,
        time_end: &str,
        global_id: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: TripId::parse(id)?,
            station_start: validate_text(TripField::StationStart, station_start)?,
            line: validate_text(TripField::Line, line)?,
            time_start: ClockTime::parse(time_start)?,
            station_end: validate_text(TripField::StationEnd, station_end)?,
            time_end: ClockTime::parse(time_end)?,
            global_id: validate_text(TripField::GlobalId, global_id)?,
        })
    }

    /// Create a trip from exactly seven fields in column order
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, DomainError> {
        match fields {
            [id, station_start, line, time_start, station_end, time_end, global_id] => Self::new(
                id.as_ref(),
                station_start.as_ref(),
                line.as_ref(),
                time_start.as_ref(),
                station_end.as_ref(),
                time_end.as_ref(),
                global_id.as_ref(),
            ),
            _ => Err(DomainError::FieldCount {
                expected: TRIP_FIELD_COUNT,
                found: fields.len(),
            }),
        }
    }

    /// Parse one CSV data row of the form `"1";"A";"L";"08:00";"B";"08:45";"g";`
    ///
    /// The row is split on `;` and `"` with empty tokens discarded.
    pub fn from_csv_row(row: &str) -> Result<Self, DomainError> {
        Self::from_fields(&split_csv_row(row))
    }

    /// Render the trip as a CSV data row, every field quoted and `;`-terminated
    pub fn to_csv_row(&self) -> String {
        let mut row = String::new();
        for field in TripField::ALL {
            row.push('"');
            row.push_str(&self.field(field));
            row.push_str("\";");
        }
        row
    }

    /// Textual value of a field
    pub fn field(&self, field: TripField) -> String {
        match field {
            TripField::Id => self.id.to_string(),
            TripField::StationStart => self.station_start.clone(),
            TripField::Line => self.line.clone(),
            TripField::TimeStart => self.time_start.to_string(),
            TripField::StationEnd => self.station_end.clone(),
            TripField::TimeEnd => self.time_end.to_string(),
            TripField::GlobalId => self.global_id.clone(),
        }
    }

    /// Return a copy of this trip with one field replaced
    pub fn with_field(&self, field: TripField, value: &str) -> Result<Self, DomainError> {
        let mut next = self.clone();
        match field {
            TripField::Id => next.id = TripId::parse(value)?,
            TripField::StationStart => next.station_start = validate_text(field, value)?,
            TripField::Line => next.line = validate_text(field, value)?,
            TripField::TimeStart => next.time_start = ClockTime::parse(value)?,
            TripField::StationEnd => next.station_end = validate_text(field, value)?,
            TripField::TimeEnd => next.time_end = ClockTime::parse(value)?,
            TripField::GlobalId => next.global_id = validate_text(field, value)?,
        }
        Ok(next)
    }

    pub const fn id(&self) -> TripId {
        self.id
    }

    pub fn station_start(&self) -> &str {
        &self.station_start
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub const fn time_start(&self) -> ClockTime {
        self.time_start
    }

    pub fn station_end(&self) -> &str {
        &self.station_end
    }

    pub const fn time_end(&self) -> ClockTime {
        self.time_end
    }

    pub fn global_id(&self) -> &str {
        &self.global_id
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_csv_row())
    }
}

/// Split a CSV row into its non-empty tokens
pub fn split_csv_row(row: &str) -> Vec<&str> {
    row.split(CSV_SEPARATORS)
        .filter(|token| !token.is_empty())
        .collect()
}

fn validate_text(field: TripField, value: &str) -> Result<String, DomainError> {
    if value.is_empty() {
        return Err(DomainError::ValidationError(format!(
            "{field} must not be empty"
        )));
    }
    if value.contains(|c: char| CSV_SEPARATORS.contains(&c) || c == '\n' || c == '\r') {
        return Err(DomainError::ValidationError(format!(
            "{field} must not contain ';', '\"' or line breaks"
        )));
    }
    Ok(value.to_string())
}

/// Wire representation of a trip: seven string-valued fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TripRecord {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "StationStart")]
    pub station_start: String,
    #[serde(rename = "Line")]
    pub line: String,
    #[serde(rename = "TimeStart")]
    pub time_start: String,
    #[serde(rename = "StationEnd")]
    pub station_end: String,
    #[serde(rename = "TimeEnd")]
    pub time_end: String,
    #[serde(rename = "global_id")]
    pub global_id: String,
}

impl TryFrom<TripRecord> for Trip {
    type Error = DomainError;

    fn try_from(record: TripRecord) -> Result<Self, Self::Error> {
        Self::new(
            &record.id,
            &record.station_start,
            &record.line,
            &record.time_start,
            &record.station_end,
            &record.time_end,
            &record.global_id,
        )
    }
}

impl From<Trip> for TripRecord {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id.to_string(),
            station_start: trip.station_start,
            line: trip.line,
            time_start: trip.time_start.to_string(),
            station_end: trip.station_end,
            time_end: trip.time_end.to_string(),
            global_id: trip.global_id,
        }
    }
}
