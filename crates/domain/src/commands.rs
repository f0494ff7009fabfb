//! Bot commands - Strongly typed representations of user input
//!
//! Top-level commands arrive either as slash commands or as the labels of the
//! main keyboard buttons. Follow-up answers are the labels of the menu shown
//! with the previous reply.

use serde::{Deserialize, Serialize};

use crate::entities::{Trip, TripField};
use crate::value_objects::DataFormat;

/// A top-level command recognised in the default conversation state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BotCommand {
    /// Reset the session and greet the user
    Start,
    /// Show the command list
    Help,
    /// Close the current file and ask for a new upload
    OpenFile,
    /// Begin the filter dialogue
    Filter,
    /// Begin the sort dialogue
    Sort,
    /// Begin the export dialogue
    Export,
    /// Show a preview of the loaded trips
    View,
    /// Input that matches no command
    Unknown {
        /// The original input
        original_input: String,
    },
}

impl BotCommand {
    /// Recognise a command from raw message text
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "/start" => Self::Start,
            "/help" => Self::Help,
            "/openfile" | "Open another" | "Open file" => Self::OpenFile,
            "/filter" | "Filter" => Self::Filter,
            "/sort" | "Sort" => Self::Sort,
            "/export" | "Export" => Self::Export,
            "/view" | "View" => Self::View,
            _ => Self::Unknown {
                original_input: input.to_string(),
            },
        }
    }

    /// Whether the command needs a loaded collection to run
    pub const fn requires_collection(&self) -> bool {
        matches!(self, Self::Filter | Self::Sort | Self::Export | Self::View)
    }
}

/// Field choices offered by the filter menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterField {
    StationStart,
    StationEnd,
    Both,
}

impl FilterField {
    /// Menu label of the choice
    pub const fn label(&self) -> &'static str {
        match self {
            Self::StationStart => "StationStart",
            Self::StationEnd => "StationEnd",
            Self::Both => "StationStart & StationEnd",
        }
    }

    /// Recognise a menu answer
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "StationStart" => Some(Self::StationStart),
            "StationEnd" => Some(Self::StationEnd),
            "StationStart & StationEnd" => Some(Self::Both),
            _ => None,
        }
    }
}

/// A fully specified filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripFilter {
    /// Departure station equals the value
    StationStart(String),
    /// Arrival station equals the value
    StationEnd(String),
    /// Both stations equal their values
    Both { start: String, end: String },
}

impl TripFilter {
    /// Build a filter for a single-field menu choice and its value
    pub fn single(field: FilterField, value: &str) -> Option<Self> {
        match field {
            FilterField::StationStart => Some(Self::StationStart(value.to_string())),
            FilterField::StationEnd => Some(Self::StationEnd(value.to_string())),
            FilterField::Both => Self::both_from_input(value),
        }
    }

    /// Parse `start&end`; exactly one `&` is required
    pub fn both_from_input(value: &str) -> Option<Self> {
        let mut parts = value.split('&');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(start), Some(end), None) => Some(Self::Both {
                start: start.to_string(),
                end: end.to_string(),
            }),
            _ => None,
        }
    }

    /// Whether a trip passes the filter
    pub fn matches(&self, trip: &Trip) -> bool {
        match self {
            Self::StationStart(start) => trip.station_start() == start,
            Self::StationEnd(end) => trip.station_end() == end,
            Self::Both { start, end } => {
                trip.station_start() == start && trip.station_end() == end
            },
        }
    }
}

/// Field choices offered by the sort menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    TimeStart,
    TimeEnd,
}

impl SortField {
    /// Menu label of the choice
    pub const fn label(&self) -> &'static str {
        match self {
            Self::TimeStart => "TimeStart (increasing)",
            Self::TimeEnd => "TimeEnd(increasing)",
        }
    }

    /// Recognise a menu answer
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "TimeStart (increasing)" => Some(Self::TimeStart),
            "TimeEnd(increasing)" => Some(Self::TimeEnd),
            _ => None,
        }
    }

    /// The trip field this choice orders by
    pub const fn field(&self) -> TripField {
        match self {
            Self::TimeStart => TripField::TimeStart,
            Self::TimeEnd => TripField::TimeEnd,
        }
    }

    /// Ascending comparison of two trips on this field
    pub fn compare(&self, a: &Trip, b: &Trip) -> std::cmp::Ordering {
        match self {
            Self::TimeStart => a.time_start().cmp(&b.time_start()),
            Self::TimeEnd => a.time_end().cmp(&b.time_end()),
        }
    }
}

/// Recognise an answer of the export menu
pub fn parse_export_format(input: &str) -> Option<DataFormat> {
    match input.trim() {
        "JSON" => Some(DataFormat::Json),
        "CSV" => Some(DataFormat::Csv),
        _ => None,
    }
}

/// Menu label of an export format
pub const fn export_format_label(format: DataFormat) -> &'static str {
    match format {
        DataFormat::Json => "JSON",
        DataFormat::Csv => "CSV",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_commands_and_buttons_are_recognised() {
        assert_eq!(BotCommand::parse("/start"), BotCommand::Start);
        assert_eq!(BotCommand::parse("/help"), BotCommand::Help);
        assert_eq!(BotCommand::parse("Open another"), BotCommand::OpenFile);
        assert_eq!(BotCommand::parse("Open file"), BotCommand::OpenFile);
        assert_eq!(BotCommand::parse("/openfile"), BotCommand::OpenFile);
        assert_eq!(BotCommand::parse("Filter"), BotCommand::Filter);
        assert_eq!(BotCommand::parse("/sort"), BotCommand::Sort);
        assert_eq!(BotCommand::parse("Export"), BotCommand::Export);
        assert_eq!(BotCommand::parse("View"), BotCommand::View);
    }

    #[test]
    fn unknown_input_keeps_original_text() {
        assert_eq!(
            BotCommand::parse("hello there"),
            BotCommand::Unknown {
                original_input: "hello there".to_string()
            }
        );
    }

    #[test]
    fn commands_needing_a_collection() {
        assert!(BotCommand::Filter.requires_collection());
        assert!(BotCommand::View.requires_collection());
        assert!(!BotCommand::Start.requires_collection());
        assert!(!BotCommand::OpenFile.requires_collection());
    }

    #[test]
    fn menu_labels_parse_back() {
        for field in [FilterField::StationStart, FilterField::StationEnd, FilterField::Both] {
            assert_eq!(FilterField::parse(field.label()), Some(field));
        }
        for field in [SortField::TimeStart, SortField::TimeEnd] {
            assert_eq!(SortField::parse(field.label()), Some(field));
        }
        for format in DataFormat::ALL {
            assert_eq!(parse_export_format(export_format_label(format)), Some(format));
        }
        assert_eq!(FilterField::parse("Line"), None);
        assert_eq!(SortField::parse("TimeStart"), None);
        assert_eq!(parse_export_format("xml"), None);
    }

    #[test]
    fn filter_matches_by_station() {
        let trip = Trip::new("1", "A", "L", "08:00", "B", "08:30", "g").unwrap();
        assert!(TripFilter::StationStart("A".into()).matches(&trip));
        assert!(!TripFilter::StationStart("B".into()).matches(&trip));
        assert!(TripFilter::StationEnd("B".into()).matches(&trip));
        assert!(
            TripFilter::Both {
                start: "A".into(),
                end: "B".into()
            }
            .matches(&trip)
        );
        assert!(
            !TripFilter::Both {
                start: "A".into(),
                end: "C".into()
            }
            .matches(&trip)
        );
    }

    #[test]
    fn both_filter_requires_exactly_one_ampersand() {
        assert_eq!(
            TripFilter::both_from_input("StationA&StationB"),
            Some(TripFilter::Both {
                start: "StationA".into(),
                end: "StationB".into()
            })
        );
        assert_eq!(TripFilter::both_from_input("StationA"), None);
        assert_eq!(TripFilter::both_from_input("A&B&C"), None);
    }

    #[test]
    fn single_choice_builds_filter() {
        assert_eq!(
            TripFilter::single(FilterField::StationEnd, "B"),
            Some(TripFilter::StationEnd("B".into()))
        );
        assert!(TripFilter::single(FilterField::Both, "B").is_none());
    }

    #[test]
    fn sort_field_compares_times() {
        let early = Trip::new("1", "A", "L", "06:00", "B", "09:00", "g").unwrap();
        let late = Trip::new("2", "A", "L", "07:00", "B", "08:00", "g").unwrap();
        assert!(SortField::TimeStart.compare(&early, &late).is_lt());
        assert!(SortField::TimeEnd.compare(&early, &late).is_gt());
        assert_eq!(SortField::TimeEnd.field(), TripField::TimeEnd);
    }
}
