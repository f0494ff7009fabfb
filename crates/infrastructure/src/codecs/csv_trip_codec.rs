//! CSV codec for the semicolon/quote trip dialect
//!
//! A file starts with two fixed header lines, the internal column names and
//! their Cyrillic labels, followed by one quoted row per trip:
//!
//! ```text
//! "1";"StationA";"LineX";"08:00";"StationB";"08:45";"g1";
//! ```

use application::{ApplicationError, TripCodecPort};
use domain::{DataFormat, Trip, TripCollection};
use tracing::{debug, instrument};

use super::decode_text;

/// First header line: internal column names
pub const CSV_FIELD_HEADER: &str =
    r#""Id";"StationStart";"Line";"TimeStart";"StationEnd";"TimeEnd";"global_id";"#;

/// Second header line: human-readable column labels
pub const CSV_LABEL_HEADER: &str = r#""Локальный идентификатор";"Станция отправления";"Направление Аэроэкспресс";"Время отправления со станции";"Конечная станция направления Аэроэкспресс";"Время прибытия на конечную станцию направления Аэроэкспресс";"global_id";"#;

/// Lines before the first trip row
const HEADER_LINES: usize = 2;

/// Codec for `.csv` trip files
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvTripCodec;

impl TripCodecPort for CsvTripCodec {
    fn format(&self) -> DataFormat {
        DataFormat::Csv
    }

    #[instrument(skip_all, fields(size = bytes.len()))]
    fn decode(&self, bytes: &[u8]) -> Result<TripCollection, ApplicationError> {
        let text = decode_text(bytes)?;
        if text.is_empty() {
            return Ok(TripCollection::new());
        }

        let mut lines = text.lines();
        expect_header(lines.next(), CSV_FIELD_HEADER, 1)?;
        expect_header(lines.next(), CSV_LABEL_HEADER, 2)?;

        let trips = lines
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                Trip::from_csv_row(line).map_err(|e| {
                    ApplicationError::format_violation(format!(
                        "line {}: {e}",
                        index + HEADER_LINES + 1
                    ))
                })
            })
            .collect::<Result<TripCollection, _>>()?;

        debug!(trips = trips.len(), "Decoded CSV");
        Ok(trips)
    }

    fn encode(&self, trips: &TripCollection) -> Result<Vec<u8>, ApplicationError> {
        let mut out = String::new();
        for line in [CSV_FIELD_HEADER, CSV_LABEL_HEADER] {
            out.push_str(line);
            out.push('\n');
        }
        for row in trips.csv_rows() {
            out.push_str(&row);
            out.push('\n');
        }
        Ok(out.into_bytes())
    }
}

fn expect_header(line: Option<&str>, expected: &str, number: usize) -> Result<(), ApplicationError> {
    match line {
        Some(line) if line == expected => Ok(()),
        Some(_) => Err(ApplicationError::format_violation(format!(
            "header line {number} does not match the expected columns"
        ))),
        None => Err(ApplicationError::format_violation(format!(
            "header line {number} is missing"
        ))),
    }
}
