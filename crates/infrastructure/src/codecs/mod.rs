//! Trip file codecs
//!
//! One codec per [`DataFormat`], registered together by [`trip_codecs`].

mod csv_trip_codec;
mod json_trip_codec;

use std::sync::Arc;

use application::{ApplicationError, TripCodecs};

pub use csv_trip_codec::{CSV_FIELD_HEADER, CSV_LABEL_HEADER, CsvTripCodec};
pub use json_trip_codec::JsonTripCodec;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Registry holding the CSV and JSON codecs
pub fn trip_codecs() -> TripCodecs {
    TripCodecs::new()
        .with(Arc::new(CsvTripCodec))
        .with(Arc::new(JsonTripCodec))
}

/// Decode file bytes as UTF-8, dropping a leading byte order mark
fn decode_text(bytes: &[u8]) -> Result<&str, ApplicationError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ApplicationError::format_violation(format!("file is not valid UTF-8: {e}")))?;
    Ok(text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text))
}
