//! JSON codec: an array of objects keyed by the CSV column names

use application::{ApplicationError, TripCodecPort};
use domain::{DataFormat, TripCollection};
use tracing::{debug, instrument};

use super::decode_text;

/// Codec for `.json` trip files
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTripCodec;

impl TripCodecPort for JsonTripCodec {
    fn format(&self) -> DataFormat {
        DataFormat::Json
    }

    #[instrument(skip_all, fields(size = bytes.len()))]
    fn decode(&self, bytes: &[u8]) -> Result<TripCollection, ApplicationError> {
        let text = decode_text(bytes)?;
        if text.trim().is_empty() {
            return Ok(TripCollection::new());
        }

        // `null` is accepted as an absent array
        let trips: Option<TripCollection> = serde_json::from_str(text)
            .map_err(|e| ApplicationError::format_violation(e.to_string()))?;
        let trips = trips.unwrap_or_default();

        debug!(trips = trips.len(), "Decoded JSON");
        Ok(trips)
    }

    fn encode(&self, trips: &TripCollection) -> Result<Vec<u8>, ApplicationError> {
        serde_json::to_vec_pretty(trips)
            .map_err(|e| ApplicationError::Internal(format!("JSON serialization failed: {e}")))
    }
}
