//! Trip codec port
//!
//! Defines the interface for converting a trip collection to and from the
//! bytes of one on-disk format.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use domain::{DataFormat, TripCollection};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for a format-specific reader/writer
#[cfg_attr(test, automock)]
pub trait TripCodecPort: Send + Sync {
    /// The format this codec handles
    fn format(&self) -> DataFormat;

    /// Parse and validate file content
    ///
    /// Any malformed content yields [`ApplicationError::FormatViolation`].
    fn decode(&self, bytes: &[u8]) -> Result<TripCollection, ApplicationError>;

    /// Serialize a collection to file content
    fn encode(&self, trips: &TripCollection) -> Result<Vec<u8>, ApplicationError>;
}

/// Codecs keyed by the format they handle
#[derive(Clone, Default)]
pub struct TripCodecs {
    codecs: HashMap<DataFormat, Arc<dyn TripCodecPort>>,
}

impl fmt::Debug for TripCodecs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formats: Vec<_> = self.codecs.keys().map(DataFormat::extension).collect();
        formats.sort_unstable();
        f.debug_struct("TripCodecs")
            .field("formats", &formats)
            .finish()
    }
}

impl TripCodecs {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a codec, replacing any codec for the same format
    #[must_use]
    pub fn with(mut self, codec: Arc<dyn TripCodecPort>) -> Self {
        self.codecs.insert(codec.format(), codec);
        self
    }

    /// Codec for `format`
    pub fn get(&self, format: DataFormat) -> Result<&dyn TripCodecPort, ApplicationError> {
        self.codecs
            .get(&format)
            .map(Arc::as_ref)
            .ok_or_else(|| ApplicationError::UnsupportedFormat(format!(".{format}")))
    }
}
