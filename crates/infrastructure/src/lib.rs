//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the CSV and JSON trip
//! codecs and the filesystem trip store. Also owns configuration loading and
//! logging setup.

pub mod codecs;
pub mod config;
pub mod storage;
pub mod telemetry;

use std::sync::Arc;

use application::{ConversationService, SessionStore};

pub use codecs::{CSV_FIELD_HEADER, CSV_LABEL_HEADER, CsvTripCodec, JsonTripCodec, trip_codecs};
pub use config::{AppConfig, StorageConfig};
pub use storage::{FsTripFileStore, map_io_error};
pub use telemetry::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};

/// Conversation service backed by files under `config.data_dir`
pub fn conversation_service(config: &StorageConfig) -> ConversationService {
    let files = Arc::new(FsTripFileStore::new(&config.data_dir));
    let sessions = SessionStore::new(files, trip_codecs());
    ConversationService::new(Arc::new(sessions))
}
