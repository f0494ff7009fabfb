//! In-memory fakes shared by the application unit tests

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use domain::{DataFormat, Trip, TripCollection, UserId};
use parking_lot::Mutex;

use crate::error::ApplicationError;
use crate::ports::{TripCodecPort, TripCodecs, TripFileStore};

/// File store keeping file contents in a map
#[derive(Debug, Default)]
pub struct InMemoryFileStore {
    files: Mutex<HashMap<PathBuf, Vec<u8>>>,
}

impl InMemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: &Path, bytes: Vec<u8>) {
        self.files.lock().insert(path.to_path_buf(), bytes);
    }

    pub fn get(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.lock().get(path).cloned()
    }

    pub fn len(&self) -> usize {
        self.files.lock().len()
    }
}

#[async_trait]
impl TripFileStore for InMemoryFileStore {
    fn path_for(&self, user: &UserId, format: DataFormat) -> PathBuf {
        PathBuf::from(format!("/data/{user}.{}", format.extension()))
    }

    async fn read(&self, path: &Path) -> Result<Option<Vec<u8>>, ApplicationError> {
        Ok(self.get(path))
    }

    async fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), ApplicationError> {
        self.insert(path, bytes.to_vec());
        Ok(())
    }

    async fn remove(&self, path: &Path) -> Result<bool, ApplicationError> {
        Ok(self.files.lock().remove(path).is_some())
    }
}

/// Header-less codec: one CSV data row per line
#[derive(Debug)]
pub struct RowCodec(pub DataFormat);

impl TripCodecPort for RowCodec {
    fn format(&self) -> DataFormat {
        self.0
    }

    fn decode(&self, bytes: &[u8]) -> Result<TripCollection, ApplicationError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| ApplicationError::format_violation(e.to_string()))?;
        text.lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                Trip::from_csv_row(line)
                    .map_err(|e| ApplicationError::format_violation(e.to_string()))
            })
            .collect()
    }

    fn encode(&self, trips: &TripCollection) -> Result<Vec<u8>, ApplicationError> {
        Ok(trips.csv_rows().join("\n").into_bytes())
    }
}

/// Codecs for both formats backed by [`RowCodec`]
pub fn codecs() -> TripCodecs {
    TripCodecs::new()
        .with(Arc::new(RowCodec(DataFormat::Csv)))
        .with(Arc::new(RowCodec(DataFormat::Json)))
}

/// `count` rows departing from `StationA` to `StationB` at increasing times
pub fn sample_rows(count: usize) -> Vec<u8> {
    (0..count)
        .map(|i| {
            format!(
                "\"{i}\";\"StationA\";\"LineX\";\"{:02}:00\";\"StationB\";\"{:02}:45\";\"g{i}\";",
                8 + i,
                8 + i
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
        .into_bytes()
}
