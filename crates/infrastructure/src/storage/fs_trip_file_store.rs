//! Filesystem-backed trip file store
//!
//! Files live directly under the data directory as `<userId>.<ext>`. The
//! directory itself is created by the binary at startup, never here.

use std::io;
use std::path::{Path, PathBuf};

use application::{ApplicationError, TripFileStore};
use async_trait::async_trait;
use domain::{DataFormat, UserId};
use tracing::{debug, instrument};

use super::map_io_error;

/// Trip file store rooted at a data directory
#[derive(Debug, Clone)]
pub struct FsTripFileStore {
    data_dir: PathBuf,
}

impl FsTripFileStore {
    /// Create a store rooted at `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

#[async_trait]
impl TripFileStore for FsTripFileStore {
    fn path_for(&self, user: &UserId, format: DataFormat) -> PathBuf {
        self.data_dir
            .join(format!("{}.{}", user.as_str(), format.extension()))
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    async fn read(&self, path: &Path) -> Result<Option<Vec<u8>>, ApplicationError> {
        match tokio::fs::read(path).await {
            Ok(bytes) => {
                debug!(size = bytes.len(), "Read trip file");
                Ok(Some(bytes))
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(map_io_error(path, &e)),
        }
    }

    #[instrument(skip(self, bytes), fields(path = %path.display(), size = bytes.len()))]
    async fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), ApplicationError> {
        tokio::fs::write(path, bytes)
            .await
            .map_err(|e| map_io_error(path, &e))?;
        debug!("Wrote trip file");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    async fn remove(&self, path: &Path) -> Result<bool, ApplicationError> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => {
                debug!("Removed trip file");
                Ok(true)
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(map_io_error(path, &e)),
        }
    }
}
