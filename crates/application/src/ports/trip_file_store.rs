//! Trip file storage port
//!
//! Defines where a user's trip files live and how their bytes are read,
//! written, and removed. Paths are deterministic: `<dataDir>/<userId>.<ext>`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use domain::{DataFormat, UserId};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for persisted per-user trip files
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TripFileStore: Send + Sync {
    /// Deterministic location of a user's file in `format`
    fn path_for(&self, user: &UserId, format: DataFormat) -> PathBuf;

    /// Read a file; `None` if it does not exist
    async fn read(&self, path: &Path) -> Result<Option<Vec<u8>>, ApplicationError>;

    /// Create or overwrite a file
    async fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), ApplicationError>;

    /// Delete a file; returns whether it existed
    async fn remove(&self, path: &Path) -> Result<bool, ApplicationError>;
}
