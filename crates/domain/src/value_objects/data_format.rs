//! On-disk data formats for trip schedules

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A file format a trip collection can be read from or written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    /// Semicolon-delimited, fully quoted CSV with two fixed header rows
    Csv,
    /// JSON array of trip objects
    Json,
}

impl DataFormat {
    /// All supported formats, in the order persisted files are probed
    pub const ALL: [Self; 2] = [Self::Csv, Self::Json];

    /// File extension without the leading dot
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Resolve a format from a file extension (with or without leading dot)
    pub fn from_extension(extension: &str) -> Result<Self, DomainError> {
        match extension.trim_start_matches('.') {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(DomainError::UnknownFormat(format!(".{other}"))),
        }
    }

    /// Resolve a format from a file name or path
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| DomainError::UnknownFormat(path.display().to_string()))?;
        Self::from_extension(extension)
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for DataFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(&s.to_lowercase())
    }
}
