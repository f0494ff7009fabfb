//! Application configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `tripbot.toml`, then `TRIPBOT_*` environment variables where `__` separates
//! nested keys (e.g. `TRIPBOT_STORAGE__DATA_DIR=/var/lib/tripbot`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::telemetry::TelemetryConfig;

/// Base name of the optional configuration file
pub const CONFIG_FILE: &str = "tripbot";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "TRIPBOT";

pub(crate) const fn default_true() -> bool {
    true
}

/// Where user trip files are kept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding `<userId>.csv` and `<userId>.json`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Create `data_dir` at startup if it is missing
    #[serde(default = "default_true")]
    pub create_data_dir: bool,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            create_data_dir: true,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Trip file storage
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from `tripbot.toml` (if present) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `file` instead of `tripbot.toml` when given
    ///
    /// An explicitly named file must exist.
    pub fn load_from(file: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::build(file, environment_source())
    }

    fn build(
        file: Option<&Path>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(CONFIG_FILE).required(false),
        };

        config::Config::builder()
            .set_default("storage.data_dir", "data")?
            .set_default("storage.create_data_dir", true)?
            .set_default("telemetry.log_filter", "info")?
            .set_default("telemetry.log_format", "text")?
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()
    }
}

fn environment_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
