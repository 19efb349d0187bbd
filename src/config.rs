//! Application configuration.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Default configuration file, read when present.
pub const DEFAULT_CONFIG_FILE: &str = "noughts.toml";

/// Environment variable overriding the database path.
pub const DB_PATH_ENV: &str = "NOUGHTS_DB";

/// Runtime settings for the front ends.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// SQLite file holding finished games.
    #[serde(default = "default_database_path")]
    database_path: PathBuf,

    /// Log file used while the terminal UI owns the screen.
    #[serde(default = "default_log_path")]
    log_path: PathBuf,

    /// Whether finished games are written to the database.
    #[serde(default = "default_persist")]
    #[getter(copy)]
    persist: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("noughts.db")
}

fn default_log_path() -> PathBuf {
    PathBuf::from("noughts.log")
}

fn default_persist() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            log_path: default_log_path(),
            persist: default_persist(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(
            database = %config.database_path.display(),
            persist = config.persist,
            "Config loaded"
        );
        Ok(config)
    }

    /// Resolves the effective configuration.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`]
    /// is used if present and defaults otherwise. [`DB_PATH_ENV`] then
    /// overrides the database path.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => {
                debug!("No config file, using defaults");
                Self::default()
            }
        };

        if let Ok(db) = std::env::var(DB_PATH_ENV) {
            debug!(db = %db, "Database path overridden by environment");
            config.database_path = PathBuf::from(db);
        }
        Ok(config)
    }

    /// Replaces the database path.
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }

    /// Turns persistence on or off.
    pub fn with_persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
