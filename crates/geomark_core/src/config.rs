//! Runtime configuration for core.
//!
//! # Responsibility
//! - Resolve where the marker database lives and how logging is set up.
//!
//! # Invariants
//! - A missing home directory never fails resolution; the database falls
//!   back to the working directory.
//! - Logging is only started when `log_dir` is present.

use crate::logging::default_log_level;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DB_FILE_NAME: &str = "markers.db";
pub const ENV_DB_PATH: &str = "GEOMARK_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "GEOMARK_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "GEOMARK_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// SQLite file holding the `Marker` and `Image` tables.
    pub db_path: PathBuf,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling log files; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Builds a config from `GEOMARK_*` environment variables over defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup over defaults.
    ///
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(path) = read(ENV_DB_PATH) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        config.log_dir = read(ENV_LOG_DIR).map(PathBuf::from);
        config
    }
}

/// Default database location inside the platform data directory.
pub fn default_db_path() -> PathBuf {
    match ProjectDirs::from("", "", "geomark") {
        Some(dirs) => dirs.data_dir().join(DB_FILE_NAME),
        None => PathBuf::from(DB_FILE_NAME),
    }
}
