//! Store and logging configuration.
//!
//! # Responsibility
//! - Describe where the student store lives and how core logging starts.
//! - Load that description from a JSON file with field-level defaults.
//!
//! # Invariants
//! - A validated config always carries a normalized log level.
//! - Missing fields fall back to defaults; unknown fields are rejected.

use crate::logging::{default_log_level, normalize_level};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const DEFAULT_DB_FILE_NAME: &str = "student_database.sqlite3";

/// Configuration errors surfaced before any store or logger is opened.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse config `{}`: {source}", path.display())
            }
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::InvalidLogLevel(_) => None,
        }
    }
}

/// Fixed store location plus logging settings for one application session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// SQLite database file holding the `students` table.
    pub db_path: PathBuf,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling log files. `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl StoreConfig {
    /// Creates a config pointing at `db_path` with default logging settings.
    pub fn with_db_path(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            ..Self::default()
        }
    }

    /// Reads and validates a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()
    }

    /// Normalizes the log level, rejecting unsupported values.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        let level = normalize_level(&self.log_level).map_err(ConfigError::InvalidLogLevel)?;
        self.log_level = level.to_string();
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, StoreConfig};
    use std::path::PathBuf;

    #[test]
    fn validate_normalizes_level_case() {
        let config = StoreConfig {
            log_level: " WARNING ".to_string(),
            ..StoreConfig::default()
        };
        let validated = config.validate().unwrap();
        assert_eq!(validated.log_level, "warn");
    }

    #[test]
    fn validate_rejects_unknown_level() {
        let config = StoreConfig {
            log_level: "loud".to_string(),
            ..StoreConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(message) if message.contains("loud")));
    }

    #[test]
    fn with_db_path_keeps_logging_defaults() {
        let config = StoreConfig::with_db_path("/tmp/records.sqlite3");
        assert_eq!(config.db_path, PathBuf::from("/tmp/records.sqlite3"));
        assert_eq!(config.log_dir, None);
        assert_eq!(config.log_level, StoreConfig::default().log_level);
    }
}
