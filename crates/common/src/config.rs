//! Application configuration.
//!
//! Every field has a default, and the defaults reproduce the stock
//! behavior: run `xrandr --listmonitors` through `sh` and log warnings only.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ScreenmapError, ScreenmapResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Where the monitor listing comes from.
    pub source: SourceConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "warn", "debug", "screenmap=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

/// Monitor-listing command settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Shell used to interpret `command`.
    pub shell: String,

    /// Command line passed to `shell -c`.
    pub command: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            shell: "sh".to_string(),
            command: "xrandr --listmonitors".to_string(),
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    ///
    /// Runs before logging is initialized, so a broken file is handed back
    /// alongside the defaults for the caller to report.
    pub fn load() -> (Self, Option<ScreenmapError>) {
        Self::load_or_default(&config_file_path())
    }

    /// Load config from `path`. A missing file is not an error.
    pub fn load_or_default(path: &Path) -> (Self, Option<ScreenmapError>) {
        if !path.exists() {
            return (Self::default(), None);
        }
        match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> ScreenmapResult<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ScreenmapError::config(format!("{}: {e}", path.display())))
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("screenmap").join("config.json")
}
