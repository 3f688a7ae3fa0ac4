//! Configuration management for Mushaf.
//!
//! Configuration is read from `~/.config/mushaf/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::domain::Theme;
use crate::session::DEFAULT_SETTLE_GRACE;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub content: ContentConfig,
    pub reading: ReadingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite database path (default: `<data dir>/mushaf/mushaf.db`)
    pub db_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Dataset root holding one directory per language
    /// (default: `<data dir>/mushaf/chapters`)
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReadingConfig {
    /// How long visibility events are ignored after jumping to a verse
    pub settle_grace_ms: u64,

    /// Theme used until one is picked explicitly
    pub system_theme: Theme,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            settle_grace_ms: DEFAULT_SETTLE_GRACE.as_millis() as u64,
            system_theme: Theme::Light,
        }
    }
}

impl ReadingConfig {
    pub fn settle_grace(&self) -> Duration {
        Duration::from_millis(self.settle_grace_ms)
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/mushaf/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("mushaf").join("config.toml"))
    }

    /// Directory for the database and the bundled dataset.
    pub fn default_data_dir() -> Result<PathBuf, ConfigError> {
        let data_dir = dirs::data_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(data_dir.join("mushaf"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn default_config_content() -> &'static str {
        r##"# Mushaf Configuration

[storage]
# Where settings and the last-read position are kept
# db_path = "/home/me/.local/share/mushaf/mushaf.db"

[content]
# Dataset root: <data_dir>/<lang>/index.json and <data_dir>/<lang>/<id>.json
# data_dir = "/home/me/.local/share/mushaf/chapters"

[reading]
# Ignore verse visibility for this long after jumping to a verse (milliseconds)
settle_grace_ms = 700

# Theme to use until one is chosen with `mushaf settings theme`
# ("light" or "dark")
system_theme = "light"
"##
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
