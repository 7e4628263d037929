//! Configuration management for Bootkit tools

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or saving the config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(serde_json::Error),

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Global Bootkit configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Pause after a printed line (seconds)
    #[serde(default = "default_line_delay")]
    pub line_delay: f64,

    /// Pause after a stanza break (seconds)
    #[serde(default = "default_stanza_delay")]
    pub stanza_delay: f64,
}

fn default_line_delay() -> f64 {
    3.0
}

fn default_stanza_delay() -> f64 {
    1.5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_delay: default_line_delay(),
            stanza_delay: default_stanza_delay(),
        }
    }
}

impl Config {
    /// Load config from file, falling back to defaults when it is absent
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, content).map_err(write_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load(&tmp.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.line_delay, 3.0);
        assert_eq!(config.stanza_delay, 1.5);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, r#"{ "line_delay": 0.25 }"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.line_delay, 0.25);
        assert_eq!(config.stanza_delay, 1.5);
    }

    #[test]
    fn test_save_then_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("config.json");
        let config = Config {
            line_delay: 0.5,
            stanza_delay: 2.0,
        };

        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.json"));
    }
}
