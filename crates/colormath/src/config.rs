//! Configuration management for colormath
//!
//! Handles loading of `colormath.toml` files. Configuration only covers the
//! ambient surface (logging); color arithmetic takes no settings.

use crate::error::{ConfigError, Result};
use crate::logging::{LogConfig, init_logging};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LogConfig,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text).map_err(ConfigError::Parse)?)
    }

    /// Load configuration from a specific path
    ///
    /// # Returns
    ///
    /// The parsed configuration, [`ConfigError::Read`] when the file cannot
    /// be read, or [`ConfigError::Parse`] for malformed TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load `path` and install the `[logging]` subscriber it describes.
    ///
    /// Nothing is installed when loading fails, so a caller may fall back to
    /// [`Config::default`] and try again.
    pub fn load_and_init(path: &Path) -> Result<Self> {
        let config = Self::load_from(path)?;
        init_logging(&config.logging)?;
        Ok(config)
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-friendly output
    #[default]
    Pretty,
    /// JSON lines
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => f.write_str("pretty"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown log format: {s}. Expected one of: pretty, json")),
        }
    }
}
