//! Configuration management and validation.
//!
//! Provides configuration structures for message delimiters, parser behaviour,
//! statistics presentation and logging, loaded in layers: built-in defaults,
//! an optional TOML file, environment variables, then CLI overrides.

use crate::constants::{
    DEFAULT_COMPONENT_SEPARATOR, DEFAULT_ELEMENT_SEPARATOR, DEFAULT_LOG_LEVEL,
    DEFAULT_SEGMENT_TERMINATOR, DEFAULT_WEIGHT_DIVISOR, UNKNOWN_DESTINATION,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "BAPLIE_LOG_LEVEL";

/// Environment variable overriding the unknown destination label
pub const ENV_UNKNOWN_DESTINATION: &str = "BAPLIE_UNKNOWN_DESTINATION";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub delimiters: DelimiterConfig,
    pub parser: ParserConfig,
    pub statistics: StatisticsConfig,
    pub logging: LoggingConfig,
}

/// EDIFACT delimiters used when the message carries no `UNA` advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelimiterConfig {
    pub segment_terminator: char,
    pub element_separator: char,
    pub component_separator: char,
}

impl Default for DelimiterConfig {
    fn default() -> Self {
        Self {
            segment_terminator: DEFAULT_SEGMENT_TERMINATOR,
            element_separator: DEFAULT_ELEMENT_SEPARATOR,
            component_separator: DEFAULT_COMPONENT_SEPARATOR,
        }
    }
}

/// Parser behaviour switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Let a leading `UNA` segment override the configured delimiters
    pub honor_una: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { honor_una: true }
    }
}

/// Statistics presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsConfig {
    /// Histogram key for containers without a destination port
    pub unknown_destination_label: String,

    /// Divisor applied to the raw weight sum (1000 converts kg to tonnes)
    pub weight_divisor: f64,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            unknown_destination_label: UNKNOWN_DESTINATION.to_string(),
            weight_divisor: DEFAULT_WEIGHT_DIVISOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Default location of the configuration file
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            Error::configuration("Could not determine user configuration directory")
        })?;
        Ok(config_dir.join("baplie-processor").join("config.toml"))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load with layered configuration (defaults -> file -> environment)
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Loading configuration file: {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides using the given variable lookup
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.trim().is_empty()) {
            self.logging.level = level.trim().to_string();
        }
        if let Some(label) = lookup(ENV_UNKNOWN_DESTINATION).filter(|v| !v.trim().is_empty()) {
            self.statistics.unknown_destination_label = label.trim().to_string();
        }
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<()> {
        self.delimiters.validate()?;

        if !(self.statistics.weight_divisor.is_finite() && self.statistics.weight_divisor > 0.0) {
            return Err(Error::configuration(format!(
                "Weight divisor must be a positive number, got {}",
                self.statistics.weight_divisor
            )));
        }

        Ok(())
    }
}

impl DelimiterConfig {
    /// Check that delimiters are distinct and cannot appear in codes
    pub fn validate(&self) -> Result<()> {
        let delimiters = [
            self.segment_terminator,
            self.element_separator,
            self.component_separator,
        ];

        let unusable = |c: &&char| c.is_alphanumeric() || c.is_whitespace();
        if let Some(c) = delimiters.iter().find(unusable) {
            return Err(Error::configuration(format!(
                "Delimiter '{}' must not be alphanumeric or whitespace",
                c
            )));
        }

        if delimiters[0] == delimiters[1]
            || delimiters[0] == delimiters[2]
            || delimiters[1] == delimiters[2]
        {
            return Err(Error::configuration(format!(
                "Delimiters must be distinct, got '{}', '{}' and '{}'",
                delimiters[0], delimiters[1], delimiters[2]
            )));
        }

        Ok(())
    }
}
