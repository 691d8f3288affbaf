use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/tourdesk/config.toml` on Unix/macOS, or the
    /// platform equivalent via `dirs::config_dir()`. Falls back to the
    /// current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("tourdesk").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from a specific path.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rate_fields = [
            ("fares.tax_rate", self.fares.tax_rate),
            ("fares.service_fee_rate", self.fares.service_fee_rate),
            ("fares.wallet_rate", self.fares.wallet_rate),
        ];
        for (name, rate) in rate_fields {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ConfigError::ValidationError {
                    message: format!("{name} must be between 0.0 and 1.0, got {rate}"),
                });
            }
        }

        for promo in &self.fares.promos {
            if promo.code.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "promo code must not be empty".to_string(),
                });
            }
            if promo.amount < 0 {
                return Err(ConfigError::ValidationError {
                    message: format!("promo '{}' has a negative amount", promo.code),
                });
            }
        }

        if self.assistant.delay_ticks == 0 {
            return Err(ConfigError::ValidationError {
                message: "assistant.delay_ticks must be at least 1".to_string(),
            });
        }

        if self.ui.tick_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_ms must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
