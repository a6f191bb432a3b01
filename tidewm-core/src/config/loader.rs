//! Loading and validation of the tidewm configuration.

use super::types::CoreConfig;
use crate::error::ConfigError;

use directories_next::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Loads and validates [`CoreConfig`] from TOML sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the configuration from the user's configuration directory
    /// (e.g. `~/.config/tidewm/config.toml`). A missing file yields the
    /// default configuration.
    pub fn load() -> Result<CoreConfig, ConfigError> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => {
                debug!("ConfigLoader: No configuration file found, using defaults");
                Ok(CoreConfig::default())
            }
        }
    }

    /// Loads the configuration from an explicit file path.
    pub fn load_from_path(path: &Path) -> Result<CoreConfig, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_from_str(&content)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn load_from_str(content: &str) -> Result<CoreConfig, ConfigError> {
        let config: CoreConfig = toml::from_str(content)?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "tidewm", "tidewm")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    fn validate(config: &CoreConfig) -> Result<(), ConfigError> {
        let interactive = &config.interactive;
        if interactive.gesture_sensitivity <= 0.0 {
            return Err(ConfigError::ValidationError(
                "interactive.gesture_sensitivity must be positive".into(),
            ));
        }
        if interactive.grid_span <= 0.0 {
            return Err(ConfigError::ValidationError(
                "interactive.grid_span must be positive".into(),
            ));
        }
        if interactive.grid_overshoot < 0.0 {
            return Err(ConfigError::ValidationError(
                "interactive.grid_overshoot must not be negative".into(),
            ));
        }
        if interactive.grid_snap <= 0.0 {
            return Err(ConfigError::ValidationError(
                "interactive.grid_snap must be positive".into(),
            ));
        }
        if interactive.min_view_size <= 0.0 {
            return Err(ConfigError::ValidationError(
                "interactive.min_view_size must be positive".into(),
            ));
        }
        if interactive.tick_rate_hz == 0 {
            return Err(ConfigError::ValidationError(
                "interactive.tick_rate_hz must be at least 1".into(),
            ));
        }
        match config.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "unknown logging.level {other:?}"
                )));
            }
        }
        match config.logging.format.to_lowercase().as_str() {
            "text" | "json" => Ok(()),
            other => Err(ConfigError::ValidationError(format!(
                "unknown logging.format {other:?}"
            ))),
        }
    }
}
