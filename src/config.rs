use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::version::types::{DEFAULT_DATA_SEPARATOR, Version};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rendering configuration for collaborators that display or persist versions
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatConfig {
    /// Separator between canonical part tokens
    pub data_separator: String,
    /// Prefix friendly strings with `v`
    pub display_prefix: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            data_separator: DEFAULT_DATA_SEPARATOR.to_string(),
            display_prefix: true,
        }
    }
}

impl FormatConfig {
    pub fn friendly(&self, version: &Version) -> String {
        version.as_string(self.display_prefix, false)
    }

    pub fn data(&self, version: &Version) -> String {
        version.data_string_with(&self.data_separator)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }
}

/// Returns the path to the config directory for versioning.
/// Uses $XDG_CONFIG_HOME/versioning if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/versioning,
/// or ./versioning if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("versioning")
}
