//! Configuration types.
//!
//! Configuration lives in `{config_dir}/wilayah/config.toml`. A missing
//! file yields the defaults; the browser never requires one to exist.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

/// Root of the public directory service.
pub const DEFAULT_BASE_URL: &str = "https://www.emsifa.com/api-wilayah-indonesia/api";

/// Runtime configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory service settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Terminal UI settings.
    #[serde(default)]
    pub ui: UiConfig,
}

/// Directory service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the region directory, without a trailing slash.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval in milliseconds.
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_ms: 50 }
    }
}

impl AppConfig {
    /// Load configuration from the default path.
    ///
    /// Returns the defaults when no config file exists.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Path to the config file, if a config directory is known.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("wilayah/config.toml"))
}
