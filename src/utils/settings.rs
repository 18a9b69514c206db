use super::error::{ClientError, Result};
use super::theme::ThemeParams;
use super::types::UserId;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Backend origin used when neither the settings nor the page provide one
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_base_url: Option<String>,
    /// Identity to send when the host platform doesn't expose a user
    pub user_id: Option<UserId>,
    /// Optional client-side cap on message length; unset sends anything
    pub max_message_length: Option<usize>,
    pub fallback_theme: ThemeParams,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: None,
            user_id: None,
            max_message_length: None,
            fallback_theme: ThemeParams::light(),
        }
    }
}

impl Settings {
    /// Get the platform-specific settings directory
    pub fn settings_dir() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") || cfg!(target_os = "macos") {
            // Windows: %APPDATA%\debate-partner
            // macOS: ~/Library/Application Support/debate-partner
            dirs::config_dir()
                .ok_or_else(|| ClientError::Config("Could not find config directory".to_string()))?
                .join("debate-partner")
        } else {
            // Linux/Unix: $HOME/.debate-partner
            dirs::home_dir()
                .ok_or_else(|| ClientError::Config("Could not find home directory".to_string()))?
                .join(".debate-partner")
        };

        Ok(config_dir)
    }

    /// Get the full path to the settings file
    pub fn settings_path() -> Result<PathBuf> {
        Ok(Self::settings_dir()?.join("settings.toml"))
    }

    /// Load settings from the config file.
    ///
    /// In the browser there is no config directory, so defaults are returned.
    pub fn load() -> Result<Self> {
        if cfg!(target_arch = "wasm32") {
            return Ok(Self::default());
        }

        let path = Self::settings_path()?;

        if !path.exists() {
            // Return default settings if file doesn't exist
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| ClientError::Config(format!("Failed to read settings file: {}", e)))?;

        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| ClientError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Pick the backend origin: explicit setting, then the page origin when
    /// it is served over http(s), then the local default.
    pub fn resolve_api_base(&self, page_origin: Option<&str>) -> String {
        let base = self
            .api_base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .or_else(|| {
                page_origin.filter(|origin| {
                    origin.starts_with("http://") || origin.starts_with("https://")
                })
            })
            .unwrap_or(DEFAULT_API_BASE);

        base.trim_end_matches('/').to_string()
    }
}
