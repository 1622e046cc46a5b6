//! Settings model.

use std::path::{Path, PathBuf};

use prune_core::ClientConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::format::DateFormatter;

/// Errors while loading or saving settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Reading or writing the settings file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid JSON.
    #[error("Invalid settings file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Application settings that persist across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Mail API connection.
    pub api: ClientConfig,
    /// POSIX locale name used for dates, e.g. `fr_FR`.
    pub locale: String,
    /// Show desktop notifications instead of console messages.
    pub desktop_notifications: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api: ClientConfig::default(),
            locale: "fr_FR".to_string(),
            desktop_notifications: false,
        }
    }
}

impl AppSettings {
    /// Default settings file location.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("prune")
            .join("settings.json")
    }

    /// Loads settings from the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load() -> Result<Self, SettingsError> {
        Self::load_from(&Self::default_path()).await
    }

    /// Loads settings from `path`, using defaults if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !tokio::fs::try_exists(path).await? {
            return Ok(Self::default());
        }

        let contents = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Saves settings to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub async fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, contents).await?;

        tracing::info!("Settings saved to {:?}", path);
        Ok(())
    }

    /// Date formatter for the configured locale.
    ///
    /// Unknown locales fall back to the default one.
    #[must_use]
    pub fn date_formatter(&self) -> DateFormatter {
        DateFormatter::from_name(&self.locale).unwrap_or_else(|| {
            warn!("Unknown locale {:?}, using default", self.locale);
            DateFormatter::default()
        })
    }
}
