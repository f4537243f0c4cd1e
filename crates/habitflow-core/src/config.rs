//! TOML-based application configuration.
//!
//! Stores user preferences for completion notifications and mode
//! advancement. Timer durations are canonical constants and deliberately
//! absent here.
//!
//! Configuration is stored at `~/.config/habitflow/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::storage::data_dir;

/// Notification configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_50")]
    pub volume: u32,
    /// Path to a custom completion sound file (optional).
    #[serde(default)]
    pub custom_sound: Option<String>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            volume: default_50(),
            custom_sound: None,
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/habitflow/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,
    /// Start the next countdown automatically after completion. Off by
    /// default: completion lands in idle.
    #[serde(default)]
    pub auto_advance: bool,
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/habitflow"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when no file
    /// exists yet.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let raw = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Look up a value by dotted key, for the CLI.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "notifications.enabled" => Some(self.notifications.enabled.to_string()),
            "notifications.volume" => Some(self.notifications.volume.to_string()),
            "notifications.custom_sound" => {
                Some(self.notifications.custom_sound.clone().unwrap_or_default())
            }
            "auto_advance" => Some(self.auto_advance.to_string()),
            _ => None,
        }
    }

    /// Set a value by dotted key, for the CLI.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: &str| ConfigError::InvalidValue {
            key: key.to_string(),
            message: message.to_string(),
        };
        match key {
            "notifications.enabled" => {
                self.notifications.enabled =
                    value.parse().map_err(|_| invalid("expected true or false"))?;
            }
            "notifications.volume" => {
                let volume: u32 = value.parse().map_err(|_| invalid("expected a number"))?;
                if volume > 100 {
                    return Err(invalid("volume must be 0-100"));
                }
                self.notifications.volume = volume;
            }
            "notifications.custom_sound" => {
                self.notifications.custom_sound = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "auto_advance" => {
                self.auto_advance =
                    value.parse().map_err(|_| invalid("expected true or false"))?;
            }
            _ => return Err(invalid("unknown key")),
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}
fn default_50() -> u32 {
    50
}
