//! Configuration module for gamedex
//!
//! Manages the catalog endpoint, the relay prefix, and output preferences.
//! Configuration is stored in the user's config directory and created with
//! defaults on first run.

use std::fs;
use std::path::PathBuf;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://www.freetogame.com/api/games?platform=pc".to_string()
}

fn default_relay_url() -> Option<String> {
    Some("https://api.allorigins.win/raw?url=".to_string())
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GamedexConfig {
    /// Catalog endpoint, platform filter included
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Relay prefix prepended to the endpoint URL
    ///
    /// The public API is served behind this relay; set to an empty string or
    /// remove the key to request the endpoint directly.
    #[serde(default = "default_relay_url")]
    pub relay_url: Option<String>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for GamedexConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            relay_url: default_relay_url(),
            quiet: false,
        }
    }
}

impl GamedexConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be
    /// determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("gamedex").join("config.toml"))
    }

    /// Load configuration from file, creating defaults if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or
    /// created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be
    /// written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    fn save_to(&self, config_path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = GamedexConfig::default();
        assert_eq!(config.api_url, "https://www.freetogame.com/api/games?platform=pc");
        assert_eq!(
            config.relay_url.as_deref(),
            Some("https://api.allorigins.win/raw?url=")
        );
        assert!(!config.quiet);
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let config: GamedexConfig = toml::from_str("quiet = true").unwrap();
        assert!(config.quiet);
        assert_eq!(config.api_url, default_api_url());
        assert_eq!(config.relay_url, default_relay_url());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = GamedexConfig {
            api_url: "https://example.com/api/games".to_string(),
            // TOML has no way to write an absent key back, so "no relay" is
            // persisted as the empty string (the client treats it as direct).
            relay_url: Some(String::new()),
            quiet: true,
        };
        config.save_to(&path).unwrap();

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()
            .unwrap();
        let reloaded: GamedexConfig = settings.try_deserialize().unwrap();

        assert_eq!(reloaded.api_url, config.api_url);
        assert_eq!(reloaded.relay_url.as_deref(), Some(""));
        assert!(reloaded.quiet);
    }
}
