//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use crate::constants::{DEFAULT_CATEGORY_TRIGGERS, ITEM_PREFIX};
use crate::models::TriggerSet;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "AACBOARD_CONFIG_DIR";

/// Category trigger configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerConfig {
    /// Image locations that open a category when added to a board
    #[serde(default = "default_trigger_images")]
    pub images: Vec<String>,
}

fn default_trigger_images() -> Vec<String> {
    DEFAULT_CATEGORY_TRIGGERS
        .iter()
        .map(ToString::to_string)
        .collect()
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            images: default_trigger_images(),
        }
    }
}

/// Export configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExportConfig {
    /// Destination used when an export does not name one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_path: Option<PathBuf>,
}

impl ExportConfig {
    /// Resolves the export destination.
    ///
    /// Falls back to `board_export_[date].txt` in the working directory when
    /// no default path is configured.
    pub fn output_path(&self) -> PathBuf {
        if let Some(path) = &self.default_path {
            return path.clone();
        }

        let date = chrono::Local::now().format("%Y-%m-%d");
        PathBuf::from(format!("board_export_{}.txt", date))
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/AACBoard/config.toml`
/// - macOS: `~/Library/Application Support/AACBoard/config.toml`
/// - Windows: `%APPDATA%\AACBoard\config.toml`
///
/// Setting `AACBOARD_CONFIG_DIR` replaces the directory.
///
/// # Validation
///
/// - Trigger image locations must be non-empty, contain no whitespace, and
///   not start with `>`
/// - Trigger image locations must be unique
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Category triggers
    #[serde(default)]
    pub triggers: TriggerConfig,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// - Linux: `~/.config/AACBoard/`
    /// - macOS: `~/Library/Application Support/AACBoard/`
    /// - Windows: `%APPDATA%\AACBoard\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("AACBoard");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        for (idx, image) in self.triggers.images.iter().enumerate() {
            if image.is_empty() {
                anyhow::bail!("Trigger image location cannot be empty");
            }

            if image.chars().any(char::is_whitespace) {
                anyhow::bail!("Trigger image location '{image}' cannot contain whitespace");
            }

            if image.starts_with(ITEM_PREFIX) {
                anyhow::bail!(
                    "Trigger image location '{image}' cannot start with '{ITEM_PREFIX}'"
                );
            }

            if self.triggers.images[..idx].contains(image) {
                anyhow::bail!("Duplicate trigger image location '{image}'");
            }
        }

        Ok(())
    }

    /// Builds the trigger set used by new boards.
    pub fn trigger_set(&self) -> TriggerSet {
        TriggerSet::new(self.triggers.images.iter().cloned())
    }

    /// Adds a trigger image. Returns false if it was already configured.
    pub fn add_trigger(&mut self, image: impl Into<String>) -> Result<bool> {
        let image = image.into();
        if self.triggers.images.contains(&image) {
            return Ok(false);
        }

        self.triggers.images.push(image);
        if let Err(err) = self.validate() {
            self.triggers.images.pop();
            return Err(err);
        }
        Ok(true)
    }

    /// Removes a trigger image. Returns false if it was not configured.
    pub fn remove_trigger(&mut self, image: &str) -> bool {
        let before = self.triggers.images.len();
        self.triggers.images.retain(|candidate| candidate != image);
        self.triggers.images.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(
            config.triggers.images,
            vec!["img/food/plate.png", "img/clothing/hanger.png"]
        );
        assert_eq!(config.export.default_path, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_trigger_set_from_config() {
        let config = Config::new();
        let triggers = config.trigger_set();
        assert!(triggers.contains("img/food/plate.png"));
        assert!(!triggers.contains("img/apple.png"));
    }

    #[test]
    fn test_validate_rejects_bad_triggers() {
        let mut config = Config::new();
        config.triggers.images = vec![String::new()];
        assert!(config.validate().is_err());

        config.triggers.images = vec!["img/my plate.png".to_string()];
        assert!(config.validate().is_err());

        config.triggers.images = vec!["a.png".to_string(), "a.png".to_string()];
        assert!(config.validate().is_err());

        config.triggers.images = vec![">box.png".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_add_and_remove_trigger() {
        let mut config = Config::new();
        assert!(config.add_trigger("img/toys/box.png").unwrap());
        assert!(!config.add_trigger("img/toys/box.png").unwrap());
        assert!(config.add_trigger("bad trigger").is_err());
        assert_eq!(config.triggers.images.len(), 3);

        assert!(config.remove_trigger("img/toys/box.png"));
        assert!(!config.remove_trigger("img/toys/box.png"));
    }

    #[test]
    fn test_config_toml_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.export.default_path = Some(PathBuf::from("/tmp/board.txt"));

        let content = toml::to_string_pretty(&config).unwrap();
        fs::write(&config_file, content).unwrap();

        let content = fs::read_to_string(&config_file).unwrap();
        let loaded = Config::from_toml(&content).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let loaded = Config::from_toml("").unwrap();
        assert_eq!(loaded, Config::new());

        let loaded = Config::from_toml("[triggers]\nimages = []\n").unwrap();
        assert!(loaded.trigger_set().is_empty());
    }

    #[test]
    fn test_export_output_path() {
        let mut export = ExportConfig::default();
        let generated = export.output_path();
        let name = generated.to_string_lossy();
        assert!(name.starts_with("board_export_"));
        assert!(name.ends_with(".txt"));

        export.default_path = Some(PathBuf::from("/tmp/custom.txt"));
        assert_eq!(export.output_path(), PathBuf::from("/tmp/custom.txt"));
    }
}
