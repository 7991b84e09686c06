//! Configuration management for the generator.
//!
//! This module handles loading and validating the optional TOML configuration
//! with platform-specific directory resolution. Without a config file the
//! generator writes `karabiner.json` with the built-in defaults.

use crate::constants::{CONFIG_DIR_NAME, DEFAULT_OUTPUT_FILE, DEFAULT_PROFILE_NAME};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where the generated document goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output file path (relative paths resolve against the working directory)
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

/// Settings for the generated profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Profile name
    pub name: String,
    /// Show the Karabiner icon in the menu bar
    pub show_in_menu_bar: bool,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROFILE_NAME.to_string(),
            show_in_menu_bar: false,
        }
    }
}

/// Optional rule groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Standard function keys in VSCode-family editors (default: true)
    pub vscode_fn_switch: bool,
    /// Fn -> Right Option and Right Control -> Fn (default: false)
    pub fn_key_remapping: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            vscode_fn_switch: true,
            fn_key_remapping: false,
        }
    }
}

/// Generator configuration.
///
/// # File Location
///
/// - Linux: `~/.config/karabiner-config/config.toml`
/// - macOS: `~/Library/Application Support/karabiner-config/config.toml`
/// - Windows: `%APPDATA%\karabiner-config\config.toml`
///
/// # Validation
///
/// - `output.path` must not be empty
/// - `profile.name` must not be empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,
    /// Profile settings
    pub profile: ProfileConfig,
    /// Optional rule groups
    pub rules: RulesConfig,
}

impl Config {
    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the default config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads the default config file, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {e:#}");
            Self::default()
        })
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Invalid TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.output.path.as_os_str().is_empty() {
            anyhow::bail!("Output path cannot be empty");
        }

        if self.profile.name.trim().is_empty() {
            anyhow::bail!("Profile name cannot be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.output.path, PathBuf::from("karabiner.json"));
        assert_eq!(config.profile.name, "Default");
        assert!(!config.profile.show_in_menu_bar);
        assert!(config.rules.vscode_fn_switch);
        assert!(!config.rules.fn_key_remapping);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_parse_partial() {
        let config = Config::parse(
            r#"
            [profile]
            show_in_menu_bar = true

            [rules]
            fn_key_remapping = true
            "#,
        )
        .unwrap();

        assert!(config.profile.show_in_menu_bar);
        assert_eq!(config.profile.name, "Default");
        assert!(config.rules.fn_key_remapping);
        assert!(config.rules.vscode_fn_switch);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_config_parse_empty() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_config_validate_empty_profile_name() {
        let result = Config::parse("[profile]\nname = \"  \"\n");
        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("Profile name cannot be empty"));
    }

    #[test]
    fn test_config_validate_empty_output_path() {
        let result = Config::parse("[output]\npath = \"\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_parse_invalid_toml() {
        let result = Config::parse("[profile\nname = 1");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[output]\npath = \"out/karabiner.json\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output.path, PathBuf::from("out/karabiner.json"));
    }

    #[test]
    fn test_config_load_from_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::load_from(&temp_dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = Config::default();
        let content = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::parse(&content).unwrap(), config);
    }
}
