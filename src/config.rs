//! Configuration management for the application.
//!
//! This module handles loading and validating the optional configuration
//! file in TOML format with platform-specific directory resolution.

use crate::constants::{
    CONFIG_PATH_ENV, DEFAULT_KEYMAP_PATH, DEFAULT_README_PATH, DEFAULT_SECTION_HEADING,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default file locations used when no command-line path is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// README that receives the layout section
    pub readme: PathBuf,
    /// ZMK keymap source
    pub keymap: PathBuf,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            readme: PathBuf::from(DEFAULT_README_PATH),
            keymap: PathBuf::from(DEFAULT_KEYMAP_PATH),
        }
    }
}

/// README section settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadmeConfig {
    /// Heading line of the generated section (e.g., "## Раскладка")
    pub section_heading: String,
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        Self {
            section_heading: DEFAULT_SECTION_HEADING.to_string(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/KeymapReadme/config.toml`
/// - macOS: `~/Library/Application Support/KeymapReadme/config.toml`
/// - Windows: `%APPDATA%\KeymapReadme\config.toml`
///
/// The `KEYMAP_README_CONFIG` environment variable overrides the location.
///
/// # Example
///
/// ```toml
/// [paths]
/// readme = "README.md"
/// keymap = "config/kometa.keymap"
///
/// [readme]
/// section_heading = "## Layout"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default file locations
    pub paths: PathConfig,
    /// README section settings
    pub readme: ReadmeConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("KeymapReadme");

        Ok(config_dir)
    }

    /// Gets the full path to the config file, honoring `KEYMAP_README_CONFIG`.
    pub fn config_file_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, falling back to defaults
    /// when the file doesn't exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate().context(format!(
            "Invalid config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `section_heading` is a markdown heading (1-6 `#`, whitespace, text)
    /// - paths are not empty
    pub fn validate(&self) -> Result<()> {
        let heading = self.readme.section_heading.trim();
        let hashes = heading.chars().take_while(|&c| c == '#').count();
        let title = &heading[hashes..];

        if !(1..=6).contains(&hashes)
            || !title.starts_with(char::is_whitespace)
            || title.trim().is_empty()
        {
            anyhow::bail!(
                "Section heading must be a markdown heading like \"{}\", got \"{}\"",
                DEFAULT_SECTION_HEADING,
                self.readme.section_heading
            );
        }

        if self.paths.readme.as_os_str().is_empty() {
            anyhow::bail!("README path cannot be empty");
        }

        if self.paths.keymap.as_os_str().is_empty() {
            anyhow::bail!("Keymap path cannot be empty");
        }

        Ok(())
    }
}
