//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::constants::{
    CONFIG_DIR_ENV, CONFIG_DIR_NAME, DEFAULT_BASE_COLOR, DEFAULT_TARGET_RATIO, MAX_CONTRAST_RATIO,
};
use crate::export::ExportFormat;
use crate::models::{RgbColor, Scheme};
use crate::services::contrast::{default_backgrounds, Background};

/// Palette defaults used when the command line omits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Base color (e.g., "#6366f1")
    #[serde(default = "default_base")]
    pub base: RgbColor,
    /// Color scheme
    #[serde(default)]
    pub scheme: Scheme,
}

fn default_base() -> RgbColor {
    RgbColor::from_hex(DEFAULT_BASE_COLOR).unwrap_or_default()
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            scheme: Scheme::default(),
        }
    }
}

/// Accessibility check settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastConfig {
    /// Ratio suggestions aim for (WCAG AA is 4.5)
    #[serde(default = "default_target_ratio")]
    pub target_ratio: f64,
    /// Backgrounds the palette's base color is audited against
    #[serde(default = "default_backgrounds")]
    pub backgrounds: Vec<Background>,
}

fn default_target_ratio() -> f64 {
    DEFAULT_TARGET_RATIO
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            target_ratio: default_target_ratio(),
            backgrounds: default_backgrounds(),
        }
    }
}

/// Code export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExportConfig {
    /// Default export format
    #[serde(default)]
    pub format: ExportFormat,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/palettegen/config.toml`
/// - macOS: `~/Library/Application Support/palettegen/config.toml`
/// - Windows: `%APPDATA%\palettegen\config.toml`
///
/// Setting `PALETTEGEN_CONFIG_DIR` replaces the directory.
///
/// # Validation
///
/// - `target_ratio` must be between 1 and 21
/// - at least one background must be configured
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Palette defaults
    #[serde(default)]
    pub palette: PaletteConfig,
    /// Accessibility settings
    #[serde(default)]
    pub contrast: ContrastConfig,
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

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path().is_ok_and(|path| path.exists())
    }

    /// Gets the config directory path.
    ///
    /// Uses `PALETTEGEN_CONFIG_DIR` when set, otherwise the platform config
    /// directory joined with `palettegen`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

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
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config = Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        debug!(path = %config_path.display(), "loaded config");
        Ok(config)
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

        info!(path = %config_path.display(), "saved config");
        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let ratio = self.contrast.target_ratio;
        if !(1.0..=MAX_CONTRAST_RATIO).contains(&ratio) {
            anyhow::bail!(
                "Target contrast ratio {ratio} is out of range. Expected a value between 1 and {MAX_CONTRAST_RATIO}"
            );
        }

        if self.contrast.backgrounds.is_empty() {
            anyhow::bail!("At least one contrast background must be configured");
        }

        if let Some(unnamed) = self
            .contrast
            .backgrounds
            .iter()
            .find(|background| background.name.trim().is_empty())
        {
            anyhow::bail!("Contrast background {} has an empty name", unnamed.color);
        }

        Ok(())
    }
}
