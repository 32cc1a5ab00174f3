//! Configuration settings for omnidraft.
//!
//! Settings are loaded from `~/.omnidraft/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::OmnidraftError;
use crate::omnifocus::PASTE_URL_BASE;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Capture defaults.
    pub capture: CaptureConfig,
    /// OmniFocus handoff settings.
    pub omnifocus: OmniFocusConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format, used when `--output` is not given.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
}

/// Defaults applied to every capture.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CaptureConfig {
    /// Tags added to every captured task, after the document's own
    /// global tags and any `--tag` flags.
    #[serde(default)]
    pub extra_tags: Vec<String>,
}

/// OmniFocus handoff settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OmniFocusConfig {
    /// Base URL for the paste callback. Point this at a test build of
    /// OmniFocus registered under another scheme if needed.
    #[serde(default = "default_url_base")]
    pub url_base: String,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

fn default_url_base() -> String {
    PASTE_URL_BASE.to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
        }
    }
}

impl Default for OmniFocusConfig {
    fn default() -> Self {
        Self {
            url_base: default_url_base(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, OmnidraftError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, OmnidraftError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            OmnidraftError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            OmnidraftError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), OmnidraftError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), OmnidraftError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| OmnidraftError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            OmnidraftError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
