//! Config manager for loading the settings file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::settings::Settings;

/// Errors that can occur while building the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    /// Options that cannot be used together.
    #[error("{0}")]
    InvalidCombination(String),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Manages the optional settings file.
pub struct ConfigManager {
    /// Path to the config file, if any.
    config_path: Option<PathBuf>,
    /// Current settings loaded in memory.
    settings: Settings,
}

impl ConfigManager {
    /// Create a manager for the given config file.
    ///
    /// `None` means built-in defaults only. Does not load the file -
    /// call `load()` after.
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            settings: Settings::default(),
        }
    }

    /// Get the config file path.
    pub fn path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Get a reference to the current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Load settings from the config file.
    ///
    /// Without a path this keeps the defaults. A path that does not exist
    /// is an error, since the user asked for it explicitly.
    pub fn load(&mut self) -> ConfigResult<()> {
        let Some(path) = self.config_path.as_ref() else {
            return Ok(());
        };
        if !path.exists() {
            return Err(ConfigError::NotFound(path.clone()));
        }

        let content = fs::read_to_string(path)?;
        self.settings = toml::from_str(&content)?;
        Ok(())
    }

    /// Render the effective settings as a TOML document.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        let mut output = String::new();
        output.push_str("# mkvtomp4 configuration\n\n");
        output.push_str(&toml::to_string_pretty(&self.settings)?);
        Ok(output)
    }
}
