//! Configuration for the drawing tool

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::MAX_DIMENSION;
use crate::input::{is_space, KeyBindings};
use crate::render::RenderMode;

/// Drawing tool configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Canvas settings
    pub screen: ScreenConfig,
    /// How keystrokes are reflected on screen
    pub render_mode: RenderMode,
    /// Movement keys
    pub keys: KeyBindings,
    /// Logging settings
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen: ScreenConfig::default(),
            render_mode: RenderMode::Fill,
            keys: KeyBindings::default(),
            log: LogConfig::default(),
        }
    }
}

/// Canvas configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Canvas width in columns
    pub columns: usize,
    /// Canvas height in rows
    pub rows: usize,
    /// Starting cursor (column, row), 1-based; centered when absent
    pub cursor: Option<(usize, usize)>,
    /// Character the canvas is painted with before the first key
    pub initial_fill: char,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            columns: 80,
            rows: 40,
            cursor: None,
            initial_fill: '0',
        }
    }
}

impl ScreenConfig {
    /// Initial fill as the byte written to the terminal
    pub fn initial_fill_byte(&self) -> u8 {
        if self.initial_fill.is_ascii() {
            self.initial_fill as u8
        } else {
            b'0'
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `TERMDRAW_LOG` is not set
    pub filter: String,
    /// Append logs to this file instead of stderr
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Whether log records already land on stderr
    pub fn writes_to_stderr(&self) -> bool {
        self.file.is_none()
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings the drawing loop cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen.columns == 0 || self.screen.rows == 0 {
            return Err(ConfigError::Invalid(format!(
                "screen must be at least 1x1, got {}x{}",
                self.screen.columns, self.screen.rows
            )));
        }
        if self.screen.columns > MAX_DIMENSION || self.screen.rows > MAX_DIMENSION {
            return Err(ConfigError::Invalid(format!(
                "screen must be at most {}x{}, got {}x{}",
                MAX_DIMENSION, MAX_DIMENSION, self.screen.columns, self.screen.rows
            )));
        }
        if !self.screen.initial_fill.is_ascii() {
            return Err(ConfigError::Invalid(format!(
                "initial_fill must be ASCII, got {:?}",
                self.screen.initial_fill
            )));
        }

        let keys = self.keys.keys();
        for (i, key) in keys.iter().enumerate() {
            if !key.is_ascii() || is_space(*key as u8) {
                return Err(ConfigError::Invalid(format!(
                    "key binding {:?} must be a printable ASCII character",
                    key
                )));
            }
            if keys[i + 1..].contains(key) {
                return Err(ConfigError::Invalid(format!(
                    "key {:?} is bound to more than one direction",
                    key
                )));
            }
        }
        Ok(())
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
