// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for the setlist editor.
//!
//! Settings are read from a TOML file. Every section and key is optional;
//! missing values fall back to the defaults below.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::songs::{SongListLabels, DEFAULT_ADD_LABEL, DEFAULT_DELETE_LABEL};

/// Validation failures for a loaded configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("frame rate {0} is outside 1..=120")]
    FrameRate(u32),
    #[error("{0} label must not be empty")]
    EmptyLabel(&'static str),
    #[error("add and delete labels are both {0:?}")]
    DuplicateLabel(String),
    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Initial contents of the list
    #[serde(default)]
    pub list: ListConfig,
}

impl AppConfig {
    /// Load and validate a configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config = Self::from_toml(&contents)?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Parse a configuration from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")
    }

    /// Check value ranges and label sanity
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !(1..=120).contains(&self.ui.frame_rate) {
            return Err(ConfigError::FrameRate(self.ui.frame_rate));
        }
        if self.ui.add_label.trim().is_empty() {
            return Err(ConfigError::EmptyLabel("add"));
        }
        if self.ui.delete_label.trim().is_empty() {
            return Err(ConfigError::EmptyLabel("delete"));
        }
        if self.ui.add_label == self.ui.delete_label {
            return Err(ConfigError::DuplicateLabel(self.ui.add_label.clone()));
        }
        self.logging.level()?;
        Ok(())
    }

    /// Button labels for the song list
    pub fn labels(&self) -> SongListLabels {
        SongListLabels {
            add: self.ui.add_label.clone(),
            delete: self.ui.delete_label.clone(),
        }
    }
}

/// Terminal UI settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// Title shown on the list border
    #[serde(default = "default_title")]
    pub title: String,
    /// Redraw rate in frames per second
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    #[serde(default = "default_add_label")]
    pub add_label: String,
    #[serde(default = "default_delete_label")]
    pub delete_label: String,
}

fn default_title() -> String {
    "Setlist".to_string()
}
fn default_frame_rate() -> u32 {
    30
}
fn default_add_label() -> String {
    DEFAULT_ADD_LABEL.to_string()
}
fn default_delete_label() -> String {
    DEFAULT_DELETE_LABEL.to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            frame_rate: default_frame_rate(),
            add_label: default_add_label(),
            delete_label: default_delete_label(),
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Maximum level: trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; logging is off when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed maximum level
    pub fn level(&self) -> std::result::Result<tracing::Level, ConfigError> {
        tracing::Level::from_str(self.level.trim())
            .map_err(|_| ConfigError::LogLevel(self.level.clone()))
    }
}

/// Initial list contents
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ListConfig {
    #[serde(default)]
    pub songs: Vec<String>,
}
