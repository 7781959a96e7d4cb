//! # Configuration
//!
//! Optional user configuration stored at `~/.config/groceries/config`.
//!
//! Every key is optional; command-line flags override the file, and the file
//! overrides the built-in defaults.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CATEGORY, DEFAULT_LOG_LEVEL, FORMAT_JSON, GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME,
};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// User configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Grocery list file used when `--source` is not given
    #[serde(default)]
    pub source: Option<PathBuf>,

    /// Storage format token (`json` or `csv`)
    #[serde(default)]
    pub format: Option<String>,

    /// Category for `add` when `--category` is not given
    #[serde(default)]
    pub category: Option<String>,

    /// Log level filter (e.g. "info", "debug")
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Config {
    /// Returns the path to the config file (~/.config/groceries/config)
    pub fn path() -> Option<PathBuf> {
        get_home_override()
            .or_else(dirs::home_dir)
            .map(|home| {
                home.join(".config")
                    .join(GLOBAL_CONFIG_DIR)
                    .join(GLOBAL_CONFIG_FILENAME)
            })
    }

    /// Loads the config file, falling back to defaults when it does not exist.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config: {}", path.display()))?;
                Self::parse(&content)
                    .with_context(|| format!("Failed to parse config: {}", path.display()))
            }
            _ => Ok(Self::default()),
        }
    }

    /// Parses config file content
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the effective format token
    pub fn format(&self) -> &str {
        self.format.as_deref().unwrap_or(FORMAT_JSON)
    }

    /// Returns the effective default category
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    /// Returns the effective log level
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
