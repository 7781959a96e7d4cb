//! # Commands
//!
//! CLI command implementations for groceries.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod add;
pub mod info;
pub mod list;
pub mod remove;

use std::path::PathBuf;

use anyhow::{Context, Result};

pub use self::{
    add::{execute as add, AddArgs},
    info::execute as info,
    list::execute as list,
    remove::execute as remove,
};
use crate::{config::Config, list::GroceryList, storage};

/// Options shared by the commands that operate on a list file
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// List file (falls back to `source` in the config)
    pub source: Option<PathBuf>,

    /// Storage format token (falls back to the config, then `json`)
    pub format: Option<String>,

    /// Category for new items (falls back to the config, then `default`)
    pub category: Option<String>,
}

impl ListOptions {
    /// Resolves the list file from the flag or the config.
    pub fn source(&self, config: &Config) -> Result<PathBuf> {
        self.source
            .clone()
            .or_else(|| config.source.clone())
            .ok_or_else(|| anyhow::anyhow!("Missing required option: --source"))
    }

    /// Resolves the category for new items.
    pub fn category<'a>(&'a self, config: &'a Config) -> &'a str {
        self.category.as_deref().unwrap_or_else(|| config.category())
    }

    /// Opens the grocery list these options point at.
    pub fn open(&self, config: &Config) -> Result<GroceryList> {
        let source = self.source(config)?;
        let format = self.format.as_deref().unwrap_or_else(|| config.format());

        let storage = storage::open_by_name(format, &source)?;
        GroceryList::open(storage)
            .with_context(|| format!("Failed to load grocery list: {}", source.display()))
    }
}
