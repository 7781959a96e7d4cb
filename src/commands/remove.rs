//! # Remove Command
//!
//! Removes every item with the given name, whatever its category.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{bail, Result};
use owo_colors::OwoColorize;

use super::ListOptions;
use crate::config::Config;

/// Executes the remove command.
pub fn execute(config: &Config, options: &ListOptions, name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("Item name cannot be empty.");
    }

    let mut list = options.open(config)?;
    let removed = list.remove_item(name)?;

    // Not finding the item is fine; the list is saved either way
    if removed == 0 {
        println!("{}", format!("No item named '{name}'.").dimmed());
    } else {
        println!("{} Removed {removed} item(s) named '{name}'", "✓".green());
    }

    Ok(())
}
