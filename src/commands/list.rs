//! # List Command
//!
//! Prints the grocery list grouped by category:
//!
//! ```text
//! # dairy:
//! Milk: 2
//!
//! # default:
//! Salt: 1
//!
//! ```
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt::Write;

use anyhow::Result;

use super::ListOptions;
use crate::{config::Config, constants::LIST_CATEGORY_PREFIX, list::Grouped};

/// Renders grouped items: a heading per category, one line per item, and a
/// blank line after each category.
pub fn render(grouped: &Grouped) -> String {
    let mut out = String::new();
    for (category, items) in grouped {
        let _ = writeln!(out, "{LIST_CATEGORY_PREFIX}{category}:");
        for item in items {
            let _ = writeln!(out, "{}: {}", item.name(), item.quantity());
        }
        out.push('\n');
    }
    out
}

/// Executes the list command. An empty list prints nothing.
pub fn execute(config: &Config, options: &ListOptions) -> Result<()> {
    let list = options.open(config)?;
    print!("{}", render(&list.list_items()));

    Ok(())
}
