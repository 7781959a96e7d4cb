//! # Add Command
//!
//! Adds a quantity of an item to the list, merging with an existing entry.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{bail, Result};
use owo_colors::OwoColorize;

use super::ListOptions;
use crate::{config::Config, item::normalize_category};

/// Arguments for the add command
pub struct AddArgs {
    pub options: ListOptions,
    pub name: String,
    pub quantity: String,
}

/// Parses the quantity argument.
pub fn parse_quantity(quantity: &str) -> Result<i64> {
    let Ok(quantity) = quantity.trim().parse::<i64>() else {
        bail!("Quantity must be a number");
    };
    if quantity < 0 {
        bail!("Quantity must be non-negative.");
    }
    Ok(quantity)
}

/// Executes the add command.
pub fn execute(config: &Config, args: &AddArgs) -> Result<()> {
    if args.name.trim().is_empty() {
        bail!("Item name must not be blank.");
    }
    let quantity = parse_quantity(&args.quantity)?;
    let category = args.options.category(config);

    let mut list = args.options.open(config)?;
    list.add_item(&args.name, quantity, Some(category))?;

    println!(
        "{} Added {quantity} x {} to {}",
        "✓".green(),
        args.name,
        normalize_category(Some(category))
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3").unwrap(), 3);
        assert_eq!(parse_quantity(" 0 ").unwrap(), 0);
    }

    #[test]
    fn test_parse_quantity_rejects_text_and_negatives() {
        assert_eq!(
            parse_quantity("lots").unwrap_err().to_string(),
            "Quantity must be a number"
        );
        assert!(parse_quantity("-1").is_err());
    }
}
