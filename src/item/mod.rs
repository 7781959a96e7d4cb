//! # Item
//!
//! A named, quantified, categorized grocery item.
//!
//! Two items share an identity when their names match case-insensitively and
//! their normalized categories match exactly. Quantity never takes part in
//! identity; items with the same identity are merged by summing quantities.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod category;

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Deserializer, Serialize};

pub use self::category::normalize_category;
use crate::{
    constants::DEFAULT_CATEGORY,
    error::{Error, Result},
};

/// A grocery item as stored in a list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Display name (identity is case-insensitive)
    name: String,

    /// Number of units
    quantity: u32,

    /// Category; `null` in a JSON document decodes to `default`
    #[serde(
        default = "default_category",
        deserialize_with = "category_or_default"
    )]
    category: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn category_or_default<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_category))
}

impl Item {
    /// Creates an item, trimming its name and normalizing its category.
    ///
    /// Fails when the name is blank or the quantity is negative (or does not fit
    /// in a `u32`). A quantity of zero is accepted here but rejected by
    /// [`Item::validate`].
    pub fn new(name: &str, quantity: i64, category: Option<&str>) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::invalid("Item name must not be blank."));
        }
        if quantity < 0 {
            return Err(Error::invalid(format!(
                "Quantity must be non-negative, got {quantity}."
            )));
        }
        let quantity = u32::try_from(quantity)
            .map_err(|_| Error::invalid(format!("Quantity {quantity} is too large.")))?;

        Ok(Self {
            name: name.to_string(),
            quantity,
            category: normalize_category(category),
        })
    }

    /// Builds an item from already-decoded fields, keeping the category verbatim.
    pub(crate) const fn from_record(name: String, quantity: u32, category: String) -> Self {
        Self {
            name,
            quantity,
            category,
        }
    }

    /// Returns the name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the quantity
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the category as stored
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the (lower-cased name, normalized category) identity key.
    pub fn identity(&self) -> (String, String) {
        (
            self.name.trim().to_lowercase(),
            normalize_category(Some(&self.category)),
        )
    }

    /// Returns true if both items denote the same grocery.
    pub fn same_identity(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }

    /// Returns true if the name matches `name` ignoring case and surrounding spaces.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }

    /// Checks that the item may be persisted.
    ///
    /// Stricter than construction: the quantity must be strictly positive.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid("Item name must not be blank."));
        }
        if self.quantity == 0 {
            return Err(Error::invalid(format!(
                "Quantity of '{}' must be greater than zero.",
                self.name
            )));
        }
        if self.category.trim().is_empty() {
            return Err(Error::invalid(format!(
                "Category of '{}' must not be blank.",
                self.name
            )));
        }
        Ok(())
    }

    /// Adds the quantity of `other` to this item.
    ///
    /// Both items must share an identity. On failure the item is left untouched.
    pub fn merge_with(&mut self, other: &Self) -> Result<()> {
        if !self.same_identity(other) {
            return Err(Error::invalid(format!(
                "Cannot merge '{}' ({}) with '{}' ({}).",
                self.name, self.category, other.name, other.category
            )));
        }
        self.quantity = self.quantity.checked_add(other.quantity).ok_or_else(|| {
            Error::invalid(format!("Quantity of '{}' would overflow.", self.name))
        })?;
        Ok(())
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.quantity)?;
        if !self.category.is_empty() {
            write!(f, " ({})", self.category)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_new_normalizes_category() {
        let item = Item::new("Milk", 2, Some("  Dairy ")).unwrap();
        assert_eq!(item.name(), "Milk");
        assert_eq!(item.quantity(), 2);
        assert_eq!(item.category(), "dairy");

        let item = Item::new("Milk", 2, None).unwrap();
        assert_eq!(item.category(), "default");
    }

    #[test]
    fn test_new_trims_name() {
        let item = Item::new("  Milk ", 1, None).unwrap();
        assert_eq!(item.name(), "Milk");
        assert!(item.has_name(" milk"));
        assert_eq!(item, Item::from_record("Milk".to_string(), 3, String::new()));
    }

    #[test]
    fn test_new_rejects_blank_name() {
        let err = Item::new("   ", 1, None).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_new_rejects_negative_quantity() {
        let err = Item::new("Milk", -1, None).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_new_accepts_zero_but_validate_rejects_it() {
        let item = Item::new("Milk", 0, None).unwrap();
        assert!(item.validate().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_validate_rejects_blank_category() {
        let item = Item::from_record("Milk".to_string(), 1, "  ".to_string());
        assert!(item.validate().is_err());
        assert!(Item::new("Milk", 1, None).unwrap().validate().is_ok());
    }

    #[test]
    fn test_identity_ignores_name_case_and_quantity() {
        let a = Item::new("Apple", 2, Some("fruit")).unwrap();
        let b = Item::new("APPLE", 9, Some("Fruit")).unwrap();
        let c = Item::new("Apple", 2, Some("snacks")).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_merge_sums_quantities() {
        let mut a = Item::new("Apple", 2, Some("fruit")).unwrap();
        let b = Item::new("apple", 3, Some("fruit")).unwrap();
        a.merge_with(&b).unwrap();
        assert_eq!(a.quantity(), 5);
        assert_eq!(a.name(), "Apple");
    }

    #[test]
    fn test_merge_rejects_other_identity() {
        let mut a = Item::new("Apple", 2, Some("fruit")).unwrap();
        let b = Item::new("Pear", 3, Some("fruit")).unwrap();
        assert!(a.merge_with(&b).unwrap_err().is_invalid_argument());
        assert_eq!(a.quantity(), 2);
    }

    #[test]
    fn test_merge_overflow_leaves_item_untouched() {
        let mut a = Item::new("Rice", i64::from(u32::MAX), None).unwrap();
        let b = Item::new("Rice", 1, None).unwrap();
        assert!(a.merge_with(&b).is_err());
        assert_eq!(a.quantity(), u32::MAX);
    }

    #[test]
    fn test_display() {
        let item = Item::new("Milk", 2, Some("dairy")).unwrap();
        assert_eq!(item.to_string(), "Milk: 2 (dairy)");

        let item = Item::from_record("Milk".to_string(), 2, String::new());
        assert_eq!(item.to_string(), "Milk: 2");
    }

    #[test]
    fn test_json_null_category_decodes_to_default() {
        let item: Item =
            serde_json::from_str(r#"{"name":"Milk","quantity":2,"category":null}"#).unwrap();
        assert_eq!(item.category(), "default");

        let item: Item = serde_json::from_str(r#"{"name":"Milk","quantity":2}"#).unwrap();
        assert_eq!(item.category(), "default");
    }
}
