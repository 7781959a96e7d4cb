//! # Category Normalization
//!
//! Turns user-supplied category text into the canonical form used for
//! identity and grouping.
//!
//! ## Rules
//! 1. Trim surrounding whitespace
//! 2. Convert to lowercase
//! 3. Blank or missing becomes `default`
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::constants::DEFAULT_CATEGORY;

/// Normalizes an optional category.
///
/// # Example
/// ```
/// use groceries::item::normalize_category;
/// assert_eq!(normalize_category(Some("  Fruit ")), "fruit");
/// assert_eq!(normalize_category(None), "default");
/// ```
pub fn normalize_category(category: Option<&str>) -> String {
    match category.map(str::trim) {
        Some(cat) if !cat.is_empty() => cat.to_lowercase(),
        _ => DEFAULT_CATEGORY.to_string(),
    }
}
