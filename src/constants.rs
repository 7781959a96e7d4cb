//! # Constants
//!
//! Centralized constants for magic values used throughout groceries.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Item Model
// =============================================================================

/// Category assigned to items added without one (or with a blank one).
pub const DEFAULT_CATEGORY: &str = "default";

// =============================================================================
// Storage Formats
// =============================================================================

/// Format token for the structured-record (JSON) codec.
pub const FORMAT_JSON: &str = "json";

/// Format token for the delimited-text (CSV) codec.
pub const FORMAT_CSV: &str = "csv";

/// Header line written as the first row of every CSV list.
pub const CSV_HEADER: &str = "Item,Quantity,Category";

/// Field separator for CSV rows.
pub const CSV_SEPARATOR: char = ',';

/// Quote character that toggles literal mode while splitting CSV rows.
pub const CSV_QUOTE: char = '"';

/// Number of fields in a well-formed CSV row.
pub const CSV_FIELD_COUNT: usize = 3;

// =============================================================================
// Configuration
// =============================================================================

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "groceries";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";

/// Log level used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// =============================================================================
// Listing
// =============================================================================

/// Prefix of the heading line printed before each category.
pub const LIST_CATEGORY_PREFIX: &str = "# ";
