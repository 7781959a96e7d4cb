//! # CSV Storage
//!
//! Stores a grocery list as comma-separated text:
//!
//! ```text
//! Item,Quantity,Category
//! Milk,2,dairy
//! Banana,2,"fruit,fresh"
//! ```
//!
//! ## Reading
//! 1. The first line is a header and is always skipped
//! 2. A `"` toggles quoted mode; inside it, commas are literal
//! 3. Rows that do not split into exactly three fields are skipped
//! 4. Fields are trimmed; the category is kept verbatim otherwise
//! 5. A quantity that is not a number fails the whole load
//!
//! Quote toggling is deliberately simple: there is no `""` escape, so a field
//! can never contain a literal quote.
//!
//! ## Writing
//! The header is rewritten first, then one `name,quantity,category` row per
//! item. Values are never quoted, so a comma inside a name or category does not
//! survive a save/load cycle.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::{read_non_empty, write_atomic, Storage};
use crate::{
    constants::{CSV_FIELD_COUNT, CSV_HEADER, CSV_QUOTE, CSV_SEPARATOR},
    error::{Error, Result},
    item::Item,
};

/// Outcome of decoding one data row
#[derive(Debug)]
pub enum Row {
    /// A well-formed record
    Record(Item),
    /// A row with the wrong number of fields; ignored by `load`
    Skip { fields: usize },
}

/// CSV-backed grocery list file
#[derive(Debug, Clone)]
pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decodes a single data row; `line_number` is 1-based and only used in errors.
    pub fn decode_row(&self, line_number: usize, line: &str) -> Result<Row> {
        let fields: [String; CSV_FIELD_COUNT] = match split_fields(line).try_into() {
            Ok(fields) => fields,
            Err(fields) => {
                return Ok(Row::Skip {
                    fields: fields.len(),
                })
            }
        };
        let [name, quantity, category] = fields.map(|field| field.trim().to_string());

        let quantity = quantity.parse::<u32>().map_err(|_| Error::Quantity {
            path: self.path.clone(),
            line: line_number,
            value: quantity,
        })?;

        Ok(Row::Record(Item::from_record(name, quantity, category)))
    }
}

/// Splits a row on commas that are outside double quotes.
///
/// Quote characters are consumed and never appear in the output.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::with_capacity(CSV_FIELD_COUNT);
    let mut current = String::new();
    let mut quoted = false;

    for c in line.chars() {
        match c {
            CSV_QUOTE => quoted = !quoted,
            CSV_SEPARATOR if !quoted => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);

    fields
}

/// Formats one item as an unquoted row.
fn encode_row(item: &Item) -> String {
    format!(
        "{}{CSV_SEPARATOR}{}{CSV_SEPARATOR}{}",
        item.name(),
        item.quantity(),
        item.category()
    )
}

fn breaks_round_trip(value: &str) -> bool {
    value.contains([CSV_SEPARATOR, CSV_QUOTE])
}

impl Storage for CsvStorage {
    fn load(&self) -> Result<Vec<Item>> {
        let Some(content) = read_non_empty(&self.path)? else {
            info!(path = %self.path.display(), "CSV list missing or empty, starting fresh");
            return Ok(Vec::new());
        };

        let mut items = Vec::new();
        for (index, line) in content.lines().enumerate().skip(1) {
            match self.decode_row(index + 1, line)? {
                Row::Record(item) => items.push(item),
                Row::Skip { fields } => {
                    warn!(
                        path = %self.path.display(),
                        line = index + 1,
                        fields,
                        "Skipping malformed CSV row"
                    );
                }
            }
        }

        info!(path = %self.path.display(), count = items.len(), "Loaded CSV list");
        Ok(items)
    }

    fn save(&self, items: &[Item]) -> Result<()> {
        let mut content = String::from(CSV_HEADER);
        content.push('\n');

        for item in items {
            if breaks_round_trip(item.name()) || breaks_round_trip(item.category()) {
                warn!(
                    item = item.name(),
                    category = item.category(),
                    "Value contains a comma or quote and will not load back unchanged"
                );
            }
            content.push_str(&encode_row(item));
            content.push('\n');
        }

        write_atomic(&self.path, content.as_bytes())?;

        info!(path = %self.path.display(), count = items.len(), "Saved CSV list");
        Ok(())
    }
}
