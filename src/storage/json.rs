//! # JSON Storage
//!
//! Stores a grocery list as a JSON array of `{name, quantity, category}` records.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::{Path, PathBuf};

use tracing::info;

use super::{read_non_empty, write_atomic, Storage};
use crate::{
    error::{Error, Result},
    item::Item,
};

/// JSON-backed grocery list file
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> Result<Vec<Item>> {
        let Some(content) = read_non_empty(&self.path)? else {
            info!(path = %self.path.display(), "JSON list missing or empty, starting fresh");
            return Ok(Vec::new());
        };

        let items: Vec<Item> =
            serde_json::from_str(&content).map_err(|source| Error::Deserialize {
                path: self.path.clone(),
                source,
            })?;

        info!(path = %self.path.display(), count = items.len(), "Loaded JSON list");
        Ok(items)
    }

    fn save(&self, items: &[Item]) -> Result<()> {
        // Nothing is written unless every item is valid
        for item in items {
            item.validate()?;
        }

        let mut content = serde_json::to_vec_pretty(items).map_err(Error::Serialize)?;
        content.push(b'\n');
        write_atomic(&self.path, &content)?;

        info!(path = %self.path.display(), count = items.len(), "Saved JSON list");
        Ok(())
    }
}
