//! # Grocery List
//!
//! In-memory grocery list bound to a storage backend.
//!
//! The list is loaded once when opened and written back in full after every
//! mutation. Reads never touch storage.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    collections::BTreeMap,
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use tracing::{error, info, warn};

use crate::{
    error::Result,
    item::{normalize_category, Item},
    storage::Storage,
};

/// Items grouped by normalized category, categories in ascending order
pub type Grouped = BTreeMap<String, Vec<Item>>;

/// A grocery list with at most one item per (name, category) identity
pub struct GroceryList {
    storage: Box<dyn Storage>,
    items: Vec<Item>,
}

impl GroceryList {
    /// Loads the list from `storage`.
    pub fn open(storage: Box<dyn Storage>) -> Result<Self> {
        let items = storage.load()?;
        info!(count = items.len(), "Grocery list loaded");
        Ok(Self { storage, items })
    }

    /// Adds `quantity` of `name` under `category`, merging into an existing
    /// item with the same identity, then saves the whole list.
    ///
    /// If saving fails the in-memory change is kept.
    pub fn add_item(&mut self, name: &str, quantity: i64, category: Option<&str>) -> Result<()> {
        let candidate = Item::new(name, quantity, category)?;

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.same_identity(&candidate))
        {
            existing.merge_with(&candidate)?;
            info!(
                item = existing.name(),
                added = candidate.quantity(),
                total = existing.quantity(),
                category = existing.category(),
                "Updated existing item"
            );
        } else {
            info!(
                item = candidate.name(),
                quantity = candidate.quantity(),
                category = candidate.category(),
                "Added new item"
            );
            self.items.push(candidate);
        }

        self.persist()
    }

    /// Removes every item named `name` (ignoring case) from all categories,
    /// then saves the list. A missing name is not an error.
    ///
    /// Returns the number of items removed.
    pub fn remove_item(&mut self, name: &str) -> Result<usize> {
        let before = self.items.len();
        self.items.retain(|item| !item.has_name(name));
        let removed = before - self.items.len();

        if removed == 0 {
            warn!(item = name, "Item not found for removal");
        } else {
            info!(item = name, removed, "Removed item(s)");
        }

        self.persist()?;
        Ok(removed)
    }

    /// Groups the current items by normalized category.
    ///
    /// Within a category, items keep their stored order.
    pub fn list_items(&self) -> Grouped {
        let mut grouped = Grouped::new();
        for item in &self.items {
            grouped
                .entry(normalize_category(Some(item.category())))
                .or_default()
                .push(item.clone());
        }
        grouped
    }

    /// Returns the items in stored order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&self) -> Result<()> {
        self.storage.save(&self.items).map_err(|err| {
            error!(error = %err, "Failed to persist grocery list");
            err
        })
    }
}

impl fmt::Debug for GroceryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroceryList")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

/// A [`GroceryList`] shared between callers.
///
/// Every method holds the list's lock for its whole duration, so concurrent
/// callers are serialized. Clones share the same list.
#[derive(Debug, Clone)]
pub struct SharedGroceryList {
    inner: Arc<Mutex<GroceryList>>,
}

impl SharedGroceryList {
    pub fn new(list: GroceryList) -> Self {
        Self {
            inner: Arc::new(Mutex::new(list)),
        }
    }

    /// Loads the list from `storage`.
    pub fn open(storage: Box<dyn Storage>) -> Result<Self> {
        GroceryList::open(storage).map(Self::new)
    }

    fn lock(&self) -> MutexGuard<'_, GroceryList> {
        // Each method leaves the list consistent before it can panic
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_item(&self, name: &str, quantity: i64, category: Option<&str>) -> Result<()> {
        self.lock().add_item(name, quantity, category)
    }

    pub fn remove_item(&self, name: &str) -> Result<usize> {
        self.lock().remove_item(name)
    }

    pub fn list_items(&self) -> Grouped {
        self.lock().list_items()
    }

    /// Returns a snapshot of the items in stored order
    pub fn items(&self) -> Vec<Item> {
        self.lock().items().to_vec()
    }
}
