//! The shopping list operations and the in-memory store behind them.
//!
//! # Design
//! [`ShoppingList`] is the whole contract a caller (UI, CLI, HTTP handler)
//! sees. [`Store`] implements it over a `Vec<Item>` kept in insertion order:
//! appends grow the vector, lookups are linear scans, and removals shift the
//! tail down so the sequence never holds gaps. Unknown ids are reported as
//! `None` / `false`; errors come only from name validation and from seeding
//! a store with clashing ids.

use std::collections::{HashMap, HashSet};

use crate::config::StoreConfig;
use crate::demo;
use crate::error::ValidationError;
use crate::item::Item;

/// Operations exposed by a shopping list.
pub trait ShoppingList {
    /// Create an item from the inputs and append it. Returns a copy of the
    /// stored item.
    fn add(&mut self, name: &str, quantity: i32, notes: Option<&str>)
        -> Result<Item, ValidationError>;

    /// Snapshot of every item, in list order.
    fn get_all(&self) -> Vec<Item>;

    /// Copy of the item with `id`, or `None` when no item matches.
    fn get_by_id(&self, id: &str) -> Option<Item>;

    /// Replace name, quantity, and notes of the item with `id`.
    ///
    /// Returns `Ok(None)` when no item matches. An invalid name on an existing
    /// item is an error and leaves the item untouched.
    fn update(
        &mut self,
        id: &str,
        name: &str,
        quantity: i32,
        notes: Option<&str>,
    ) -> Result<Option<Item>, ValidationError>;

    /// Remove the item with `id`. Returns whether one was removed.
    fn delete(&mut self, id: &str) -> bool;

    /// Items whose name contains `query`, ignoring case.
    fn search(&self, query: &str) -> Vec<Item>;

    /// Remove every purchased item. Returns how many were removed.
    fn clear_purchased(&mut self) -> usize;

    /// Flip the purchased flag. Returns `false` when no item matches.
    fn toggle_purchased(&mut self, id: &str) -> bool;

    /// Rearrange the list to follow `ordered_ids`.
    ///
    /// `ordered_ids` must name every current item exactly once; otherwise the
    /// order is left alone and `false` is returned.
    fn reorder(&mut self, ordered_ids: &[&str]) -> bool;
}

/// Ordered in-memory collection of [`Item`]s.
#[derive(Debug, Clone)]
pub struct Store {
    items: Vec<Item>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// An empty store configured from the environment (see
    /// [`StoreConfig::from_env`]).
    pub fn new() -> Self {
        Self::with_config(StoreConfig::from_env())
    }

    /// An empty store sized by `config`.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            items: Vec::with_capacity(config.initial_capacity),
        }
    }

    /// Build a store holding `items` in the given order.
    ///
    /// Fails with [`ValidationError::DuplicateId`] on the first id seen twice.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Result<Self, ValidationError> {
        let items: Vec<Item> = items.into_iter().collect();
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(ValidationError::DuplicateId {
                    id: item.id().to_string(),
                });
            }
        }
        Ok(Self { items })
    }

    /// A store seeded with [`demo::items`].
    pub fn with_demo_items() -> Result<Self, ValidationError> {
        Self::from_items(demo::items()?)
    }

    /// Number of items in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items the store can hold before its backing storage grows.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

impl ShoppingList for Store {
    fn add(
        &mut self,
        name: &str,
        quantity: i32,
        notes: Option<&str>,
    ) -> Result<Item, ValidationError> {
        let mut item = Item::new(name)?;
        item.set_quantity(quantity);
        item.set_notes(notes.map(str::to_owned));

        tracing::debug!(id = %item.id(), name = %item.name(), "item added");
        self.items.push(item.clone());
        Ok(item)
    }

    fn get_all(&self) -> Vec<Item> {
        self.items.clone()
    }

    fn get_by_id(&self, id: &str) -> Option<Item> {
        self.items.iter().find(|item| item.id() == id).cloned()
    }

    fn update(
        &mut self,
        id: &str,
        name: &str,
        quantity: i32,
        notes: Option<&str>,
    ) -> Result<Option<Item>, ValidationError> {
        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            return Ok(None);
        };

        // Name goes first: it is the only fallible write.
        item.set_name(name)?;
        item.set_quantity(quantity);
        item.set_notes(notes.map(str::to_owned));

        tracing::debug!(id = %item.id(), "item updated");
        Ok(Some(item.clone()))
    }

    fn delete(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.items.remove(index);
                tracing::debug!(id, "item deleted");
                true
            }
            None => false,
        }
    }

    fn search(&self, query: &str) -> Vec<Item> {
        let needle = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name().to_lowercase().contains(needle.as_str()))
            .cloned()
            .collect()
    }

    fn clear_purchased(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.is_purchased());
        let removed = before - self.items.len();
        tracing::debug!(removed, "purchased items cleared");
        removed
    }

    fn toggle_purchased(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                item.toggle_purchased();
                tracing::debug!(id, purchased = item.is_purchased(), "item toggled");
                true
            }
            None => false,
        }
    }

    fn reorder(&mut self, ordered_ids: &[&str]) -> bool {
        if ordered_ids.len() != self.items.len() {
            return false;
        }

        let mut positions: HashMap<&str, usize> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| (item.id(), index))
            .collect();

        // Each id must claim a distinct current position.
        let mut order = Vec::with_capacity(ordered_ids.len());
        for id in ordered_ids {
            match positions.remove(id) {
                Some(index) => order.push(index),
                None => return false,
            }
        }
        if !positions.is_empty() {
            return false;
        }

        let mut slots: Vec<Option<Item>> = std::mem::take(&mut self.items)
            .into_iter()
            .map(Some)
            .collect();
        self.items = order
            .into_iter()
            .filter_map(|index| slots[index].take())
            .collect();

        tracing::debug!(count = self.items.len(), "items reordered");
        true
    }
}
