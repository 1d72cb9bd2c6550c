//! # Shopping List
//!
//! The ordered item collection and everything derived from it.
//!
//! ```text
//! ShoppingList
//! ├── items: Vec<Item>     // insertion order, duplicates allowed
//! ├── filter: Filter       // view only, never reorders items
//! └── next_id: u64         // source of ItemIds
//! ```
//!
//! Operations addressed by [`ItemId`] tolerate ids that are no longer
//! present. The UI can be a frame behind the engine, so a stale id is a
//! no-op rather than an error.

use log::{debug, warn};

use crate::core::error::ValidationError;
use crate::core::filter::Filter;
use crate::core::item::{Item, ItemId};

#[derive(Debug, Default)]
pub struct ShoppingList {
    items: Vec<Item>,
    filter: Filter,
    next_id: u64,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list pre-filled with `names`, in order. Blank names are skipped.
    pub fn with_seed<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for name in names {
            if let Err(e) = list.add(name.as_ref()) {
                warn!("Skipping seed item {:?}: {}", name.as_ref(), e);
            }
        }
        list
    }

    /// Append a new, unpurchased item. The name is stored trimmed.
    pub fn add(&mut self, name: &str) -> Result<Item, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let id = ItemId::new(self.next_id);
        self.next_id += 1;

        let item = Item::new(id, name.to_string());
        self.items.push(item.clone());
        debug!("Added item {} {:?} ({} total)", id, name, self.items.len());
        Ok(item)
    }

    /// Set the purchased flag in place. Returns `false` if `id` is not in the list.
    pub fn toggle(&mut self, id: ItemId, purchased: bool) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                item.set_purchased(purchased);
                true
            }
            None => {
                debug!("Ignoring toggle of stale item {}", id);
                false
            }
        }
    }

    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let Some(index) = self.items.iter().position(|item| item.id() == id) else {
            debug!("Ignoring removal of stale item {}", id);
            return None;
        };
        Some(self.items.remove(index))
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Items matching the current filter, in list order.
    pub fn filtered_view(&self) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item))
            .collect()
    }

    /// Unpurchased items across the whole list, whatever the filter.
    pub fn pending_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_purchased()).count()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
