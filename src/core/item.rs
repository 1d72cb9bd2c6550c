//! # Items
//!
//! A shopping list entry: a name that never changes and a purchased flag
//! that does. Identity comes from [`ItemId`], assigned once by the list
//! that created the item, so two "Pan" entries are still two items.

use std::fmt;

/// Synthetic identity of an item. Unique within the list that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
    purchased: bool,
}

impl Item {
    /// Only the list creates items, after it has validated the name.
    pub(crate) fn new(id: ItemId, name: String) -> Self {
        Self {
            id,
            name,
            purchased: false,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_purchased(&self) -> bool {
        self.purchased
    }

    pub(crate) fn set_purchased(&mut self, purchased: bool) {
        self.purchased = purchased;
    }
}
