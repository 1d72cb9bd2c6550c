//! # Application State
//!
//! Core business state for Lista. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── list: ShoppingList          // items + active filter
//! ├── deletion: PendingDeletion   // delete dialog / confirm delay
//! ├── recent: RecentAddition      // undo notice for the last add
//! ├── undo_window: Duration       // how long the undo notice stays up
//! └── status_message: String      // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::time::Duration;

use crate::core::config::{DEFAULT_SEED_ITEMS, DEFAULT_UNDO_WINDOW_SECS, ResolvedConfig};
use crate::core::deletion::PendingDeletion;
use crate::core::item::Item;
use crate::core::list::ShoppingList;
use crate::core::recent::RecentAddition;

pub struct App {
    pub list: ShoppingList,
    pub deletion: PendingDeletion,
    pub recent: RecentAddition,
    pub undo_window: Duration,
    pub status_message: String,
}

impl App {
    pub fn new<I, S>(seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            list: ShoppingList::with_seed(seed),
            deletion: PendingDeletion::new(),
            recent: RecentAddition::new(),
            undo_window: Duration::from_secs(DEFAULT_UNDO_WINDOW_SECS),
            status_message: String::new(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(&config.seed_items);
        app.list.set_filter(config.filter);
        app.undo_window = config.undo_window;
        app
    }

    pub fn filtered_view(&self) -> Vec<&Item> {
        self.list.filtered_view()
    }

    pub fn pending_count(&self) -> usize {
        self.list.pending_count()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(DEFAULT_SEED_ITEMS)
    }
}
