//! # Recent Addition
//!
//! Tracks the item that was just added so it can be undone while the
//! notice is on screen. Only the newest addition is undoable: showing a
//! new notice replaces the old one, and the old item stays in the list.
//!
//! Each notice gets a generation number. Expiry timers carry the
//! generation they were started for, so a timer from a replaced notice
//! cannot dismiss its successor.

use log::debug;

use crate::core::item::{Item, ItemId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Notice {
    #[default]
    None,
    Shown {
        item: ItemId,
        name: String,
        generation: u64,
    },
}

#[derive(Debug, Default)]
pub struct RecentAddition {
    notice: Notice,
    generation: u64,
}

impl RecentAddition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notice(&self) -> &Notice {
        &self.notice
    }

    pub fn is_shown(&self) -> bool {
        matches!(self.notice, Notice::Shown { .. })
    }

    pub fn item(&self) -> Option<ItemId> {
        match &self.notice {
            Notice::Shown { item, .. } => Some(*item),
            Notice::None => None,
        }
    }

    /// Show a notice for `item`, replacing any current one. Returns its generation.
    pub fn show(&mut self, item: &Item) -> u64 {
        self.generation += 1;
        if let Notice::Shown { name, .. } = &self.notice {
            debug!("Notice for {:?} replaced before it was used", name);
        }
        self.notice = Notice::Shown {
            item: item.id(),
            name: item.name().to_string(),
            generation: self.generation,
        };
        self.generation
    }

    /// Take the item to remove. `None` when no notice is shown.
    pub fn undo(&mut self) -> Option<ItemId> {
        let item = self.item()?;
        self.notice = Notice::None;
        Some(item)
    }

    pub fn dismiss(&mut self) -> bool {
        let shown = self.is_shown();
        self.notice = Notice::None;
        shown
    }

    /// Dismiss on timeout, only if `generation` is still the one on screen.
    pub fn expire(&mut self, generation: u64) -> bool {
        match &self.notice {
            Notice::Shown { generation: current, .. } if *current == generation => {
                self.notice = Notice::None;
                true
            }
            _ => false,
        }
    }
}
