use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::item::Item;

/// Which items the list view shows. Never changes the list itself.
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    /// Every item, in insertion order (default)
    #[serde(rename = "all")]
    #[default]
    All,
    /// Items not yet purchased
    #[serde(rename = "pending")]
    Pending,
    /// Items already purchased
    #[serde(rename = "purchased")]
    Purchased,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Pending, Filter::Purchased];

    pub fn matches(self, item: &Item) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => !item.is_purchased(),
            Filter::Purchased => item.is_purchased(),
        }
    }

    /// Cycles to the next filter (wraps around)
    pub fn next(self) -> Filter {
        match self {
            Filter::All => Filter::Pending,
            Filter::Pending => Filter::Purchased,
            Filter::Purchased => Filter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Pending => "Pending",
            Filter::Purchased => "Purchased",
        }
    }

    /// Position in [`Filter::ALL`], used for tab selection.
    pub fn index(self) -> usize {
        match self {
            Filter::All => 0,
            Filter::Pending => 1,
            Filter::Purchased => 2,
        }
    }
}
