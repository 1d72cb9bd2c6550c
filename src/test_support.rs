//! Shared test helpers.

use crate::core::item::ItemId;
use crate::core::state::App;

/// An app seeded with Leche, Pan and Huevos, all pending.
pub fn test_app() -> App {
    App::new(["Leche", "Pan", "Huevos"])
}

/// Id of the first item called `name`. Panics if there is none.
pub fn item_id(app: &App, name: &str) -> ItemId {
    app.list
        .items()
        .iter()
        .find(|item| item.name() == name)
        .map(|item| item.id())
        .unwrap_or_else(|| panic!("no item named {name}"))
}

/// Names of every item, in list order, ignoring the filter.
pub fn names(app: &App) -> Vec<String> {
    app.list
        .items()
        .iter()
        .map(|item| item.name().to_string())
        .collect()
}
