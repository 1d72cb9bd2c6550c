//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: app name, pending counter, status message
//! - `FilterTabs`: All / Pending / Purchased selector
//! - `DeleteDialog`: modal delete confirmation with busy spinner
//! - `UndoBar`: "Added X" notice with undo and dismiss hints
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `InputBox`: text field on the add-item screen
//! - `ItemList`: selectable list of the filtered items
//!
//! Each component file holds its state type, event type, rendering,
//! event handling and tests.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top status bar)
//! ├── filter_tabs.rs    (Filter selector)
//! ├── item_list.rs      (Item list + selection)
//! ├── input_box.rs      (Add-item text field)
//! ├── delete_dialog.rs  (Confirm overlay)
//! └── undo_bar.rs       (Undo notice)
//! ```

pub mod delete_dialog;
pub mod filter_tabs;
pub mod input_box;
pub mod item_list;
mod title_bar;
pub mod undo_bar;

pub use delete_dialog::{DeleteDialog, DialogEvent, dialog_event};
pub use filter_tabs::FilterTabs;
pub use input_box::{InputBox, InputEvent};
pub use item_list::{ItemList, ItemListEvent, ItemListState};
pub use title_bar::TitleBar;
pub use undo_bar::UndoBar;
