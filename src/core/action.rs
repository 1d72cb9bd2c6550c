//! # Actions
//!
//! Everything that can happen in Lista becomes an `Action`.
//! User presses Space on an item? That's `Action::SetPurchased`.
//! The delete delay runs out? That's `Action::DeleteDelayElapsed(ticket)`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the adapter has to carry out. No side effects here. Timers and
//! terminal I/O happen elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use std::time::Duration;

use log::{debug, info};

use crate::core::deletion::{DELETE_CONFIRM_DELAY, DeletionTicket};
use crate::core::error::ValidationError;
use crate::core::filter::Filter;
use crate::core::item::ItemId;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddItem(String),
    SetPurchased { id: ItemId, purchased: bool },
    RequestDelete(ItemId),
    ConfirmDelete,
    CancelDelete,
    /// The confirmation delay for `ticket` has run out.
    DeleteDelayElapsed(DeletionTicket),
    SetFilter(Filter),
    CycleFilter,
    UndoRecentAddition,
    DismissRecentAddition,
    /// The undo notice with this generation timed out.
    NoticeExpired(u64),
    Quit,
}

/// What the adapter must do after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Input was refused; nothing changed, prompt again.
    Rejected(ValidationError),
    /// Send `DeleteDelayElapsed(ticket)` back after `delay`.
    ScheduleDeletion {
        ticket: DeletionTicket,
        delay: Duration,
    },
    /// An item was added; send `NoticeExpired(generation)` back after `duration`.
    ShowNotice { generation: u64, duration: Duration },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::AddItem(name) => match app.list.add(&name) {
            Ok(item) => {
                let generation = app.recent.show(&item);
                info!("Added {:?} ({})", item.name(), item.id());
                app.status_message = format!("Added {}", item.name());
                Effect::ShowNotice {
                    generation,
                    duration: app.undo_window,
                }
            }
            Err(e) => {
                debug!("Rejected add {:?}: {}", name, e);
                app.status_message = capitalize(&e.to_string());
                Effect::Rejected(e)
            }
        },
        Action::SetPurchased { id, purchased } => {
            app.list.toggle(id, purchased);
            Effect::None
        }
        Action::RequestDelete(id) => {
            if let Some(item) = app.list.get(id) {
                app.deletion.request(item);
            } else {
                debug!("Ignoring delete request for stale item {}", id);
            }
            Effect::None
        }
        Action::ConfirmDelete => match app.deletion.confirm() {
            Some(ticket) => {
                app.status_message = String::from("Deleting...");
                Effect::ScheduleDeletion {
                    ticket,
                    delay: DELETE_CONFIRM_DELAY,
                }
            }
            None => Effect::None,
        },
        Action::CancelDelete => {
            app.deletion.cancel();
            Effect::None
        }
        Action::DeleteDelayElapsed(ticket) => {
            if let Some(id) = app.deletion.complete(ticket)
                && let Some(item) = app.list.remove(id)
            {
                info!("Deleted {:?} ({})", item.name(), id);
                app.status_message = format!("Deleted {}", item.name());
            }
            Effect::None
        }
        Action::SetFilter(filter) => {
            app.list.set_filter(filter);
            Effect::None
        }
        Action::CycleFilter => {
            let next = app.list.filter().next();
            app.list.set_filter(next);
            Effect::None
        }
        Action::UndoRecentAddition => {
            if let Some(id) = app.recent.undo()
                && let Some(item) = app.list.remove(id)
            {
                info!("Undid add of {:?} ({})", item.name(), id);
                app.status_message = format!("Removed {}", item.name());
            }
            Effect::None
        }
        Action::DismissRecentAddition => {
            app.recent.dismiss();
            Effect::None
        }
        Action::NoticeExpired(generation) => {
            if app.recent.expire(generation) {
                debug!("Undo notice {} expired", generation);
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
