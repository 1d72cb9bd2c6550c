//! # Pending Deletion
//!
//! Delete confirmation as a small state machine:
//!
//! ```text
//! Idle ──request──▶ AwaitingConfirmation ──confirm──▶ Confirming ──complete──▶ Idle
//!                          │
//!                          └──cancel──▶ Idle
//! ```
//!
//! Confirming waits [`DELETE_CONFIRM_DELAY`] before the removal is
//! committed. The wait itself is scheduled outside the core; this type only
//! hands out a [`DeletionTicket`] and accepts the matching completion once.

use std::time::Duration;

use log::debug;

use crate::core::item::{Item, ItemId};

/// Simulated round-trip before a confirmed delete is committed. Fixed.
pub const DELETE_CONFIRM_DELAY: Duration = Duration::from_millis(1000);

/// Identifies one in-flight confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletionTicket(u64);

/// The item a deletion is about, with its name kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionTarget {
    pub id: ItemId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeletionPhase {
    #[default]
    Idle,
    AwaitingConfirmation(DeletionTarget),
    Confirming {
        target: DeletionTarget,
        ticket: DeletionTicket,
    },
}

#[derive(Debug, Default)]
pub struct PendingDeletion {
    phase: DeletionPhase,
    next_ticket: u64,
}

impl PendingDeletion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &DeletionPhase {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, DeletionPhase::Idle)
    }

    /// True while the confirmation delay is running.
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, DeletionPhase::Confirming { .. })
    }

    pub fn target(&self) -> Option<&DeletionTarget> {
        match &self.phase {
            DeletionPhase::Idle => None,
            DeletionPhase::AwaitingConfirmation(target) => Some(target),
            DeletionPhase::Confirming { target, .. } => Some(target),
        }
    }

    /// Ask to delete `item`. Retargets an open dialog; ignored while confirming.
    pub fn request(&mut self, item: &Item) -> bool {
        if self.is_busy() {
            debug!("Ignoring delete request for {}: confirmation in flight", item.id());
            return false;
        }
        self.phase = DeletionPhase::AwaitingConfirmation(DeletionTarget {
            id: item.id(),
            name: item.name().to_string(),
        });
        true
    }

    /// Start the confirmation. Returns a ticket only on the first call;
    /// repeated confirms while confirming return `None`.
    pub fn confirm(&mut self) -> Option<DeletionTicket> {
        let DeletionPhase::AwaitingConfirmation(target) = &self.phase else {
            debug!("Ignoring confirm in phase {:?}", self.phase);
            return None;
        };

        let ticket = DeletionTicket(self.next_ticket);
        self.next_ticket += 1;
        self.phase = DeletionPhase::Confirming {
            target: target.clone(),
            ticket,
        };
        Some(ticket)
    }

    /// Close the dialog without deleting. Has no effect once confirming.
    pub fn cancel(&mut self) -> bool {
        if matches!(self.phase, DeletionPhase::AwaitingConfirmation(_)) {
            self.phase = DeletionPhase::Idle;
            true
        } else {
            false
        }
    }

    /// Finish the confirmation identified by `ticket`, returning the id to remove.
    pub fn complete(&mut self, ticket: DeletionTicket) -> Option<ItemId> {
        match &self.phase {
            DeletionPhase::Confirming {
                target,
                ticket: current,
            } if *current == ticket => {
                let id = target.id;
                self.phase = DeletionPhase::Idle;
                Some(id)
            }
            _ => {
                debug!("Ignoring stale deletion ticket {:?}", ticket);
                None
            }
        }
    }
}
