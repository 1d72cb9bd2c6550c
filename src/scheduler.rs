//! # Scheduler
//!
//! Runs the timed effects returned by `update()`. Each timer is a one-shot
//! tokio task that sleeps and then sends a single `Action` back to the loop
//! that owns the `App`. Timers never touch state themselves, so the
//! commit is applied in order with everything else the loop processes.
//!
//! Timers are not cancelled. A late completion is harmless: the core
//! ignores tickets and generations it no longer recognises.
//!
//! A delay too large to fit the clock (e.g. a huge configured undo window)
//! schedules nothing; the action simply never fires.

use std::sync::mpsc;
use std::time::Duration;

use log::{debug, warn};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::core::action::{Action, Effect};

/// Spawn the timer for `effect`, if it has one.
///
/// Must be called from within a tokio runtime.
pub fn spawn_timer(effect: &Effect, tx: mpsc::Sender<Action>) -> Option<JoinHandle<()>> {
    match effect {
        Effect::ScheduleDeletion { ticket, delay } => {
            spawn_after(*delay, Action::DeleteDelayElapsed(*ticket), tx)
        }
        Effect::ShowNotice {
            generation,
            duration,
        } => spawn_after(*duration, Action::NoticeExpired(*generation), tx),
        Effect::None | Effect::Quit | Effect::Rejected(_) => None,
    }
}

fn spawn_after(
    delay: Duration,
    action: Action,
    tx: mpsc::Sender<Action>,
) -> Option<JoinHandle<()>> {
    // Deadline is fixed now, not when the task first gets polled
    let Some(deadline) = Instant::now().checked_add(delay) else {
        warn!("Not scheduling {:?}: delay {:?} is out of range", action, delay);
        return None;
    };
    debug!("Scheduling {:?} in {:?}", action, delay);
    Some(tokio::spawn(async move {
        tokio::time::sleep_until(deadline).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver timer action: receiver dropped");
        }
    }))
}
