use std::sync::mpsc;
use std::time::Duration;

use lista::core::action::{Action, Effect, update};
use lista::core::deletion::DeletionPhase;
use lista::core::item::ItemId;
use lista::core::state::App;
use lista::scheduler::spawn_timer;
use tokio::time::Instant;

// ============================================================================
// Helper Functions
// ============================================================================

fn seeded_app() -> App {
    App::new(["Leche", "Pan", "Huevos"])
}

fn id_of(app: &App, name: &str) -> ItemId {
    app.list
        .items()
        .iter()
        .find(|item| item.name() == name)
        .map(|item| item.id())
        .expect("item present")
}

fn names(app: &App) -> Vec<&str> {
    app.list.items().iter().map(|item| item.name()).collect()
}

/// Apply an action the way the TUI loop does: update, then start any timer.
fn dispatch(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> Effect {
    let effect = update(app, action);
    spawn_timer(&effect, tx.clone());
    effect
}

/// Feed every timer action that has arrived back into the app.
fn drain(app: &mut App, rx: &mpsc::Receiver<Action>, tx: &mpsc::Sender<Action>) -> usize {
    let mut count = 0;
    while let Ok(action) = rx.try_recv() {
        dispatch(app, action, tx);
        count += 1;
    }
    count
}

/// Let spawned timer tasks run after the paused clock moved.
async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

// ============================================================================
// Delete confirmation delay
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_confirmed_delete_commits_after_one_second() {
    let mut app = seeded_app();
    let (tx, rx) = mpsc::channel();

    let leche = id_of(&app, "Leche");
    dispatch(&mut app, Action::RequestDelete(leche), &tx);
    dispatch(&mut app, Action::ConfirmDelete, &tx);

    tokio::time::advance(Duration::from_millis(999)).await;
    settle().await;
    assert_eq!(drain(&mut app, &rx, &tx), 0);
    assert_eq!(names(&app), ["Leche", "Pan", "Huevos"]);
    assert!(app.deletion.is_busy());

    tokio::time::advance(Duration::from_millis(2)).await;
    settle().await;
    assert_eq!(drain(&mut app, &rx, &tx), 1);
    assert_eq!(names(&app), ["Pan", "Huevos"]);
    assert_eq!(app.deletion.phase(), &DeletionPhase::Idle);
    assert_eq!(app.pending_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_double_confirm_removes_once() {
    let mut app = seeded_app();
    let (tx, rx) = mpsc::channel();

    let leche = id_of(&app, "Leche");
    dispatch(&mut app, Action::RequestDelete(leche), &tx);
    let start = Instant::now();
    let first = update(&mut app, Action::ConfirmDelete);
    let second = update(&mut app, Action::ConfirmDelete);
    assert_eq!(second, Effect::None);

    let handle = spawn_timer(&first, tx.clone()).expect("deletion timer");
    assert!(spawn_timer(&second, tx.clone()).is_none());
    handle.await.unwrap();

    assert!(start.elapsed() >= Duration::from_millis(1000));
    assert_eq!(drain(&mut app, &rx, &tx), 1);
    assert_eq!(names(&app), ["Pan", "Huevos"]);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_schedules_nothing() {
    let mut app = seeded_app();
    let (tx, rx) = mpsc::channel();

    let pan = id_of(&app, "Pan");
    dispatch(&mut app, Action::RequestDelete(pan), &tx);
    assert_eq!(dispatch(&mut app, Action::CancelDelete, &tx), Effect::None);

    tokio::time::advance(Duration::from_secs(5)).await;
    settle().await;
    assert_eq!(drain(&mut app, &rx, &tx), 0);
    assert_eq!(names(&app), ["Leche", "Pan", "Huevos"]);
    assert!(app.deletion.is_idle());
}

// ============================================================================
// Undo notice expiry
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_notice_expires_after_undo_window() {
    let mut app = seeded_app();
    app.undo_window = Duration::from_secs(4);
    let (tx, rx) = mpsc::channel();

    dispatch(&mut app, Action::AddItem("Queso".to_string()), &tx);
    assert!(app.recent.is_shown());

    tokio::time::advance(Duration::from_millis(4001)).await;
    settle().await;
    drain(&mut app, &rx, &tx);

    assert!(!app.recent.is_shown());
    assert_eq!(names(&app), ["Leche", "Pan", "Huevos", "Queso"]);
}

#[tokio::test(start_paused = true)]
async fn test_new_add_restarts_notice() {
    let mut app = seeded_app();
    app.undo_window = Duration::from_secs(4);
    let (tx, rx) = mpsc::channel();

    dispatch(&mut app, Action::AddItem("Queso".to_string()), &tx);
    tokio::time::advance(Duration::from_secs(3)).await;
    dispatch(&mut app, Action::AddItem("Vino".to_string()), &tx);

    // First notice's timer fires here but must not hide the second one
    tokio::time::advance(Duration::from_millis(1001)).await;
    settle().await;
    drain(&mut app, &rx, &tx);
    assert_eq!(app.recent.item(), Some(id_of(&app, "Vino")));

    dispatch(&mut app, Action::UndoRecentAddition, &tx);
    assert_eq!(names(&app), ["Leche", "Pan", "Huevos", "Queso"]);

    // Second timer fires after the undo: nothing left to dismiss
    tokio::time::advance(Duration::from_secs(3)).await;
    settle().await;
    drain(&mut app, &rx, &tx);
    assert!(!app.recent.is_shown());
    assert_eq!(app.list.len(), 4);
}
