//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Screens
//!
//! - **List**: filter tabs, items, undo notice, delete dialog overlay.
//! - **AddItem**: a single text field. A rejected name keeps the screen
//!   open; a successful add returns to the list.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (delete spinner): draws every ~80ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events, resize, or an
//!   action arriving from a timer.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, error, info};
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::scheduler;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    DialogEvent, InputBox, InputEvent, ItemListEvent, ItemListState, dialog_event,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    List,
    AddItem,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub screen: Screen,
    pub item_list: ItemListState,
    pub input_box: InputBox,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            screen: Screen::List,
            item_list: ItemListState::new(),
            input_box: InputBox::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            SetCursorStyle::SteadyBlock // Non-blinking: continuous redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    // Restore on every exit path, including I/O errors out of the loop
    let result = run_app(&mut terminal, &config);
    ratatui::restore();
    if let Err(e) = &result {
        error!("TUI exited with error: {}", e);
    }
    result
}

fn run_app(terminal: &mut DefaultTerminal, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(config);
    let mut tui = TuiState::new();

    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from timers
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.deletion.is_busy();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = handle_event(&app, &mut tui, &event) {
                should_quit |= apply(&mut app, &mut tui, action, &tx);
            }
        }

        if should_quit {
            break;
        }

        // Timer completions (delete delay, notice expiry)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            should_quit |= apply(&mut app, &mut tui, action, &tx);
        }

        if should_quit {
            break;
        }
    }

    info!("Exiting with {} items", app.list.len());
    Ok(())
}

/// Translate a terminal event into a core action, updating presentation
/// state (screen, selection, input buffer) along the way.
fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }
    if matches!(event, TuiEvent::Resize) {
        return None;
    }

    // The delete dialog is modal
    if !app.deletion.is_idle() {
        return dialog_event(event).map(|decision| match decision {
            DialogEvent::Confirm => Action::ConfirmDelete,
            DialogEvent::Cancel => Action::CancelDelete,
        });
    }

    match tui.screen {
        Screen::List => {
            let visible = app.filtered_view();
            match tui.item_list.handle_event(event, &visible)? {
                ItemListEvent::SetPurchased { id, purchased } => {
                    Some(Action::SetPurchased { id, purchased })
                }
                ItemListEvent::RequestDelete(id) => Some(Action::RequestDelete(id)),
                ItemListEvent::OpenAddScreen => {
                    tui.screen = Screen::AddItem;
                    tui.input_box.clear();
                    None
                }
                ItemListEvent::CycleFilter => Some(Action::CycleFilter),
                ItemListEvent::SetFilter(filter) => Some(Action::SetFilter(filter)),
                ItemListEvent::Undo => Some(Action::UndoRecentAddition),
                ItemListEvent::DismissNotice => Some(Action::DismissRecentAddition),
                ItemListEvent::Quit => Some(Action::Quit),
            }
        }
        Screen::AddItem => match tui.input_box.handle_event(event)? {
            InputEvent::Submit(text) => Some(Action::AddItem(text)),
            InputEvent::Cancel => {
                tui.screen = Screen::List;
                tui.input_box.clear();
                None
            }
            InputEvent::ContentChanged => None,
        },
    }
}

/// Run `action` through the core and carry out its effect. Returns true on quit.
fn apply(app: &mut App, tui: &mut TuiState, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    let effect = update(app, action);
    match &effect {
        Effect::Quit => return true,
        Effect::Rejected(e) => {
            tui.input_box.error = Some(e.to_string());
        }
        Effect::ShowNotice { .. } => {
            tui.screen = Screen::List;
            tui.input_box.clear();
        }
        Effect::ScheduleDeletion { .. } | Effect::None => {}
    }
    scheduler::spawn_timer(&effect, tx.clone());
    false
}
