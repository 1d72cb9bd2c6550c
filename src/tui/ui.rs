use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::recent::Notice;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    DeleteDialog, FilterTabs, ItemList, TitleBar, UndoBar,
};
use crate::tui::{Screen, TuiState};

const LIST_HELP: &str = " ↑↓ Move  Space Toggle  a Add  d Del  f/1-3 Filter  u Undo  x Dismiss  q Quit";
const ADD_HELP: &str = " Enter Add  Esc Back";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    match tui.screen {
        Screen::List => draw_list_screen(frame, app, tui, spinner_frame),
        Screen::AddItem => draw_add_screen(frame, app, tui),
    }
}

fn draw_list_screen(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let notice_height = if app.recent.is_shown() { 3 } else { 0 };
    let layout = Layout::vertical([Length(1), Length(3), Min(0), Length(notice_height), Length(1)]);
    let [title_area, tabs_area, list_area, notice_area, help_area] = layout.areas(frame.area());

    TitleBar::new(app.pending_count(), &app.status_message).render(frame, title_area);
    FilterTabs::new(app.list.filter()).render(frame, tabs_area);

    let visible = app.filtered_view();
    ItemList::new(&mut tui.item_list, &visible, app.list.filter()).render(frame, list_area);

    if let Notice::Shown { name, .. } = app.recent.notice() {
        UndoBar::new(name).render(frame, notice_area);
    }

    draw_help(frame, help_area, LIST_HELP);

    if !app.deletion.is_idle() {
        DeleteDialog::new(app.deletion.phase(), spinner_frame).render(frame, frame.area());
    }
}

fn draw_add_screen(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let layout = Layout::vertical([Length(1), Length(1), Length(3), Length(1), Min(0)]);
    let [title_area, heading_area, input_area, help_area, _] = layout.areas(frame.area());

    TitleBar::new(app.pending_count(), &app.status_message).render(frame, title_area);
    frame.render_widget(
        Line::styled(" Add item", Style::default().fg(Color::Cyan)),
        heading_area,
    );
    tui.input_box.render(frame, input_area);
    draw_help(frame, help_area, ADD_HELP);
}

fn draw_help(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(
        Line::styled(text, Style::default().fg(Color::DarkGray)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{item_id, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                draw_ui(f, app, tui, 0);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draw_list_screen() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = render_text(&app, &mut tui);

        assert!(text.contains("Pending: 3"));
        assert!(text.contains("Leche"));
        assert!(text.contains("Huevos"));
        assert!(!text.contains("Added"));
    }

    #[test]
    fn test_list_help_shows_every_key() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = render_text(&app, &mut tui);

        for hint in ["Space Toggle", "a Add", "d Del", "f/1-3 Filter", "u Undo", "x Dismiss", "q Quit"] {
            assert!(text.contains(hint), "missing {hint:?}");
        }
    }

    #[test]
    fn test_draw_shows_undo_notice_after_add() {
        let mut app = test_app();
        update(&mut app, Action::AddItem("Queso".to_string()));
        let mut tui = TuiState::new();

        let text = render_text(&app, &mut tui);
        assert!(text.contains("Pending: 4"));
        assert!(text.contains("Added Queso"));
    }

    #[test]
    fn test_draw_shows_dialog_while_deleting() {
        let mut app = test_app();
        let pan = item_id(&app, "Pan");
        update(&mut app, Action::RequestDelete(pan));
        update(&mut app, Action::ConfirmDelete);
        let mut tui = TuiState::new();

        let text = render_text(&app, &mut tui);
        assert!(text.contains("Delete item"));
        assert!(text.contains("Deleting..."));
    }

    #[test]
    fn test_draw_add_screen() {
        let app = test_app();
        let mut tui = TuiState::new();
        tui.screen = Screen::AddItem;

        let text = render_text(&app, &mut tui);
        assert!(text.contains("Add item"));
        assert!(text.contains("Enter Add"));
        assert!(!text.contains("Leche"));
    }
}
