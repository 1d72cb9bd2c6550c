//! # Delete Dialog
//!
//! Modal overlay asking to confirm a delete. While the confirmation delay
//! runs, the question is replaced by a spinner; the key hints stay visible
//! but further confirms are ignored by the core.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::deletion::DeletionPhase;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Events emitted by the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    Confirm,
    Cancel,
}

/// Map a key to a dialog decision. Everything else is swallowed by the modal.
pub fn dialog_event(event: &TuiEvent) -> Option<DialogEvent> {
    match event {
        TuiEvent::Submit | TuiEvent::InputChar('y') => Some(DialogEvent::Confirm),
        TuiEvent::Escape | TuiEvent::InputChar('n') => Some(DialogEvent::Cancel),
        _ => None,
    }
}

pub struct DeleteDialog<'a> {
    pub phase: &'a DeletionPhase,
    pub spinner_frame: usize,
}

impl<'a> DeleteDialog<'a> {
    pub fn new(phase: &'a DeletionPhase, spinner_frame: usize) -> Self {
        Self {
            phase,
            spinner_frame,
        }
    }
}

impl Component for DeleteDialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let body = match self.phase {
            DeletionPhase::Idle => return,
            DeletionPhase::AwaitingConfirmation(target) => Line::from(vec![
                Span::raw("Are you sure you want to delete "),
                Span::styled(
                    target.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("?"),
            ]),
            DeletionPhase::Confirming { .. } => Line::from(Span::styled(
                format!("{} Deleting...", SPINNER[self.spinner_frame % SPINNER.len()]),
                Style::default().fg(Color::Yellow),
            )),
        };

        let overlay = centered_rect(50, 7, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Delete item ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Confirm  Esc Cancel ").centered())
            .padding(Padding::uniform(1));

        let paragraph = Paragraph::new(body)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);

        frame.render_widget(paragraph, overlay);
    }
}

/// A rect `percent_x` wide and `height` rows tall, centered in `outer`.
fn centered_rect(percent_x: u16, height: u16, outer: Rect) -> Rect {
    let [center_v] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(outer);
    let [center] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::deletion::PendingDeletion;
    use crate::core::list::ShoppingList;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(phase: &DeletionPhase) -> String {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| DeleteDialog::new(phase, 0).render(f, f.area()))
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
    fn test_dialog_keys() {
        assert_eq!(dialog_event(&TuiEvent::Submit), Some(DialogEvent::Confirm));
        assert_eq!(dialog_event(&TuiEvent::InputChar('y')), Some(DialogEvent::Confirm));
        assert_eq!(dialog_event(&TuiEvent::Escape), Some(DialogEvent::Cancel));
        assert_eq!(dialog_event(&TuiEvent::InputChar('n')), Some(DialogEvent::Cancel));
        assert_eq!(dialog_event(&TuiEvent::InputChar('d')), None);
    }

    #[test]
    fn test_awaiting_shows_question() {
        let list = ShoppingList::with_seed(["Leche"]);
        let mut deletion = PendingDeletion::new();
        deletion.request(&list.items()[0]);

        let text = render_text(deletion.phase());
        assert!(text.contains("Leche"));
        assert!(text.contains("Enter Confirm"));
        assert!(!text.contains("Deleting"));
    }

    #[test]
    fn test_confirming_shows_spinner_and_keeps_hints() {
        let list = ShoppingList::with_seed(["Leche"]);
        let mut deletion = PendingDeletion::new();
        deletion.request(&list.items()[0]);
        deletion.confirm();

        let text = render_text(deletion.phase());
        assert!(text.contains("Deleting..."));
        assert!(text.contains("Esc Cancel"));
        assert!(!text.contains("Are you sure"));
    }

    #[test]
    fn test_idle_renders_nothing() {
        let text = render_text(&DeletionPhase::Idle);
        assert!(text.trim().is_empty());
    }
}
