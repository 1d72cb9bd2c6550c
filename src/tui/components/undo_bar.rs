//! Bottom notice shown after an add, offering undo until it expires or is
//! dismissed.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

pub struct UndoBar<'a> {
    pub name: &'a str,
}

impl<'a> UndoBar<'a> {
    pub fn new(name: &'a str) -> Self {
        Self { name }
    }
}

impl Component for UndoBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let line = Line::from(vec![
            Span::raw(format!("Added {}", self.name)),
            Span::raw("   "),
            Span::styled("u", key),
            Span::raw(" Undo  "),
            Span::styled("x", key),
            Span::raw(" Dismiss"),
        ]);

        let notice = Paragraph::new(line).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(notice, area);
    }
}
