//! # TitleBar Component
//!
//! Top status bar: app name, pending counter and the last status message.
//!
//! Stateless. All three props come from the core `App`; the bar just
//! renders what it's given:
//!
//! 1. **Status message**: `"ShoppingList | Pending: 2 | Added Queso"`
//! 2. **Default**: `"ShoppingList | Pending: 2"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct TitleBar<'a> {
    pub pending_count: usize,
    pub status_message: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(pending_count: usize, status_message: &'a str) -> Self {
        Self {
            pending_count,
            status_message,
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "ShoppingList",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" | Pending: {}", self.pending_count)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!(" | {}", self.status_message),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
