//! Filter selector shown above the list. Keys `1`/`2`/`3` pick a tab,
//! `f` cycles.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Tabs};

use crate::core::filter::Filter;
use crate::tui::component::Component;

pub struct FilterTabs {
    pub active: Filter,
}

impl FilterTabs {
    pub fn new(active: Filter) -> Self {
        Self { active }
    }
}

impl Component for FilterTabs {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles = Filter::ALL
            .iter()
            .enumerate()
            .map(|(i, filter)| format!("{} {}", i + 1, filter.label()));

        let tabs = Tabs::new(titles)
            .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)))
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .select(self.active.index());

        frame.render_widget(tabs, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_renders_all_filters() {
        let backend = TestBackend::new(50, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tabs = FilterTabs::new(Filter::Pending);

        terminal.draw(|f| tabs.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("1 All"));
        assert!(text.contains("2 Pending"));
        assert!(text.contains("3 Purchased"));
    }
}
