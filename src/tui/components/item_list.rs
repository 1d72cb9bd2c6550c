//! # ItemList Component
//!
//! The visible (filtered) items with a checkbox each, plus keyboard
//! selection.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ItemListState` lives in `TuiState`
//! - `ItemList` is created each frame with borrowed state and the current view
//!
//! Selection is a position in the filtered view, not an item id, so it is
//! clamped whenever the view shrinks (delete, undo, filter change).

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::filter::Filter;
use crate::core::item::{Item, ItemId};
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Events emitted by the list screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemListEvent {
    SetPurchased { id: ItemId, purchased: bool },
    RequestDelete(ItemId),
    OpenAddScreen,
    CycleFilter,
    SetFilter(Filter),
    Undo,
    DismissNotice,
    Quit,
}

/// Persistent selection state for the list.
#[derive(Default)]
pub struct ItemListState {
    pub selected: usize,
    pub list_state: ListState,
}

impl ItemListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the selection inside a view of `len` items.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    /// Handle a key event against the currently visible items.
    pub fn handle_event(&mut self, event: &TuiEvent, visible: &[&Item]) -> Option<ItemListEvent> {
        self.clamp(visible.len());
        let selected = visible.get(self.selected);

        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.clamp(visible.len());
                None
            }
            TuiEvent::CursorDown => {
                self.selected += 1;
                self.clamp(visible.len());
                None
            }
            TuiEvent::InputChar(' ') | TuiEvent::Submit => {
                selected.map(|item| ItemListEvent::SetPurchased {
                    id: item.id(),
                    purchased: !item.is_purchased(),
                })
            }
            TuiEvent::InputChar('d') | TuiEvent::Delete => {
                selected.map(|item| ItemListEvent::RequestDelete(item.id()))
            }
            TuiEvent::InputChar('a') | TuiEvent::InputChar('+') => {
                Some(ItemListEvent::OpenAddScreen)
            }
            TuiEvent::InputChar('f') => Some(ItemListEvent::CycleFilter),
            TuiEvent::InputChar('1') => Some(ItemListEvent::SetFilter(Filter::All)),
            TuiEvent::InputChar('2') => Some(ItemListEvent::SetFilter(Filter::Pending)),
            TuiEvent::InputChar('3') => Some(ItemListEvent::SetFilter(Filter::Purchased)),
            TuiEvent::InputChar('u') => Some(ItemListEvent::Undo),
            TuiEvent::InputChar('x') => Some(ItemListEvent::DismissNotice),
            TuiEvent::InputChar('q') => Some(ItemListEvent::Quit),
            _ => None,
        }
    }
}

/// Transient render wrapper for the item list.
pub struct ItemList<'a> {
    state: &'a mut ItemListState,
    items: &'a [&'a Item],
    filter: Filter,
}

impl<'a> ItemList<'a> {
    pub fn new(state: &'a mut ItemListState, items: &'a [&'a Item], filter: Filter) -> Self {
        Self {
            state,
            items,
            filter,
        }
    }
}

impl Component for ItemList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.clamp(self.items.len());

        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));

        if self.items.is_empty() {
            let message = match self.filter {
                Filter::All => "The list is empty. Press a to add an item.",
                Filter::Pending => "Nothing pending.",
                Filter::Purchased => "Nothing purchased yet.",
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        // borders + padding + "[x] "
        let name_width = area.width.saturating_sub(4 + 4) as usize;

        let rows: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let checkbox = if item.is_purchased() { "[x] " } else { "[ ] " };
                let name = truncate_to_width(item.name(), name_width);

                let mut style = if item.is_purchased() {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default().fg(Color::White)
                };
                if i == self.state.selected {
                    style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                }

                ListItem::new(Line::from(vec![
                    Span::styled(checkbox, style.remove_modifier(Modifier::CROSSED_OUT)),
                    Span::styled(name, style),
                ]))
            })
            .collect();

        let list = List::new(rows).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Cut `s` to at most `max_width` terminal columns, ending in "…" when cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
