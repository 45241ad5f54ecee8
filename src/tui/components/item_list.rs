//! # ItemList Component
//!
//! The checklist body: one row per item, checkbox glyph first, completed
//! items dimmed and struck through.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ItemListState` lives in `TuiState`
//! - `ItemList` is created each frame with borrowed state and the current
//!   items as props
//!
//! Deleting is guarded by a double-press of `d` (configurable); the pending
//! confirmation resets on any other key.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::state::Item;
use crate::tui::event::TuiEvent;

/// Columns consumed by borders, padding, and the checkbox prefix.
const CHROME_COLS: u16 = 8;

/// Persistent selection state for the item list.
pub struct ItemListState {
    pub selected: usize,
    pub confirm_delete: bool,
    /// When false (config `confirm_delete = false`), a single `d` deletes.
    pub confirm_required: bool,
    pub list_state: ListState,
}

impl ItemListState {
    pub fn new(confirm_required: bool) -> Self {
        Self {
            selected: 0,
            confirm_delete: false,
            confirm_required,
            list_state: ListState::default(),
        }
    }

    /// Handle a key event, returning a ListEvent if the shell should act.
    pub fn handle_event(&mut self, event: &TuiEvent, len: usize) -> Option<ListEvent> {
        // Reset delete confirmation on any non-delete key
        let is_delete_key = matches!(event, TuiEvent::InputChar('d'));
        if !is_delete_key {
            self.confirm_delete = false;
        }

        match event {
            TuiEvent::CursorUp => {
                if len > 0 {
                    self.selected = self.selected.saturating_sub(1);
                }
                None
            }
            TuiEvent::CursorDown => {
                if len > 0 {
                    self.selected = (self.selected + 1).min(len - 1);
                }
                None
            }
            TuiEvent::InputChar(' ') => (len > 0).then(|| ListEvent::Toggle(self.selected)),
            TuiEvent::InputChar('d') => {
                if len == 0 {
                    return None;
                }
                if self.confirm_delete || !self.confirm_required {
                    self.confirm_delete = false;
                    Some(ListEvent::Delete(self.selected))
                } else {
                    self.confirm_delete = true;
                    None
                }
            }
            TuiEvent::InputChar('q') => Some(ListEvent::Quit),
            TuiEvent::Submit => Some(ListEvent::StartInput(None)),
            TuiEvent::InputChar(c) => Some(ListEvent::StartInput(Some(*c))),
            _ => None,
        }
    }

    /// Keep the selection inside the current item count (the list shrinks
    /// on delete).
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(len - 1);
        }
    }
}

/// Events emitted by the item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    Toggle(usize),
    Delete(usize),
    Quit,
    /// Hand focus back to the input box, optionally forwarding the typed
    /// character that triggered the switch.
    StartInput(Option<char>),
}

/// Transient render wrapper for the checklist.
pub struct ItemList<'a> {
    items: &'a [Item],
    state: &'a mut ItemListState,
    focused: bool,
}

impl<'a> ItemList<'a> {
    pub fn new(items: &'a [Item], state: &'a mut ItemListState, focused: bool) -> Self {
        Self {
            items,
            state,
            focused,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let help_text = if self.state.confirm_delete {
            " Press d again to confirm delete "
        } else if self.focused {
            " ↑↓ Move  Space Toggle  d Delete  Enter New  q Quit "
        } else {
            " Enter Add  Esc Navigate "
        };

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Items ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));

        if self.items.is_empty() {
            let empty = Paragraph::new("No items yet. Start typing to add one.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let text_width = area.width.saturating_sub(CHROME_COLS) as usize;
        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| {
                let (mark, text_style) = if item.completed {
                    (
                        "[x] ",
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT),
                    )
                } else {
                    ("[ ] ", Style::default())
                };
                ListItem::new(Line::from(vec![
                    Span::styled(mark, Style::default().fg(Color::Cyan)),
                    Span::styled(truncate_to_width(&item.text, text_width), text_style),
                ]))
            })
            .collect();

        self.state
            .list_state
            .select(self.focused.then_some(self.state.selected));

        let list = List::new(rows)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate `text` to at most `max_cols` display columns, appending "..."
/// when anything was cut. Wide glyphs count as two columns.
fn truncate_to_width(text: &str, max_cols: usize) -> String {
    if text.width() <= max_cols {
        return text.to_string();
    }
    let keep = max_cols.saturating_sub(3);
    let mut cols = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if cols + w > keep {
            break;
        }
        out.push(c);
        cols += w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::item;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn state() -> ItemListState {
        ItemListState::new(true)
    }

    #[test]
    fn test_navigation_clamps_to_bounds() {
        let mut s = state();
        assert_eq!(s.handle_event(&TuiEvent::CursorUp, 3), None);
        assert_eq!(s.selected, 0);
        s.handle_event(&TuiEvent::CursorDown, 3);
        s.handle_event(&TuiEvent::CursorDown, 3);
        s.handle_event(&TuiEvent::CursorDown, 3);
        assert_eq!(s.selected, 2);
    }

    #[test]
    fn test_space_toggles_selected() {
        let mut s = state();
        s.selected = 1;
        assert_eq!(
            s.handle_event(&TuiEvent::InputChar(' '), 3),
            Some(ListEvent::Toggle(1))
        );
    }

    #[test]
    fn test_space_on_empty_list_is_inert() {
        let mut s = state();
        assert_eq!(s.handle_event(&TuiEvent::InputChar(' '), 0), None);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut s = state();
        assert_eq!(s.handle_event(&TuiEvent::InputChar('d'), 2), None);
        assert!(s.confirm_delete);
        assert_eq!(
            s.handle_event(&TuiEvent::InputChar('d'), 2),
            Some(ListEvent::Delete(0))
        );
        assert!(!s.confirm_delete);
    }

    #[test]
    fn test_any_other_key_cancels_confirmation() {
        let mut s = state();
        s.handle_event(&TuiEvent::InputChar('d'), 2);
        assert!(s.confirm_delete);
        s.handle_event(&TuiEvent::CursorDown, 2);
        assert!(!s.confirm_delete);
        // The next d starts a fresh confirmation, not a delete
        assert_eq!(s.handle_event(&TuiEvent::InputChar('d'), 2), None);
    }

    #[test]
    fn test_single_press_delete_when_confirmation_disabled() {
        let mut s = ItemListState::new(false);
        s.selected = 1;
        assert_eq!(
            s.handle_event(&TuiEvent::InputChar('d'), 2),
            Some(ListEvent::Delete(1))
        );
    }

    #[test]
    fn test_q_quits_and_other_chars_return_to_input() {
        let mut s = state();
        assert_eq!(s.handle_event(&TuiEvent::InputChar('q'), 1), Some(ListEvent::Quit));
        assert_eq!(
            s.handle_event(&TuiEvent::InputChar('x'), 1),
            Some(ListEvent::StartInput(Some('x')))
        );
        assert_eq!(
            s.handle_event(&TuiEvent::Submit, 1),
            Some(ListEvent::StartInput(None))
        );
    }

    #[test]
    fn test_clamp_selection_after_shrink() {
        let mut s = state();
        s.selected = 4;
        s.clamp_selection(2);
        assert_eq!(s.selected, 1);
        s.clamp_selection(0);
        assert_eq!(s.selected, 0);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 20), "short");
        assert_eq!(truncate_to_width("a very long item text", 10), "a very ...");
        // Wide glyphs count double
        assert_eq!(truncate_to_width("日本語テキスト", 9), "日本語...");
    }

    fn render_to_text(items: &[Item], s: &mut ItemListState, focused: bool) -> String {
        let backend = TestBackend::new(40, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ItemList::new(items, s, focused).render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_render_empty_shows_placeholder() {
        let mut s = state();
        let text = render_to_text(&[], &mut s, true);
        assert!(text.contains("No items yet"));
    }

    #[test]
    fn test_render_shows_checkbox_marks() {
        let mut s = state();
        let items = vec![item("open task", false), item("done task", true)];
        let text = render_to_text(&items, &mut s, true);
        assert!(text.contains("[ ] open task"));
        assert!(text.contains("[x] done task"));
    }
}
