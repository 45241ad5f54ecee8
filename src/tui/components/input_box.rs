//! # InputBox Component
//!
//! Single-line text entry for new items.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter)
//! - Scroll horizontally when the buffer is wider than the viewport
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. `dimmed` is a prop from the
//! parent: true while keyboard focus is on the item list.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Border (2) + padding (2) consumed horizontally by the bordered block
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Offset from area edge to content (border + padding)
const CONTENT_OFFSET: u16 = 2;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    /// Text content changed (optional, if parent needs to know)
    ContentChanged,
}

/// Single-line text input.
///
/// # Props
///
/// - `dimmed`: render with muted styling while the list has focus
///
/// # State
///
/// - `buffer`: current text being typed
/// - `pos`: cursor position as byte offset in the buffer
/// - `scroll_cols`: leftmost visible display column
pub struct InputBox {
    pub buffer: String,
    pub dimmed: bool,
    pos: usize,
    scroll_cols: u16,
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            dimmed: false,
            pos: 0,
            scroll_cols: 0,
        }
    }

    /// Display column of the cursor within the full (unscrolled) buffer.
    fn cursor_col(&self) -> u16 {
        self.buffer[..self.pos].width() as u16
    }

    /// Keep the cursor inside the visible window, scrolling if needed.
    fn update_scroll(&mut self, inner_width: u16) {
        if inner_width == 0 {
            return;
        }
        let cursor = self.cursor_col();
        if cursor < self.scroll_cols {
            self.scroll_cols = cursor;
        } else if cursor >= self.scroll_cols + inner_width {
            self.scroll_cols = cursor + 1 - inner_width;
        }
    }

    /// The slice of the buffer currently visible, by display column.
    fn visible_text(&self, inner_width: u16) -> String {
        let mut col = 0u16;
        let mut out = String::new();
        for c in self.buffer.chars() {
            let w = c.width().unwrap_or(0) as u16;
            if col + w > self.scroll_cols + inner_width {
                break;
            }
            if col >= self.scroll_cols {
                out.push(c);
            }
            col += w;
        }
        out
    }

    fn insert(&mut self, text: &str) {
        self.buffer.insert_str(self.pos, text);
        self.pos += text.len();
    }
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        self.update_scroll(inner_width);

        let style = if self.dimmed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green)
        };
        let border_style = if self.dimmed {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        };

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .title(" New item ")
            .padding(Padding::horizontal(1));

        let input = Paragraph::new(self.visible_text(inner_width))
            .block(block)
            .style(style);

        frame.render_widget(input, area);

        if !self.dimmed {
            let cursor_x = area.x + CONTENT_OFFSET + (self.cursor_col() - self.scroll_cols);
            frame.set_cursor_position((cursor_x, area.y + 1));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.pos, *c);
                self.pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line field: pasted newlines become spaces
                let flat = text.replace(['\r', '\n'], " ");
                self.insert(&flat);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.pos);
                    self.buffer.drain(prev..self.pos);
                    self.pos = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.pos);
                    self.buffer.drain(self.pos..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.pos > 0 {
                    self.pos = prev_char_boundary(&self.buffer, self.pos);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.pos < self.buffer.len() {
                    self.pos = next_char_boundary(&self.buffer, self.pos);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => (self.pos != 0).then(|| {
                self.pos = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.pos != self.buffer.len()).then(|| {
                self.pos = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                if !self.buffer.trim().is_empty() {
                    let text = std::mem::take(&mut self.buffer);
                    self.pos = 0;
                    self.scroll_cols = 0;
                    Some(InputEvent::Submit(text))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
