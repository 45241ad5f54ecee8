//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop only redraws after an event arrives; between events it
//! sleeps in `poll` for up to 500ms. Every change to the list goes through
//! `update()`, which requests `Effect::Save` when the list mutated, so the
//! cycle is always: key event → action → persist → redraw.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during redraws.

mod component;
mod components;
mod event;
mod ui;

use log::{info, warn};
use std::io::stdout;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::store;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, ItemListState, ListEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Text editing in the input box. Esc switches to List.
    Input,
    /// Navigate items with arrow keys. Typing auto-switches to Input.
    List,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub item_list: ItemListState,
    pub input_box: InputBox,
    // Modal input mode
    pub input_mode: InputMode,
}

impl TuiState {
    pub fn new(confirm_delete: bool) -> Self {
        Self {
            item_list: ItemListState::new(confirm_delete),
            input_box: InputBox::new(),
            input_mode: InputMode::Input, // User expects to type immediately
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from redraws
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
            Hide // Hide cursor on exit
        );
    }
}

/// Apply an action, run its effect, and report whether the app should quit.
fn apply(app: &mut App, action: Action, config: &ResolvedConfig) -> bool {
    match update(app, action) {
        Effect::Save => {
            if !store::persist(&app.items, &config.data_dir) {
                app.status_message = String::from("Save failed (see jot.log)");
            }
            false
        }
        Effect::Quit => true,
        Effect::None => false,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = match store::load_items(&config.data_dir) {
        Ok(items) => {
            info!("Loaded {} item(s) from {}", items.len(), config.data_dir.display());
            App::new(items)
        }
        Err(e) => {
            warn!("Could not read saved list from {}: {}", config.data_dir.display(), e);
            let mut app = App::new(Vec::new());
            app.status_message = String::from("Saved list unreadable, starting empty (see jot.log)");
            app
        }
    };
    let mut tui = TuiState::new(config.confirm_delete);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync component props with App/TUI state
        tui.input_box.dimmed = matches!(tui.input_mode, InputMode::List);
        tui.item_list.clamp_selection(app.items.len());

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                if apply(&mut app, Action::Quit, &config) {
                    should_quit = true;
                }
                continue;
            }

            // Modal event dispatch
            match tui.input_mode {
                InputMode::Input => {
                    // Esc → switch to List mode
                    if matches!(event, TuiEvent::Escape) {
                        tui.input_mode = InputMode::List;
                        continue;
                    }

                    // InputBox handles everything else
                    if let Some(input_event) = tui.input_box.handle_event(&event) {
                        match input_event {
                            InputEvent::Submit(text) => {
                                if apply(&mut app, Action::Add(text), &config) {
                                    should_quit = true;
                                }
                            }
                            InputEvent::ContentChanged => {}
                        }
                    }
                }
                InputMode::List => {
                    // Paste returns to the input box with the pasted text
                    if let TuiEvent::Paste(_) = event {
                        tui.input_mode = InputMode::Input;
                        tui.input_box.handle_event(&event);
                        continue;
                    }

                    if let Some(list_event) =
                        tui.item_list.handle_event(&event, app.items.len())
                    {
                        match list_event {
                            ListEvent::Toggle(index) => {
                                if apply(&mut app, Action::Toggle(index), &config) {
                                    should_quit = true;
                                }
                            }
                            ListEvent::Delete(index) => {
                                if apply(&mut app, Action::Delete(index), &config) {
                                    should_quit = true;
                                }
                                tui.item_list.clamp_selection(app.items.len());
                            }
                            ListEvent::Quit => {
                                if apply(&mut app, Action::Quit, &config) {
                                    should_quit = true;
                                }
                            }
                            ListEvent::StartInput(forwarded) => {
                                tui.input_mode = InputMode::Input;
                                if let Some(c) = forwarded {
                                    tui.input_box.handle_event(&TuiEvent::InputChar(c));
                                }
                            }
                        }
                    }
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}
