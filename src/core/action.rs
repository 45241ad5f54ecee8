//! # Actions
//!
//! Everything that can happen in Jot becomes an `Action`.
//! User presses Enter in the input box? That's `Action::Add`.
//! Space on a selected item? That's `Action::Toggle(index)`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state and returns the `Effect` the shell should run.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: drive a sequence of actions through
//! `update()` and assert on the resulting item list.

use crate::core::state::{App, Item};

/// Longest slice of item text quoted in a status message.
const STATUS_EXCERPT_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add a new item with the given text. Trimmed before use; empty or
    /// whitespace-only input is ignored.
    Add(String),
    /// Flip the completed flag of the item at this index.
    Toggle(usize),
    /// Remove the item at this index. Later indices shift down by one.
    Delete(usize),
    Quit,
}

/// Side effect requested by the reducer, executed by the TUI shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Persist the current item list.
    Save,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Add(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Effect::None;
            }
            app.status_message = format!("Added \"{}\"", excerpt(text));
            app.items.push(Item::new(text));
            Effect::Save
        }
        Action::Toggle(index) => match app.items.get_mut(index) {
            Some(item) => {
                item.completed = !item.completed;
                app.status_message = if item.completed {
                    format!("Done: \"{}\"", excerpt(&item.text))
                } else {
                    format!("Reopened: \"{}\"", excerpt(&item.text))
                };
                Effect::Save
            }
            None => Effect::None,
        },
        Action::Delete(index) => {
            if index >= app.items.len() {
                return Effect::None;
            }
            let removed = app.items.remove(index);
            app.status_message = format!("Deleted \"{}\"", excerpt(&removed.text));
            Effect::Save
        }
        Action::Quit => Effect::Quit,
    }
}

/// Shorten item text for the status bar: first line only, truncated on a
/// char boundary with a trailing ellipsis.
fn excerpt(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or("").trim();
    if first_line.chars().count() <= STATUS_EXCERPT_LEN {
        return first_line.to_string();
    }
    let cut: String = first_line.chars().take(STATUS_EXCERPT_LEN - 3).collect();
    format!("{}...", cut)
}
