//! # Application State
//!
//! Core business state for Jot. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── items: Vec<Item>              // the checklist, insertion order
//! └── status_message: String        // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use serde::{Deserialize, Serialize};

/// A single checklist entry. Items carry no stable id; an item is identified
/// by its current position in `App::items`, so removing one shifts every
/// index after it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Item {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}

pub struct App {
    pub items: Vec<Item>,
    pub status_message: String,
}

impl App {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            status_message: String::from("Welcome to Jot!"),
        }
    }

    /// Number of items not yet completed.
    pub fn open_count(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{item, test_app};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Jot!");
        assert!(app.items.is_empty());
        assert_eq!(app.open_count(), 0);
    }

    #[test]
    fn test_open_count_skips_completed() {
        let app = App::new(vec![
            item("buy milk", false),
            item("water plants", true),
            item("call back", false),
        ]);
        assert_eq!(app.open_count(), 2);
    }

    #[test]
    fn test_item_completed_defaults_false_in_stored_json() {
        // Documents written before the `completed` field existed still load.
        let item: Item = serde_json::from_str(r#"{"text":"legacy"}"#).unwrap();
        assert!(!item.completed);
        assert_eq!(item.text, "legacy");
    }
}
