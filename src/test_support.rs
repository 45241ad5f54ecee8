//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::{App, Item};

/// Build an item with an explicit completed flag.
pub fn item(text: &str, completed: bool) -> Item {
    Item {
        text: text.to_string(),
        completed,
    }
}

/// Creates a test App with an empty list.
pub fn test_app() -> App {
    App::new(Vec::new())
}
