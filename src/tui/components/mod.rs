//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Components follow two patterns:
//!
//! - **Stateful, event-driven**: `InputBox` owns its text buffer and cursor;
//!   `ItemListState` owns the selection and delete confirmation. Both
//!   translate low-level `TuiEvent`s into high-level events for the shell.
//! - **Transient render wrappers**: `ItemList` is built each frame from
//!   borrowed persistent state plus the current items as props.
//!
//! Each component file is self-contained: state types, event types,
//! rendering, event handling, and tests live together.

pub mod input_box;
pub mod item_list;
pub use input_box::{InputBox, InputEvent};
pub use item_list::{ItemList, ItemListState, ListEvent};
