//! # Core Application Logic
//!
//! This module contains Jot's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • store (persistence)  │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and the `Item` entity
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`store`]: JSON persistence for the item list
//! - [`config`]: TOML configuration with override hierarchy

pub mod action;
pub mod config;
pub mod state;
pub mod store;
