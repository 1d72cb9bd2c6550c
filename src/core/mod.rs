//! # Core Application Logic
//!
//! This module contains Lista's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌──────────────────────────────┐
//!                    │            CORE              │
//!                    │  (this module)               │
//!                    │                              │
//!                    │  • ShoppingList (items)      │
//!                    │  • PendingDeletion / Recent  │
//!                    │  • Action (events)           │
//!                    │  • update() (reducer)        │
//!                    │                              │
//!                    │  No I/O. No UI. Pure.        │
//!                    └──────────────┬───────────────┘
//!                                   │ Effect
//!                     ┌─────────────┴─────────────┐
//!                     ▼                           ▼
//!              ┌────────────┐              ┌────────────┐
//!              │    TUI     │              │ Scheduler  │
//!              │  Adapter   │◀── Action ───│  (timers)  │
//!              │ (ratatui)  │              │  (tokio)   │
//!              └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`]: `Item` and its synthetic `ItemId`
//! - [`list`]: `ShoppingList`, the ordered collection with filtering
//! - [`deletion`]: delete confirmation state machine
//! - [`recent`]: undo notice for the last added item
//! - [`state`]: The `App` struct: all application state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: settings file, env vars and CLI resolution

pub mod action;
pub mod config;
pub mod deletion;
pub mod error;
pub mod filter;
pub mod item;
pub mod list;
pub mod recent;
pub mod state;
