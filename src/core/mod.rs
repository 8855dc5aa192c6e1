//! # Core Application Logic
//!
//! The screen/selection state machine, free of any UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal I/O here.  │
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
//! - [`state`]: the `App` struct — active screen + selection
//! - [`selection`]: the ordered, duplicate-free selection list
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`session`]: the persisted last-session snapshot
//! - [`share`]: share-text composition and the clipboard hand-off
//! - [`config`]: layered configuration (file → env → CLI)

pub mod action;
pub mod config;
pub mod selection;
pub mod session;
pub mod share;
pub mod state;
