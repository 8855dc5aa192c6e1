//! # TUI Components
//!
//! All UI components for the terminal interface. Two patterns are in use:
//!
//! - **Stateless (props-based)**: created fresh each frame from the data
//!   they render — [`card::CardView`], [`TabBar`].
//! - **Stateful (persistent state + transient wrapper)**: a `*State` struct
//!   lives in `TuiState` for the whole process and a thin wrapper borrows
//!   it for rendering — [`DeckList`], [`SelectionList`], [`HelpScreen`].
//!
//! Keeping every screen's state alive (rather than rebuilding it on screen
//! switch) is what preserves cursor and scroll positions: screens are
//! always mounted, merely hidden.

pub mod card;
pub mod deck_list;
pub mod help;
pub mod selection_list;
pub mod tab_bar;

pub use deck_list::{DeckEvent, DeckList, DeckListState};
pub use help::{HelpScreen, HelpState};
pub use selection_list::{SelectionEvent, SelectionList, SelectionListState};
pub use tab_bar::TabBar;
