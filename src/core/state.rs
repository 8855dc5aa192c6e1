//! # Application State
//!
//! Core session state for the card app. This module contains domain state
//! only — no TUI-specific types. Presentation state (cursors, scroll
//! offsets, drag-in-progress) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── active_screen: Screen     // which of the four screens is visible
//! ├── selection: Selection      // ordered ids of the chosen cards
//! └── status_message: String    // transient notice shown in the tab bar
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! `{active_screen, selection}` is exactly the snapshot persisted across
//! restarts; `status_message` is in-memory only.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, find_card};
use crate::core::selection::Selection;

/// The four mutually exclusive screens. All four keep their presentation
/// state alive for the whole process (scroll and cursor positions survive
/// switching away and back); only rendering is exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Needs,
    Feelings,
    Selection,
    Help,
}

pub struct App {
    pub active_screen: Screen,
    pub selection: Selection,
    pub status_message: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            active_screen: Screen::default(),
            selection: Selection::new(),
            status_message: String::new(),
        }
    }

    /// Materialize the selection as cards, in selection order.
    ///
    /// Restore-time sanitization keeps the "every selected id resolves"
    /// invariant, so the filter below is a guard that should never fire;
    /// if it does, the stale id is skipped and logged rather than faulting.
    pub fn selected_cards(&self) -> Vec<&'static Card> {
        self.selection
            .ids()
            .iter()
            .filter_map(|id| match find_card(id) {
                Ok(card) => Some(card),
                Err(err) => {
                    log::warn!("selection references {err}, skipping");
                    None
                }
            })
            .collect()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_app_defaults_to_needs_and_empty_selection() {
        let app = App::new();
        assert_eq!(app.active_screen, Screen::Needs);
        assert!(app.selection.is_empty());
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn screen_serializes_to_lowercase_names() {
        for (screen, name) in [
            (Screen::Needs, "\"needs\""),
            (Screen::Feelings, "\"feelings\""),
            (Screen::Selection, "\"selection\""),
            (Screen::Help, "\"help\""),
        ] {
            assert_eq!(serde_json::to_string(&screen).unwrap(), name);
        }
    }

    #[test]
    fn selected_cards_resolve_in_selection_order() {
        let mut app = App::new();
        app.selection.toggle("f2");
        app.selection.toggle("n1");
        let cards = app.selected_cards();
        assert_eq!(cards.iter().map(|c| c.id).collect::<Vec<_>>(), ["f2", "n1"]);
    }

    #[test]
    fn selected_cards_skips_unresolvable_ids() {
        let mut app = App::new();
        app.selection
            .replace(vec!["n1".into(), "gone99".into(), "f2".into()]);
        let cards = app.selected_cards();
        assert_eq!(cards.iter().map(|c| c.id).collect::<Vec<_>>(), ["n1", "f2"]);
    }
}
