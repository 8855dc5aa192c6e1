//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`. User toggles
//! a card? That's `Action::ToggleCard(card)`. The terminal loses focus?
//! That's `Action::LostFocus`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the side work to perform.
//! No I/O happens here — persistence and the clipboard are driven by the
//! TUI loop off the returned effect.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes the whole screen/selection state machine testable as plain
//! function calls: `assert_eq!(update(&mut app, action), expected_effect)`.

use log::{info, warn};

use crate::cards::Card;
use crate::core::selection::Selection;
use crate::core::session::SessionSnapshot;
use crate::core::share::compose_share_text;
use crate::core::state::{App, Screen};

#[derive(Debug)]
pub enum Action {
    /// Tap on a navigation tab. The active tab is disabled, so switching
    /// to the already-active screen changes nothing.
    SwitchScreen(Screen),
    /// Tap on a card in any list: select if absent, deselect if present.
    ToggleCard(&'static Card),
    /// A drag on the selection screen finished (`Some(new_order)`) or was
    /// cancelled (`None`, a no-op).
    ReorderSelection(Option<Vec<&'static Card>>),
    /// The trash control.
    ClearSelection,
    /// The share control.
    Share,
    /// The terminal reported focus loss — the background/inactive
    /// lifecycle signal that triggers persistence.
    LostFocus,
    /// The startup read of the persisted snapshot resolved.
    SessionRestored(SessionSnapshot),
    Quit,
}

/// Side work requested by the reducer, performed by the TUI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Write the current `{active_screen, selection}` snapshot
    /// (fire-and-forget, result ignored).
    PersistSession,
    /// Hand the composed text to the clipboard.
    Share(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SwitchScreen(screen) => {
            if app.active_screen != screen {
                app.active_screen = screen;
            }
            Effect::None
        }
        Action::ToggleCard(card) => {
            app.selection.toggle(card.id);
            Effect::None
        }
        Action::ReorderSelection(Some(cards)) => {
            app.selection
                .replace(cards.iter().map(|card| card.id.to_string()).collect());
            Effect::None
        }
        Action::ReorderSelection(None) => Effect::None,
        Action::ClearSelection => {
            app.selection.clear();
            Effect::None
        }
        Action::Share => {
            // The control is disabled while the selection is empty.
            if app.selection.is_empty() {
                return Effect::None;
            }
            Effect::Share(compose_share_text(&app.selected_cards()))
        }
        Action::LostFocus => Effect::PersistSession,
        Action::SessionRestored(snapshot) => {
            merge_snapshot(app, snapshot);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Field-wise merge of a restored snapshot: fields absent from storage keep
/// their in-memory defaults. Stale ids are dropped rather than faulting;
/// the drop is logged and surfaced in the status line.
fn merge_snapshot(app: &mut App, snapshot: SessionSnapshot) {
    if let Some(screen) = snapshot.active_screen {
        app.active_screen = screen;
    }
    if let Some((ids, dropped)) = snapshot.sanitized_ids() {
        info!("restored selection with {} card(s)", ids.len());
        app.selection = Selection::from_ids(ids);
        if dropped > 0 {
            warn!("restored selection dropped {dropped} unknown card id(s)");
            app.status_message = format!("Dropped {dropped} unknown card(s) from the last session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::find_card;

    fn card(id: &str) -> &'static Card {
        find_card(id).unwrap()
    }

    #[test]
    fn switch_screen_sets_active() {
        let mut app = App::new();
        assert_eq!(update(&mut app, Action::SwitchScreen(Screen::Help)), Effect::None);
        assert_eq!(app.active_screen, Screen::Help);
    }

    #[test]
    fn switch_to_active_screen_is_noop() {
        let mut app = App::new();
        update(&mut app, Action::SwitchScreen(Screen::Needs));
        assert_eq!(app.active_screen, Screen::Needs);
    }

    #[test]
    fn toggle_appends_then_removes() {
        let mut app = App::new();
        update(&mut app, Action::ToggleCard(card("n1")));
        update(&mut app, Action::ToggleCard(card("n2")));
        assert_eq!(app.selection.ids(), ["n1", "n2"]);

        update(&mut app, Action::ToggleCard(card("n1")));
        assert_eq!(app.selection.ids(), ["n2"]);
    }

    #[test]
    fn reorder_replaces_selection_order() {
        let mut app = App::new();
        for id in ["n1", "n2", "n3"] {
            update(&mut app, Action::ToggleCard(card(id)));
        }
        let new_order = vec![card("n3"), card("n1"), card("n2")];
        update(&mut app, Action::ReorderSelection(Some(new_order)));
        assert_eq!(app.selection.ids(), ["n3", "n1", "n2"]);

        // Resolving immediately yields exactly that order.
        let resolved: Vec<_> = app.selected_cards().iter().map(|c| c.id).collect();
        assert_eq!(resolved, ["n3", "n1", "n2"]);
    }

    #[test]
    fn cancelled_reorder_leaves_selection_unchanged() {
        let mut app = App::new();
        update(&mut app, Action::ToggleCard(card("n1")));
        update(&mut app, Action::ToggleCard(card("n2")));
        let before = app.selection.clone();

        assert_eq!(update(&mut app, Action::ReorderSelection(None)), Effect::None);
        assert_eq!(app.selection, before);
    }

    #[test]
    fn drag_item_three_to_front_scenario() {
        // Select three cards from "needs", switch to the selection screen,
        // move item 3 to position 1.
        let mut app = App::new();
        for id in ["n5", "n6", "n7"] {
            update(&mut app, Action::ToggleCard(card(id)));
        }
        update(&mut app, Action::SwitchScreen(Screen::Selection));
        update(
            &mut app,
            Action::ReorderSelection(Some(vec![card("n7"), card("n5"), card("n6")])),
        );
        assert_eq!(app.selection.ids(), ["n7", "n5", "n6"]);
    }

    #[test]
    fn clear_empties_selection() {
        let mut app = App::new();
        update(&mut app, Action::ToggleCard(card("n1")));
        assert_eq!(update(&mut app, Action::ClearSelection), Effect::None);
        assert!(app.selection.is_empty());
    }

    #[test]
    fn share_composes_selection_in_order() {
        // n1 = ["autonomy"], n2 = ["choice", "freedom"]
        let mut app = App::new();
        update(&mut app, Action::ToggleCard(card("n1")));
        update(&mut app, Action::ToggleCard(card("n2")));

        let effect = update(&mut app, Action::Share);
        assert_eq!(
            effect,
            Effect::Share("- autonomy\n- choice, freedom".to_string())
        );
    }

    #[test]
    fn share_is_disabled_when_selection_empty() {
        let mut app = App::new();
        assert_eq!(update(&mut app, Action::Share), Effect::None);
    }

    #[test]
    fn focus_loss_requests_persistence() {
        let mut app = App::new();
        assert_eq!(update(&mut app, Action::LostFocus), Effect::PersistSession);
    }

    #[test]
    fn restore_merges_both_fields() {
        let mut app = App::new();
        let snapshot = SessionSnapshot {
            active_screen: Some(Screen::Selection),
            selected_cards: Some(vec!["n1".into(), "f2".into()]),
            saved_at: None,
        };
        update(&mut app, Action::SessionRestored(snapshot));
        assert_eq!(app.active_screen, Screen::Selection);
        assert_eq!(app.selection.ids(), ["n1", "f2"]);
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn restore_with_missing_fields_keeps_defaults() {
        let mut app = App::new();
        update(&mut app, Action::SessionRestored(SessionSnapshot::default()));
        assert_eq!(app.active_screen, Screen::Needs);
        assert!(app.selection.is_empty());
    }

    #[test]
    fn restore_drops_stale_ids_and_reports() {
        let mut app = App::new();
        let snapshot = SessionSnapshot {
            active_screen: None,
            selected_cards: Some(vec!["n1".into(), "gone".into()]),
            saved_at: None,
        };
        update(&mut app, Action::SessionRestored(snapshot));
        assert_eq!(app.selection.ids(), ["n1"]);
        assert!(app.status_message.contains("1 unknown card"));
    }

    #[test]
    fn quit_yields_quit_effect() {
        let mut app = App::new();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
