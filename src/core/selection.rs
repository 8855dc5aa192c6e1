//! # Selection
//!
//! The ordered, duplicate-free list of selected card ids. It encodes both
//! *which* cards are selected and *in what order* they appear on the
//! selection screen.
//!
//! Mutations are deliberately narrow:
//! - [`toggle`](Selection::toggle): append when absent, remove when present.
//!   Re-selecting a removed card appends at the end, not at its old position.
//! - [`replace`](Selection::replace): wholesale reorder after a drag.
//! - [`clear`](Selection::clear): the trash action.
//!
//! The [`memo_key`](Selection::memo_key) is the explicit contract the deck
//! lists use for render suppression: two selections with the same ids in the
//! same order produce the same key.

use serde::{Deserialize, Serialize};

/// Separator for the memoization key. ASCII unit separator — never part of
/// a card id.
const MEMO_SEP: char = '\u{1f}';

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(Vec<String>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from a list of ids, keeping the first occurrence of
    /// each id. Used when adopting a restored snapshot, which is the one
    /// place duplicates could sneak in.
    pub fn from_ids(ids: Vec<String>) -> Self {
        let mut selection = Self::new();
        for id in ids {
            if !selection.contains(&id) {
                selection.0.push(id);
            }
        }
        selection
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|selected| selected == id)
    }

    /// Toggle a card id: remove it if present (relative order of the rest is
    /// preserved), otherwise append it at the end.
    pub fn toggle(&mut self, id: &str) {
        if self.contains(id) {
            self.0.retain(|selected| selected != id);
        } else {
            self.0.push(id.to_string());
        }
    }

    /// Replace the whole ordering, e.g. after a completed drag.
    pub fn replace(&mut self, ids: Vec<String>) {
        self.0 = ids;
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn ids(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Normalized comparison key: the ordered ids joined by a separator that
    /// cannot appear in an id. Equal key ⇔ same members in the same order.
    pub fn memo_key(&self) -> String {
        self.0.join(&MEMO_SEP.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection_of(ids: &[&str]) -> Selection {
        Selection::from_ids(ids.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn toggle_appends_then_removes() {
        let mut sel = Selection::new();
        sel.toggle("n1");
        sel.toggle("f2");
        assert_eq!(sel.ids(), ["n1", "f2"]);

        sel.toggle("n1");
        assert_eq!(sel.ids(), ["f2"]);
    }

    #[test]
    fn reselect_appends_at_end_not_old_position() {
        let mut sel = selection_of(&["n1", "n2", "n3"]);
        sel.toggle("n1"); // remove
        sel.toggle("n1"); // re-add
        assert_eq!(sel.ids(), ["n2", "n3", "n1"]);
    }

    #[test]
    fn odd_toggles_survive_in_first_toggle_order() {
        let mut sel = Selection::new();
        // n1: 3x (kept), n2: 2x (dropped), n3: 1x (kept)
        for id in ["n1", "n2", "n3", "n1", "n2", "n1"] {
            sel.toggle(id);
        }
        assert_eq!(sel.len(), 2);
        assert_eq!(sel.ids(), ["n3", "n1"]); // n1 re-entered after n3
    }

    #[test]
    fn double_toggle_restores_content() {
        let mut sel = selection_of(&["n1", "n2"]);
        let before = sel.clone();
        sel.toggle("n2");
        sel.toggle("n2");
        assert_eq!(sel, before);
    }

    #[test]
    fn replace_takes_order_verbatim() {
        let mut sel = selection_of(&["n1", "n2", "n3"]);
        sel.replace(vec!["n3".into(), "n1".into(), "n2".into()]);
        assert_eq!(sel.ids(), ["n3", "n1", "n2"]);
    }

    #[test]
    fn clear_empties() {
        let mut sel = selection_of(&["n1", "n2"]);
        sel.clear();
        assert!(sel.is_empty());
    }

    #[test]
    fn from_ids_drops_duplicates_keeping_first() {
        let sel = selection_of(&["n1", "n2", "n1", "n3", "n2"]);
        assert_eq!(sel.ids(), ["n1", "n2", "n3"]);
    }

    #[test]
    fn memo_key_distinguishes_order_and_membership() {
        let a = selection_of(&["n1", "n2"]);
        let b = selection_of(&["n2", "n1"]);
        let c = selection_of(&["n1", "n2"]);
        assert_ne!(a.memo_key(), b.memo_key());
        assert_eq!(a.memo_key(), c.memo_key());
        assert_ne!(a.memo_key(), selection_of(&["n1"]).memo_key());
    }

    #[test]
    fn serializes_as_plain_id_list() {
        let sel = selection_of(&["n1", "f2"]);
        let json = serde_json::to_string(&sel).unwrap();
        assert_eq!(json, r#"["n1","f2"]"#);
        let back: Selection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sel);
    }
}
