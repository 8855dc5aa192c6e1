//! Shared helpers for unit tests.

use crate::core::selection::Selection;
use crate::core::state::App;

/// An app with the given card ids already selected, in order.
pub fn app_with_selection(ids: &[&str]) -> App {
    let mut app = App::new();
    app.selection = Selection::from_ids(ids.iter().map(|s| s.to_string()).collect());
    app
}
