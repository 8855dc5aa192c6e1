//! Top-level frame layout: the active screen above a one-row tab bar.
//!
//! All four screen states live in [`TuiState`](crate::tui::TuiState) for
//! the whole process; only the active one is rendered, but the hidden ones
//! keep their cursors and scroll offsets.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::{App, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{DeckList, HelpScreen, SelectionList, TabBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [main_area, bar_area] = Layout::vertical([Min(0), Length(1)]).areas(frame.area());

    match app.active_screen {
        Screen::Needs => {
            tui.needs_list.sync(&app.selection);
            DeckList::new(&mut tui.needs_list).render(frame, main_area);
        }
        Screen::Feelings => {
            tui.feelings_list.sync(&app.selection);
            DeckList::new(&mut tui.feelings_list).render(frame, main_area);
        }
        Screen::Selection => {
            tui.selection_list.sync(app.selected_cards());
            SelectionList::new(&mut tui.selection_list).render(frame, main_area);
        }
        Screen::Help => {
            HelpScreen::new(&mut tui.help).render(frame, main_area);
        }
    }

    TabBar {
        active: app.active_screen,
        selection_empty: app.selection.is_empty(),
        status: &app.status_message,
    }
    .render(frame, bar_area);
}
