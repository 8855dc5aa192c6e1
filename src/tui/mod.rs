//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter in the future
//! if needed.
//!
//! ## Event loop shape
//!
//! One iteration: drain actions from background tasks, redraw if anything
//! changed, then block on terminal input for up to 250ms. Input events are
//! either global (tabs, share, clear, quit, focus) and become actions
//! directly, or they go to the active screen's component, whose emitted
//! event is mapped to an action. Effects returned by `update()` run as
//! fire-and-forget blocking tasks so the loop never waits on the disk or
//! the clipboard.

mod component;
mod components;
mod event;
pub mod markdown;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;

use crate::cards::DeckKind;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::session::{self, SessionSnapshot};
use crate::core::share;
use crate::core::state::{App, Screen};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    DeckEvent, DeckListState, HelpState, SelectionEvent, SelectionListState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic).
/// Every screen's state exists for the whole process, so cursors and
/// scroll offsets survive switching away and back.
pub struct TuiState {
    pub needs_list: DeckListState,
    pub feelings_list: DeckListState,
    pub selection_list: SelectionListState,
    pub help: HelpState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            needs_list: DeckListState::new(DeckKind::Needs),
            feelings_list: DeckListState::new(DeckKind::Feelings),
            selection_list: SelectionListState::new(),
            help: HelpState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Focus change reporting is the app-lifecycle signal: FocusLost
        // stands in for the mobile "background/inactive" transition.
        execute!(stdout(), EnableMouseCapture, EnableFocusChange)?;
        info!("Terminal modes enabled (mouse capture, focus change)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableFocusChange, DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new();
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let session_path = config.session_path();

    // Restore the previous session off the render path. First launch (no
    // snapshot) simply sends nothing.
    {
        let tx = tx.clone();
        let path = session_path.clone();
        tokio::task::spawn_blocking(move || {
            if let Some(snapshot) = session::load_snapshot(&path) {
                let _ = tx.send(Action::SessionRestored(snapshot));
            }
        });
    }

    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    loop {
        // Apply actions delivered by background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            should_quit |= apply(&mut app, action, &session_path);
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        if should_quit {
            break;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(Duration::from_millis(250));
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize | TuiEvent::FocusGained) {
                continue;
            }

            if let Some(action) = global_action(&event) {
                should_quit |= apply(&mut app, action, &session_path);
                continue;
            }

            // Everything else goes to the active screen's component
            let screen_action = match app.active_screen {
                Screen::Needs => tui
                    .needs_list
                    .handle_event(&event)
                    .map(|DeckEvent::Toggle(card)| Action::ToggleCard(card)),
                Screen::Feelings => tui
                    .feelings_list
                    .handle_event(&event)
                    .map(|DeckEvent::Toggle(card)| Action::ToggleCard(card)),
                Screen::Selection => {
                    tui.selection_list
                        .handle_event(&event)
                        .map(|selection_event| match selection_event {
                            SelectionEvent::Toggle(card) => Action::ToggleCard(card),
                            SelectionEvent::Reorder(order) => Action::ReorderSelection(order),
                        })
                }
                Screen::Help => {
                    tui.help.handle_event(&event);
                    None
                }
            };
            if let Some(action) = screen_action {
                should_quit |= apply(&mut app, action, &session_path);
            }
        }
    }

    // The quit-path save is synchronous: the process is about to exit and
    // fire-and-forget tasks would race it.
    session::persist_session(&app, &session_path);
    ratatui::restore();
    info!("Exited cleanly");
    Ok(())
}

/// Events that mean the same thing on every screen.
fn global_action(event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ShowScreen(screen) => Some(Action::SwitchScreen(*screen)),
        TuiEvent::Share => Some(Action::Share),
        TuiEvent::Clear => Some(Action::ClearSelection),
        TuiEvent::FocusLost => Some(Action::LostFocus),
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        _ => None,
    }
}

/// Run the reducer and execute the returned effect. Returns true when the
/// loop should exit.
fn apply(app: &mut App, action: Action, session_path: &Path) -> bool {
    debug!("applying {action:?}");
    match update(app, action) {
        Effect::None => false,
        Effect::PersistSession => {
            let snapshot = SessionSnapshot::of_app(app);
            let path = session_path.to_path_buf();
            tokio::task::spawn_blocking(move || {
                if let Err(err) = session::save_snapshot(&path, &snapshot) {
                    warn!("background session save failed: {err}");
                }
            });
            false
        }
        Effect::Share(text) => {
            tokio::task::spawn_blocking(move || share::copy_to_clipboard(&text));
            app.status_message = "Selection copied to clipboard".to_string();
            false
        }
        Effect::Quit => true,
    }
}
