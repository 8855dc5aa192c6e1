use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEventKind};

use crate::core::state::Screen;

/// TUI-specific input events.
///
/// Keyboard and mouse input is translated here into gesture-level events;
/// which `core::Action` (if any) a gesture becomes depends on the active
/// screen and is decided in the event loop. Focus changes double as the
/// app-lifecycle signal: `FocusLost` is the "background/inactive"
/// transition that triggers persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Tab keys 1-4 (drawer order: Feelings, Needs, Selection, Help).
    ShowScreen(Screen),
    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    /// Enter — the "tap" gesture.
    Toggle,
    /// Space — grab/drop, the long-press-drag analog.
    Grab,
    Escape,
    Share,
    Clear,
    Quit,
    ForceQuit,
    FocusLost,
    FocusGained,
    Resize,
}

/// Poll for an event with a timeout (None on timeout).
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        translate(event::read().unwrap())
    } else {
        None
    }
}

/// Poll for an event without blocking (returns immediately).
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                // Drawer order: feelings, needs, selection, help
                (_, KeyCode::Char('1')) => Some(TuiEvent::ShowScreen(Screen::Feelings)),
                (_, KeyCode::Char('2')) => Some(TuiEvent::ShowScreen(Screen::Needs)),
                (_, KeyCode::Char('3')) => Some(TuiEvent::ShowScreen(Screen::Selection)),
                (_, KeyCode::Char('4')) => Some(TuiEvent::ShowScreen(Screen::Help)),
                (_, KeyCode::Char('s')) => Some(TuiEvent::Share),
                (_, KeyCode::Char('c')) => Some(TuiEvent::Clear),
                (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                (_, KeyCode::Char(' ')) => Some(TuiEvent::Grab),
                (_, KeyCode::Enter) => Some(TuiEvent::Toggle),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
                (_, KeyCode::PageUp) => Some(TuiEvent::PageUp),
                (_, KeyCode::PageDown) => Some(TuiEvent::PageDown),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::CursorUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::CursorDown),
            _ => None,
        },
        Event::FocusLost => Some(TuiEvent::FocusLost),
        Event::FocusGained => Some(TuiEvent::FocusGained),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
