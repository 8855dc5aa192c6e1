//! # Help Screen Component
//!
//! Scrollable usage notes rendered from embedded markdown.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::Color;
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::markdown;

const HELP_TEXT: &str = "\
# NVC Cards

A pocket deck of *feelings* and *needs* cards for Nonviolent
Communication practice. Browse the two decks, pick the cards that fit,
put them in order, and share the result.

## Screens

- `1` Feelings — the feelings deck
- `2` Needs — the needs deck
- `3` Selection — your chosen cards, in order
- `4` Help — this screen

Each screen keeps its place: scroll positions survive switching.

## Picking cards

Move with `↑`/`↓` (or `j`/`k`) and press `Enter` or `Space` to select a
card. Selecting it again removes it. Selected needs show a cyan frame,
selected feelings a red one.

## Ordering the selection

On the Selection screen, press `Space` to grab the card under the
cursor, move it with `↑`/`↓`, and press `Space` again to drop it.
`Esc` cancels the move. Newly selected cards always join at the end.

## Sharing and clearing

- `s` copies the selection to the clipboard, one card per line
- `c` clears the selection

## Leaving

`q` quits. Your screen and selection are saved automatically and
restored next time.
";

/// Persistent state for the help screen (scroll offset only).
pub struct HelpState {
    pub scroll: ScrollViewState,
}

impl HelpState {
    pub fn new() -> Self {
        Self {
            scroll: ScrollViewState::default(),
        }
    }
}

impl Default for HelpState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for HelpState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::CursorUp => self.scroll.scroll_up(),
            TuiEvent::CursorDown => self.scroll.scroll_down(),
            TuiEvent::PageUp => self.scroll.scroll_page_up(),
            TuiEvent::PageDown => self.scroll.scroll_page_down(),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the help screen.
pub struct HelpScreen<'a> {
    state: &'a mut HelpState,
}

impl<'a> HelpScreen<'a> {
    pub fn new(state: &'a mut HelpState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = markdown::render(HELP_TEXT, Color::Gray);
        let content_width = area.width.saturating_sub(1);
        let height = text.lines.len() as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Paragraph::new(text),
            Rect::new(0, 0, content_width, height),
        );
        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_text_renders_to_lines() {
        let text = markdown::render(HELP_TEXT, Color::Gray);
        assert!(text.lines.len() > 10);
    }

    #[test]
    fn scroll_events_emit_nothing() {
        let mut state = HelpState::new();
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(state.handle_event(&TuiEvent::PageDown), None);
    }
}
