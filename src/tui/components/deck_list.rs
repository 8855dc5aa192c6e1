//! # Deck List Component
//!
//! One full deck rendered as a single-column list of [`CardView`]s with a
//! movable cursor. Enter or Space toggles the card under the cursor.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DeckListState` lives in `TuiState` for the whole process, so cursor
//!   and scroll offset survive switching screens ("always mounted").
//! - `DeckList` is created each frame with borrowed state.
//!
//! ## Render suppression
//!
//! The row model (which card is marked selected) is rebuilt only when the
//! selection's memo key changes — same ids in the same order means the
//! cached rows are reused verbatim, and toggling on one deck never
//! rebuilds the other.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::cards::{Card, DeckKind};
use crate::core::selection::Selection;
use crate::tui::component::EventHandler;
use crate::tui::components::card::CardView;
use crate::tui::event::TuiEvent;

/// Cards jumped by PageUp/PageDown.
const PAGE_JUMP: usize = 5;

struct DeckRow {
    card: &'static Card,
    selected: bool,
}

/// Persistent state for one deck screen.
pub struct DeckListState {
    pub deck: DeckKind,
    pub cursor: usize,
    pub scroll: ScrollViewState,
    rows: Vec<DeckRow>,
    memo_key: Option<String>,
    /// How often the row model was rebuilt. Observable for the render
    /// suppression contract.
    pub rebuild_count: u64,
}

impl DeckListState {
    pub fn new(deck: DeckKind) -> Self {
        Self {
            deck,
            cursor: 0,
            scroll: ScrollViewState::default(),
            rows: Vec::new(),
            memo_key: None,
            rebuild_count: 0,
        }
    }

    /// Refresh the row model against the current selection. No-op unless
    /// the selection's memo key differs from the cached one.
    pub fn sync(&mut self, selection: &Selection) {
        let key = selection.memo_key();
        if self.memo_key.as_deref() == Some(key.as_str()) {
            return;
        }
        self.rows = self
            .deck
            .cards()
            .iter()
            .map(|card| DeckRow {
                card,
                selected: selection.contains(card.id),
            })
            .collect();
        self.memo_key = Some(key);
        self.rebuild_count += 1;
        log::debug!("{:?} deck rows rebuilt ({})", self.deck, self.rebuild_count);
    }

    fn card_at_cursor(&self) -> Option<&'static Card> {
        self.deck.cards().get(self.cursor)
    }

    fn move_cursor_by(&mut self, delta: isize) {
        let len = self.deck.cards().len();
        if len == 0 {
            return;
        }
        let cursor = self.cursor as isize + delta;
        self.cursor = cursor.clamp(0, len as isize - 1) as usize;
    }
}

/// Events emitted by a deck list.
#[derive(Debug, PartialEq, Eq)]
pub enum DeckEvent {
    Toggle(&'static Card),
}

impl EventHandler for DeckListState {
    type Event = DeckEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DeckEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.move_cursor_by(-1);
                None
            }
            TuiEvent::CursorDown => {
                self.move_cursor_by(1);
                None
            }
            TuiEvent::PageUp => {
                self.move_cursor_by(-(PAGE_JUMP as isize));
                None
            }
            TuiEvent::PageDown => {
                self.move_cursor_by(PAGE_JUMP as isize);
                None
            }
            // Both Enter and Space are a "tap" on a deck card.
            TuiEvent::Toggle | TuiEvent::Grab => self.card_at_cursor().map(DeckEvent::Toggle),
            _ => None,
        }
    }
}

/// Transient render wrapper for a deck screen.
pub struct DeckList<'a> {
    state: &'a mut DeckListState,
}

impl<'a> DeckList<'a> {
    pub fn new(state: &'a mut DeckListState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // room for the scrollbar
        let heights: Vec<u16> = self
            .state
            .rows
            .iter()
            .map(|row| CardView::height(row.card))
            .collect();
        let total_height: u16 = heights.iter().sum();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (index, row) in self.state.rows.iter().enumerate() {
            let rect = Rect::new(0, y_offset, content_width, heights[index]);
            scroll_view.render_widget(
                CardView {
                    card: row.card,
                    selected: row.selected,
                    is_cursor: index == self.state.cursor,
                    is_grabbed: false,
                },
                rect,
            );
            y_offset += heights[index];
        }

        keep_cursor_visible(
            &mut self.state.scroll,
            &heights,
            self.state.cursor,
            area.height,
        );
        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll);
    }
}

/// Nudge the scroll offset so the cursor's card is fully on screen.
pub(super) fn keep_cursor_visible(
    scroll: &mut ScrollViewState,
    heights: &[u16],
    cursor: usize,
    viewport_height: u16,
) {
    if cursor >= heights.len() || viewport_height == 0 {
        return;
    }
    let top: u16 = heights[..cursor].iter().sum();
    let bottom = top + heights[cursor];
    let offset = scroll.offset();
    if top < offset.y {
        scroll.set_offset(Position::new(0, top));
    } else if bottom > offset.y + viewport_height {
        scroll.set_offset(Position::new(0, bottom - viewport_height));
    }
}
