//! # Selection List Component
//!
//! The user's chosen cards in selection order, reorderable in place.
//!
//! Reordering uses a grab gesture (the long-press-drag analog): Space
//! grabs the card under the cursor, ↑/↓ move it, Space or Enter drops it,
//! Esc cancels. While a drag is in progress the component works on a local
//! copy of the ordering; only the drop emits the new order upstream. The
//! component never owns selection identity — the caller turns the emitted
//! card sequence back into ids and stores it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::cards::Card;
use crate::tui::component::EventHandler;
use crate::tui::components::card::CardView;
use crate::tui::components::deck_list::keep_cursor_visible;
use crate::tui::event::TuiEvent;

const EMPTY_MESSAGE: &str = "No cards are selected";
const REORDER_HINT: &str =
    "To reorder, press Space to grab a card, move it with ↑/↓, then Space to drop.";

/// The hint is shown for 1..=4 cards only — beyond that the list no longer
/// fits one page and the footer would crowd it.
const HINT_MAX_CARDS: usize = 4;

/// Persistent state for the selection screen.
pub struct SelectionListState {
    cards: Vec<&'static Card>,
    pub cursor: usize,
    pub scroll: ScrollViewState,
    /// Working order while a drag is in progress (None = not dragging).
    /// The grabbed card is the one under the cursor.
    drag: Option<Vec<&'static Card>>,
}

impl SelectionListState {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            cursor: 0,
            scroll: ScrollViewState::default(),
            drag: None,
        }
    }

    /// Adopt the materialized selection. Skipped while a drag is in
    /// progress so the working order isn't clobbered mid-gesture.
    pub fn sync(&mut self, cards: Vec<&'static Card>) {
        if self.drag.is_none() {
            self.cards = cards;
        }
        let len = self.visible_cards().len();
        if len == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(len - 1);
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    fn visible_cards(&self) -> &[&'static Card] {
        self.drag.as_deref().unwrap_or(&self.cards)
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.visible_cards().len();
        if len == 0 {
            return;
        }
        let cursor = (self.cursor as isize + delta).clamp(0, len as isize - 1) as usize;
        if let Some(order) = self.drag.as_mut() {
            order.swap(self.cursor, cursor);
        }
        self.cursor = cursor;
    }
}

impl Default for SelectionListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the selection list.
#[derive(Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Tap on a card — deselects it.
    Toggle(&'static Card),
    /// Drag finished with a new full ordering (`Some`) or was cancelled
    /// (`None`).
    Reorder(Option<Vec<&'static Card>>),
}

impl EventHandler for SelectionListState {
    type Event = SelectionEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SelectionEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.move_cursor(-1);
                None
            }
            TuiEvent::CursorDown => {
                self.move_cursor(1);
                None
            }
            TuiEvent::Grab => {
                if let Some(order) = self.drag.take() {
                    Some(SelectionEvent::Reorder(Some(order)))
                } else if self.cards.is_empty() {
                    None
                } else {
                    self.drag = Some(self.cards.clone());
                    None
                }
            }
            TuiEvent::Toggle => {
                if let Some(order) = self.drag.take() {
                    Some(SelectionEvent::Reorder(Some(order)))
                } else {
                    self.cards
                        .get(self.cursor)
                        .copied()
                        .map(SelectionEvent::Toggle)
                }
            }
            TuiEvent::Escape => {
                if self.drag.take().is_some() {
                    // Drag cancelled: the emitted None is a no-op upstream
                    // and the next sync restores the stored order.
                    Some(SelectionEvent::Reorder(None))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the selection screen.
pub struct SelectionList<'a> {
    state: &'a mut SelectionListState,
}

impl<'a> SelectionList<'a> {
    pub fn new(state: &'a mut SelectionListState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let count = self.state.visible_cards().len();

        if count == 0 {
            let empty = Paragraph::new(format!("\n\n{EMPTY_MESSAGE}"))
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let show_hint = count <= HINT_MAX_CARDS;
        let [list_area, hint_area] = if show_hint {
            Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(area)
        } else {
            Layout::vertical([Constraint::Min(0), Constraint::Length(0)]).areas(area)
        };

        self.render_list(frame, list_area);

        if show_hint {
            let hint = Paragraph::new(REORDER_HINT)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(hint, hint_area);
        }
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect) {
        let dragging = self.state.is_dragging();
        let cursor = self.state.cursor;
        let content_width = area.width.saturating_sub(1);

        let heights: Vec<u16> = self
            .state
            .visible_cards()
            .iter()
            .map(|card| CardView::height(card))
            .collect();
        let total_height: u16 = heights.iter().sum();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (index, &card) in self.state.visible_cards().iter().enumerate() {
            let rect = Rect::new(0, y_offset, content_width, heights[index]);
            scroll_view.render_widget(
                CardView {
                    card,
                    selected: true,
                    is_cursor: index == cursor,
                    is_grabbed: dragging && index == cursor,
                },
                rect,
            );
            y_offset += heights[index];
        }

        keep_cursor_visible(&mut self.state.scroll, &heights, cursor, area.height);
        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll);
    }
}
