use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};

use crate::cards::{Card, DeckKind, SizeClass};

/// Vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A stateless component that renders a single card.
///
/// `CardView` is a **transient component**: it is created fresh each frame
/// by the owning list with the flags it needs. The card's text lines are
/// centered and sized by their explicit hint or the length heuristic; the
/// selection indicator is a border tint that differs by deck (needs cyan,
/// feelings light red).
#[derive(Clone, Copy)]
pub struct CardView<'a> {
    pub card: &'a Card,
    /// The card's id is in the current selection.
    pub selected: bool,
    /// The list cursor is on this card.
    pub is_cursor: bool,
    /// This card is grabbed in an active drag.
    pub is_grabbed: bool,
}

impl<'a> CardView<'a> {
    /// Rendered height: one row per text line plus borders. Cards never
    /// wrap — lines are short by construction.
    pub fn height(card: &Card) -> u16 {
        card.lines.len() as u16 + VERTICAL_OVERHEAD
    }
}

/// Border tint used as the selection indicator, by deck membership.
fn selection_tint(card: &Card) -> Color {
    match card.deck() {
        DeckKind::Needs => Color::Cyan,
        DeckKind::Feelings => Color::LightRed,
    }
}

/// Text style for a card line from its effective size class.
fn line_style(size: SizeClass) -> Style {
    match size {
        SizeClass::Large => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        SizeClass::Medium => Style::default().fg(Color::Gray),
        SizeClass::Small => Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::DIM),
    }
}

impl<'a> Widget for CardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut border_style = if self.is_grabbed {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if self.selected {
            Style::default().fg(selection_tint(self.card))
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if !self.is_cursor && !self.is_grabbed {
            border_style = border_style.add_modifier(Modifier::DIM);
        }

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        let inner_area = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .card
            .lines
            .iter()
            .map(|line| Line::styled(line.text, line_style(line.size_class())))
            .collect();

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::find_card;

    #[test]
    fn height_is_lines_plus_borders() {
        let single = find_card("n1").unwrap(); // ["autonomy"]
        assert_eq!(CardView::height(single), 3);

        let triple = find_card("n29").unwrap(); // ["peace", "ease", "harmony"]
        assert_eq!(CardView::height(triple), 5);
    }

    #[test]
    fn selection_tint_differs_by_deck() {
        assert_eq!(selection_tint(find_card("n1").unwrap()), Color::Cyan);
        assert_eq!(selection_tint(find_card("f1").unwrap()), Color::LightRed);
    }

    #[test]
    fn large_lines_are_bold_small_lines_are_dim() {
        assert!(
            line_style(SizeClass::Large)
                .add_modifier
                .contains(Modifier::BOLD)
        );
        assert!(
            line_style(SizeClass::Small)
                .add_modifier
                .contains(Modifier::DIM)
        );
        assert!(line_style(SizeClass::Medium).add_modifier.is_empty());
    }
}
