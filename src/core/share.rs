//! # Share
//!
//! Renders the selection as share text and hands it to the system clipboard,
//! the terminal stand-in for the platform share sheet. Clipboard failures
//! are swallowed by design: no user-visible error, no retry.

use log::debug;

use crate::cards::Card;

/// One line per card, prefixed `- `, with a card's text lines joined by
/// `, `. Cards appear in selection order, lines in card order.
pub fn compose_share_text(cards: &[&Card]) -> String {
    cards
        .iter()
        .map(|card| {
            let joined = card
                .lines
                .iter()
                .map(|line| line.text)
                .collect::<Vec<_>>()
                .join(", ");
            format!("- {joined}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Put the text on the system clipboard. All failures, including a missing
/// or inaccessible clipboard, are logged at debug and otherwise ignored.
pub fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(err) = clipboard.set_text(text.to_string()) {
                debug!("clipboard write failed: {err}");
            } else {
                debug!("copied {} bytes to clipboard", text.len());
            }
        }
        Err(err) => debug!("clipboard unavailable: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardLine;

    const LINE_X: CardLine = CardLine {
        text: "X",
        size: None,
    };
    const LINE_Y: CardLine = CardLine {
        text: "Y",
        size: None,
    };
    const LINE_Z: CardLine = CardLine {
        text: "Z",
        size: None,
    };

    const CARD_A: Card = Card {
        id: "a",
        lines: &[LINE_X],
    };
    const CARD_B: Card = Card {
        id: "b",
        lines: &[LINE_Y, LINE_Z],
    };

    #[test]
    fn empty_selection_composes_empty_text() {
        assert_eq!(compose_share_text(&[]), "");
    }

    #[test]
    fn single_line_card() {
        assert_eq!(compose_share_text(&[&CARD_A]), "- X");
    }

    #[test]
    fn multi_line_card_joins_lines_in_card_order() {
        assert_eq!(compose_share_text(&[&CARD_A, &CARD_B]), "- X\n- Y, Z");
    }

    #[test]
    fn cards_appear_in_selection_order() {
        assert_eq!(compose_share_text(&[&CARD_B, &CARD_A]), "- Y, Z\n- X");
    }
}
