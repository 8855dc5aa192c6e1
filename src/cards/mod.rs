//! # Card Dataset
//!
//! The two fixed decks ("needs" and "feelings") plus lookup by card id.
//! Cards are const data compiled into the binary — nothing here is created
//! or mutated at runtime. Deck membership is encoded in the id prefix:
//! `n...` is a need, anything else is a feeling.

mod data;

pub use data::{FEELINGS, NEEDS};

use std::fmt;

/// Display size for a single card line. A few lines carry an explicit
/// hint in the dataset; everything else is guessed from text length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Large,
    Medium,
    Small,
}

/// One line of text on a card, with an optional explicit size hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLine {
    pub text: &'static str,
    pub size: Option<SizeClass>,
}

impl CardLine {
    /// Effective size: the explicit hint if present, otherwise guessed
    /// from text length (< 20 chars → Large, < 25 → Medium, else Small).
    pub fn size_class(&self) -> SizeClass {
        self.size.unwrap_or_else(|| guess_size(self.text))
    }
}

/// A single card: a stable id and one or more text lines.
#[derive(Debug, PartialEq, Eq)]
pub struct Card {
    pub id: &'static str,
    pub lines: &'static [CardLine],
}

impl Card {
    pub fn deck(&self) -> DeckKind {
        if self.id.starts_with('n') {
            DeckKind::Needs
        } else {
            DeckKind::Feelings
        }
    }
}

/// One of the two fixed card decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckKind {
    Needs,
    Feelings,
}

impl DeckKind {
    pub fn title(self) -> &'static str {
        match self {
            DeckKind::Needs => "Needs",
            DeckKind::Feelings => "Feelings",
        }
    }

    pub fn cards(self) -> &'static [Card] {
        match self {
            DeckKind::Needs => NEEDS,
            DeckKind::Feelings => FEELINGS,
        }
    }
}

fn guess_size(text: &str) -> SizeClass {
    let len = text.chars().count();
    if len < 20 {
        SizeClass::Large
    } else if len < 25 {
        SizeClass::Medium
    } else {
        SizeClass::Small
    }
}

/// An id that resolves to no card in either deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCard(pub String);

impl fmt::Display for UnknownCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown card id: {}", self.0)
    }
}

impl std::error::Error for UnknownCard {}

/// Look up a card by id across both decks. Fails clearly (never returns a
/// placeholder) for ids not present in the dataset.
pub fn find_card(id: &str) -> Result<&'static Card, UnknownCard> {
    NEEDS
        .iter()
        .chain(FEELINGS.iter())
        .find(|card| card.id == id)
        .ok_or_else(|| UnknownCard(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn find_card_resolves_both_decks() {
        let need = find_card(NEEDS[0].id).unwrap();
        assert_eq!(need.deck(), DeckKind::Needs);

        let feeling = find_card(FEELINGS[0].id).unwrap();
        assert_eq!(feeling.deck(), DeckKind::Feelings);
    }

    #[test]
    fn find_card_fails_for_unknown_id() {
        let err = find_card("zz99").unwrap_err();
        assert_eq!(err, UnknownCard("zz99".to_string()));
        assert_eq!(err.to_string(), "unknown card id: zz99");
    }

    #[test]
    fn ids_are_unique_across_decks() {
        let mut seen = HashSet::new();
        for card in NEEDS.iter().chain(FEELINGS.iter()) {
            assert!(seen.insert(card.id), "duplicate card id: {}", card.id);
        }
    }

    #[test]
    fn deck_membership_follows_id_prefix() {
        for card in NEEDS {
            assert!(card.id.starts_with('n'), "need without n prefix: {}", card.id);
        }
        for card in FEELINGS {
            assert!(!card.id.starts_with('n'), "feeling with n prefix: {}", card.id);
        }
    }

    #[test]
    fn every_card_has_at_least_one_line() {
        for card in NEEDS.iter().chain(FEELINGS.iter()) {
            assert!(!card.lines.is_empty(), "empty card: {}", card.id);
        }
    }

    #[test]
    fn guess_size_thresholds() {
        assert_eq!(guess_size("under twenty"), SizeClass::Large);
        assert_eq!(guess_size("exactly nineteen ch"), SizeClass::Large); // 19 chars
        assert_eq!(guess_size("twenty characters ok"), SizeClass::Medium); // 20 chars
        assert_eq!(guess_size("twenty-four characters!!"), SizeClass::Medium); // 24 chars
        assert_eq!(guess_size("twenty-five characters!!!"), SizeClass::Small); // 25 chars
    }

    #[test]
    fn explicit_size_hint_wins_over_heuristic() {
        let line = CardLine {
            text: "short",
            size: Some(SizeClass::Small),
        };
        assert_eq!(line.size_class(), SizeClass::Small);

        let unhinted = CardLine {
            text: "short",
            size: None,
        };
        assert_eq!(unhinted.size_class(), SizeClass::Large);
    }
}
