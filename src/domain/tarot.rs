//! Tarot cards and the daily spread.
//!
//! The daily reading is a curated, fixed three-card spread. The meanings
//! are hand-written for Mira, with a birthday variant substituted on the
//! celebration day.

use serde::{Deserialize, Serialize};

/// A single card in a reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TarotCard {
    /// Card name (e.g., "The Moon").
    pub name: String,
    /// Short archetype description.
    pub description: String,
    /// Personal meaning for today's reading.
    pub meaning: String,
    /// Whether the card is drawn reversed.
    pub reversed: bool,
}

impl TarotCard {
    fn upright(name: &str, description: &str, meaning: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            meaning: meaning.to_string(),
            reversed: false,
        }
    }
}

/// The fixed daily spread: always The Moon, The Star, The Lovers.
///
/// `celebration` selects the birthday meanings.
pub fn daily_spread(celebration: bool) -> Vec<TarotCard> {
    if celebration {
        vec![
            TarotCard::upright(
                "The Moon",
                "Intuition and hidden emotions",
                "On your day, the moon shines for its favourite selenophile. \
                 Everything you felt this year was leading you somewhere; trust it.",
            ),
            TarotCard::upright(
                "The Star",
                "Hope and inspiration",
                "A birthday wish carries further than an ordinary one. Make it \
                 about Mumbai, make it about you, and believe it.",
            ),
            TarotCard::upright(
                "The Lovers",
                "Choices and relationships",
                "Celebrate with the people who understand you without a speech. \
                 This year, choose what your heart has already chosen.",
            ),
        ]
    } else {
        vec![
            TarotCard::upright(
                "The Moon",
                "Intuition and hidden emotions",
                "Trust your instincts today, Mira. Your emotions are your \
                 strength, especially when you feel like an outsider. The moon \
                 understands your selenophile heart.",
            ),
            TarotCard::upright(
                "The Star",
                "Hope and inspiration",
                "Your dream of returning to Mumbai is valid and reachable. Keep \
                 believing in yourself and the path you're building.",
            ),
            TarotCard::upright(
                "The Lovers",
                "Choices and relationships",
                "Listen to your heart when weighing relationships and career \
                 moves. Your intuition already knows what's best for you.",
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spread_always_has_three_cards() {
        assert_eq!(daily_spread(false).len(), 3);
        assert_eq!(daily_spread(true).len(), 3);
    }

    #[test]
    fn spread_names_are_fixed() {
        for celebration in [false, true] {
            let names: Vec<String> = daily_spread(celebration)
                .into_iter()
                .map(|c| c.name)
                .collect();
            assert_eq!(names, vec!["The Moon", "The Star", "The Lovers"]);
        }
    }

    #[test]
    fn spread_cards_are_upright() {
        assert!(daily_spread(false).iter().all(|c| !c.reversed));
        assert!(daily_spread(true).iter().all(|c| !c.reversed));
    }

    #[test]
    fn celebration_substitutes_meanings() {
        let everyday = daily_spread(false);
        let birthday = daily_spread(true);

        for (a, b) in everyday.iter().zip(birthday.iter()) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.description, b.description);
            assert_ne!(a.meaning, b.meaning);
        }
    }
}
