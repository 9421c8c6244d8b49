use crate::card::Card;
use crate::error::{DeckError, Result};
use serde::{Deserialize, Serialize};

/// A named list of cards for one hero class
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    pub name: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub cards: Vec<Card>,
    /// Cards the exporter could not find in the collection.
    /// Filled in after an export, never persisted.
    #[serde(skip)]
    pub missing_cards: Vec<Card>,
}

impl Deck {
    pub fn new(name: &str, class: &str, cards: Vec<Card>) -> Self {
        Self {
            name: name.to_string(),
            class: class.to_string(),
            cards,
            missing_cards: Vec::new(),
        }
    }

    /// Total number of cards, counting duplicates. Saturates at `u32::MAX`.
    pub fn card_total(&self) -> u32 {
        self.cards
            .iter()
            .fold(0u32, |total, c| total.saturating_add(c.count))
    }

    /// Short description used in log lines
    pub fn info(&self) -> String {
        format!("{} ({}, {} cards)", self.name, self.class, self.card_total())
    }

    /// Returns true if any card in the deck has one of `names`
    pub fn contains_any(&self, names: &[&str]) -> bool {
        self.cards.iter().any(|c| names.contains(&c.name.as_str()))
    }

    /// Encodes the deck as `id:count` pairs joined by `;`
    pub fn to_id_string(&self) -> String {
        self.cards
            .iter()
            .map(|c| format!("{}:{}", c.id, c.count))
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Parses an id string produced by [`Deck::to_id_string`].
    ///
    /// Cards only carry their id and count; names are filled with the id
    /// until a card database resolves them.
    pub fn from_id_string(name: &str, class: &str, text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DeckError::EmptyIdString);
        }

        let mut cards = Vec::new();
        for entry in text.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let (id, count) = entry
                .split_once(':')
                .ok_or_else(|| DeckError::InvalidIdString {
                    entry: entry.to_string(),
                    reason: "expected id:count".to_string(),
                })?;

            let id = id.trim();
            if id.is_empty() {
                return Err(DeckError::InvalidIdString {
                    entry: entry.to_string(),
                    reason: "missing card id".to_string(),
                });
            }

            let count: u32 = count
                .trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| DeckError::InvalidIdString {
                    entry: entry.to_string(),
                    reason: e.to_string(),
                })?;

            cards.push(Card::new(id, id, "", "", count));
        }

        log::debug!("Parsed {} cards from id string", cards.len());
        Ok(Self::new(name, class, cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_deck() -> Deck {
        Deck::new(
            "Zoo",
            "Warlock",
            vec![
                Card::new("CS2_065", "Voidwalker", "Free", "Basic", 2),
                Card::new("EX1_310", "Doomguard", "Rare", "Expert", 2),
                Card::new("FP1_014", "Stalagg", "Rare", "Curse of Naxxramas", 1),
            ],
        )
    }

    #[test]
    fn test_card_total() {
        assert_eq!(sample_deck().card_total(), 5);
        assert_eq!(Deck::default().card_total(), 0);
    }

    #[test]
    fn test_card_total_saturates() {
        let deck = Deck::new(
            "Broken",
            "Mage",
            vec![
                Card::new("CS2_029", "Fireball", "Common", "Basic", u32::MAX),
                Card::new("CS2_032", "Flamestrike", "Common", "Basic", 2),
            ],
        );
        assert_eq!(deck.card_total(), u32::MAX);
        assert!(deck.info().contains(&u32::MAX.to_string()));
    }

    #[test]
    fn test_info() {
        assert_eq!(sample_deck().info(), "Zoo (Warlock, 5 cards)");
    }

    #[test]
    fn test_contains_any() {
        let deck = sample_deck();
        assert!(deck.contains_any(&["Stalagg", "Feugen"]));
        assert!(!deck.contains_any(&["Feugen"]));
    }

    #[test]
    fn test_to_id_string_keeps_deck_order() {
        assert_eq!(
            sample_deck().to_id_string(),
            "CS2_065:2;EX1_310:2;FP1_014:1"
        );
        assert_eq!(Deck::default().to_id_string(), "");
    }

    #[test]
    fn test_from_id_string() {
        let deck = Deck::from_id_string("Imported", "Mage", " CS2_029:2; CS2_032:1 ;").unwrap();
        assert_eq!(deck.name, "Imported");
        assert_eq!(deck.class, "Mage");
        assert_eq!(deck.cards.len(), 2);
        assert_eq!(deck.cards[0].id, "CS2_029");
        assert_eq!(deck.cards[0].count, 2);
        assert_eq!(deck.cards[1].id, "CS2_032");
        assert_eq!(deck.cards[1].count, 1);
    }

    #[test]
    fn test_from_id_string_rejects_malformed() {
        assert!(matches!(
            Deck::from_id_string("x", "Mage", "   "),
            Err(DeckError::EmptyIdString)
        ));
        assert!(matches!(
            Deck::from_id_string("x", "Mage", "CS2_029"),
            Err(DeckError::InvalidIdString { .. })
        ));
        assert!(matches!(
            Deck::from_id_string("x", "Mage", "CS2_029:two"),
            Err(DeckError::InvalidIdString { .. })
        ));
        assert!(matches!(
            Deck::from_id_string("x", "Mage", ":2"),
            Err(DeckError::InvalidIdString { .. })
        ));
    }

    #[test]
    fn test_missing_cards_not_serialized() {
        let mut deck = sample_deck();
        deck.missing_cards = vec![deck.cards[1].clone()];

        let json = serde_json::to_string(&deck).unwrap();
        assert!(!json.contains("missing_cards"));

        let restored: Deck = serde_json::from_str(&json).unwrap();
        assert!(restored.missing_cards.is_empty());
        assert_eq!(restored.cards, deck.cards);
    }
}
