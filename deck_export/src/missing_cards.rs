//! Missing-card report: which cards an export could not find and how much
//! dust it takes to craft them.

use hs_common::{Card, Deck, Rarity};

/// Adventure set whose cards are unlocked by playing, not crafted
pub const NAXXRAMAS_SET: &str = "CURSE OF NAXXRAMAS";
/// Promotional cards cannot be crafted either
pub const PROMOTION_SET: &str = "PROMOTION";

const HEADER: &str = "The following cards were \nnot found:\n";
const NAXXRAMAS_NOTE: &str = "\nand the Naxxramas DLC ";
const PROMOTION_NOTE: &str = "\nand Promotion cards ";

/// Dust needed to craft one copy of a card of this rarity
pub fn dust_cost(rarity: Rarity) -> u32 {
    match rarity {
        Rarity::Common => 40,
        Rarity::Rare => 100,
        Rarity::Epic => 400,
        Rarity::Legendary => 1600,
        Rarity::Unknown => 0,
    }
}

/// One line of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingEntry {
    pub name: String,
    pub count: u32,
}

impl MissingEntry {
    fn from_card(card: &Card) -> Self {
        Self {
            name: card.display_name().to_string(),
            count: card.count,
        }
    }

    fn line(&self) -> String {
        // Only pairs are annotated; other counts are printed bare.
        if self.count == 2 {
            format!("\n• {} ×2", self.name)
        } else {
            format!("\n• {}", self.name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingCardsReport {
    pub entries: Vec<MissingEntry>,
    pub total_dust: u64,
    pub includes_naxxramas: bool,
    pub includes_promotion: bool,
}

impl MissingCardsReport {
    /// Builds the report for the deck's missing cards.
    /// Returns `None` when nothing is missing.
    pub fn from_deck(deck: &Deck) -> Option<Self> {
        Self::from_cards(&deck.missing_cards)
    }

    pub fn from_cards(missing: &[Card]) -> Option<Self> {
        if missing.is_empty() {
            return None;
        }

        let mut report = Self {
            entries: Vec::with_capacity(missing.len()),
            total_dust: 0,
            includes_naxxramas: false,
            includes_promotion: false,
        };

        for card in missing {
            report.entries.push(MissingEntry::from_card(card));

            if card.is_in_set(NAXXRAMAS_SET) {
                report.includes_naxxramas = true;
            } else if card.is_in_set(PROMOTION_SET) {
                report.includes_promotion = true;
            } else {
                let cost = u64::from(dust_cost(card.rarity())).saturating_mul(u64::from(card.count));
                report.total_dust = report.total_dust.saturating_add(cost);
            }
        }

        Some(report)
    }

    /// Renders the report as dialog text
    pub fn render(&self) -> String {
        let mut message = String::from(HEADER);
        for entry in &self.entries {
            message.push_str(&entry.line());
        }

        let nax = if self.includes_naxxramas { NAXXRAMAS_NOTE } else { "" };
        let promo = if self.includes_promotion { PROMOTION_NOTE } else { "" };
        message.push_str(&format!(
            "\n\nYou need {} dust {}{}\nto craft the missing cards.",
            self.total_dust, nax, promo
        ));
        message
    }
}

/// Report text for the deck's missing cards, or an empty string when
/// nothing is missing. Callers should check for the empty case before
/// showing anything.
pub fn missing_cards_message(deck: &Deck) -> String {
    MissingCardsReport::from_deck(deck)
        .map(|report| report.render())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_missing(cards: Vec<Card>) -> Deck {
        let mut deck = Deck::new("Test", "Mage", cards.clone());
        deck.missing_cards = cards;
        deck
    }

    #[test]
    fn test_dust_table() {
        assert_eq!(dust_cost(Rarity::Common), 40);
        assert_eq!(dust_cost(Rarity::Rare), 100);
        assert_eq!(dust_cost(Rarity::Epic), 400);
        assert_eq!(dust_cost(Rarity::Legendary), 1600);
        assert_eq!(dust_cost(Rarity::Unknown), 0);
    }

    #[test]
    fn test_no_missing_cards_is_empty() {
        let deck = Deck::new(
            "Full",
            "Mage",
            vec![Card::new("CS2_029", "Fireball", "Common", "Basic", 2)],
        );
        assert_eq!(missing_cards_message(&deck), "");
        assert!(MissingCardsReport::from_deck(&deck).is_none());
    }

    #[test]
    fn test_single_common() {
        let deck = deck_missing(vec![Card::new("EX1_012", "Bloodmage Thalnos", "Common", "Expert", 1)]);
        let report = MissingCardsReport::from_deck(&deck).unwrap();
        assert_eq!(report.total_dust, 40);

        let message = report.render();
        assert!(message.starts_with("The following cards were \nnot found:\n"));
        assert!(message.contains("\n• Bloodmage Thalnos\n"));
        assert!(!message.contains("×2"));
        assert!(!message.contains("Naxxramas"));
        assert!(!message.contains("Promotion"));
        assert!(message.ends_with("You need 40 dust \nto craft the missing cards."));
    }

    #[test]
    fn test_legendary_pair() {
        let deck = deck_missing(vec![Card::new("NEW1_030", "Deathwing", "Legendary", "Expert", 2)]);
        let message = missing_cards_message(&deck);
        assert!(message.contains("• Deathwing ×2"));
        assert!(message.contains("You need 3200 dust"));
    }

    #[test]
    fn test_exact_layout() {
        let deck = deck_missing(vec![
            Card::new("EX1_001", "Lightwarden", "Rare", "Expert", 1),
            Card::new("EX1_620", "Molten Giant", "Epic", "Expert", 2),
        ]);
        assert_eq!(
            missing_cards_message(&deck),
            "The following cards were \nnot found:\n\n• Lightwarden\n• Molten Giant ×2\n\nYou need 900 dust \nto craft the missing cards."
        );
    }

    #[test]
    fn test_naxxramas_only() {
        let deck = deck_missing(vec![
            Card::new("FP1_014", "Stalagg", "Rare", "Curse of Naxxramas", 1),
            Card::new("FP1_015", "Feugen", "Rare", "curse of naxxramas", 1),
        ]);
        let report = MissingCardsReport::from_deck(&deck).unwrap();
        assert_eq!(report.total_dust, 0);
        assert!(report.includes_naxxramas);
        assert!(!report.includes_promotion);

        let message = report.render();
        assert!(message.contains("You need 0 dust \nand the Naxxramas DLC \nto craft"));
    }

    #[test]
    fn test_promotion_and_normal_set() {
        let deck = deck_missing(vec![
            Card::new("EX1_062", "Old Murk-Eye", "Legendary", "Promotion", 1),
            Card::new("EX1_116", "Leeroy Jenkins", "Legendary", "Expert", 1),
            Card::new("EX1_029", "Leper Gnome", "Common", "Expert", 2),
        ]);
        let report = MissingCardsReport::from_deck(&deck).unwrap();
        assert_eq!(report.total_dust, 1600 + 80);
        assert!(report.includes_promotion);
        assert!(!report.includes_naxxramas);

        let message = report.render();
        assert!(message.contains("• Old Murk-Eye"));
        assert!(message.contains("You need 1680 dust \nand Promotion cards \nto craft"));
    }

    #[test]
    fn test_both_notes_in_order() {
        let deck = deck_missing(vec![
            Card::new("EX1_062", "Old Murk-Eye", "Legendary", "PROMOTION", 1),
            Card::new("FP1_030", "Loatheb", "Legendary", "CURSE OF NAXXRAMAS", 1),
        ]);
        let message = missing_cards_message(&deck);
        assert!(message.contains(
            "You need 0 dust \nand the Naxxramas DLC \nand Promotion cards \nto craft the missing cards."
        ));
    }

    #[test]
    fn test_unknown_rarity_is_free() {
        let deck = deck_missing(vec![
            Card::new("CS2_065", "Voidwalker", "Free", "Basic", 2),
            Card::new("XXX_001", "Mystery", "", "Expert", 1),
        ]);
        let report = MissingCardsReport::from_deck(&deck).unwrap();
        assert_eq!(report.total_dust, 0);
        assert_eq!(report.entries.len(), 2);
    }

    #[test]
    fn test_counts_above_two_have_no_suffix() {
        let deck = deck_missing(vec![Card::new("EX1_029", "Leper Gnome", "Common", "Expert", 3)]);
        let message = missing_cards_message(&deck);
        assert!(message.contains("\n• Leper Gnome\n"));
        assert!(!message.contains("×"));
        assert!(message.contains("You need 120 dust"));
    }

    #[test]
    fn test_huge_counts_do_not_overflow() {
        let deck = deck_missing(vec![Card::new(
            "EX1_116",
            "Leeroy Jenkins",
            "Legendary",
            "Expert",
            3_000_000,
        )]);
        assert!(missing_cards_message(&deck).contains("You need 4800000000 dust"));

        let deck = deck_missing(vec![
            Card::new("EX1_116", "Leeroy Jenkins", "Legendary", "Expert", u32::MAX),
            Card::new("EX1_002", "The Black Knight", "Legendary", "Expert", u32::MAX),
        ]);
        let report = MissingCardsReport::from_deck(&deck).unwrap();
        assert_eq!(report.total_dust, 2 * 1600 * u64::from(u32::MAX));
    }

    #[test]
    fn test_localized_name_used() {
        let mut card = Card::new("CS2_029", "Fireball", "Common", "Expert", 1);
        card.localized_name = "Feuerball".to_string();
        let deck = deck_missing(vec![card]);
        let message = missing_cards_message(&deck);
        assert!(message.contains("• Feuerball"));
        assert!(!message.contains("Fireball"));
    }

    #[test]
    fn test_idempotent() {
        let deck = deck_missing(vec![
            Card::new("EX1_116", "Leeroy Jenkins", "Legendary", "Expert", 1),
            Card::new("FP1_014", "Stalagg", "Rare", "Curse of Naxxramas", 1),
        ]);
        assert_eq!(missing_cards_message(&deck), missing_cards_message(&deck));
    }
}
