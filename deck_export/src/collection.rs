//! Exporter that checks a deck against the user's card collection.

use crate::error::ExportResult;
use crate::io::read_collection;
use crate::services::DeckExporter;
use hs_common::{Card, Deck};
use std::collections::HashMap;
use std::path::Path;

/// Finds which deck cards are not covered by the owned collection
#[derive(Debug, Default, Clone)]
pub struct CollectionExporter {
    owned: HashMap<String, u32>,
}

impl CollectionExporter {
    pub fn new(owned: HashMap<String, u32>) -> Self {
        Self { owned }
    }

    pub fn from_file(path: &Path) -> ExportResult<Self> {
        Ok(Self::new(read_collection(path)?))
    }

    /// Copies of `id` the user owns
    pub fn owned(&self, id: &str) -> u32 {
        self.owned.get(id).copied().unwrap_or(0)
    }

    /// Deck cards with fewer owned copies than needed, carrying the shortfall as count
    pub fn missing_cards(&self, deck: &Deck) -> Vec<Card> {
        deck.cards
            .iter()
            .filter_map(|card| {
                let shortfall = card.count.saturating_sub(self.owned(&card.id));
                (shortfall > 0).then(|| Card {
                    count: shortfall,
                    ..card.clone()
                })
            })
            .collect()
    }
}

impl DeckExporter for CollectionExporter {
    fn export(&mut self, deck: &Deck) -> ExportResult<Vec<Card>> {
        let missing = self.missing_cards(deck);
        log::info!(
            "Checked {} against collection: {} of {} cards missing",
            deck.info(),
            missing.len(),
            deck.cards.len()
        );
        Ok(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(entries: &[(&str, u32)]) -> CollectionExporter {
        CollectionExporter::new(
            entries
                .iter()
                .map(|(id, count)| (id.to_string(), *count))
                .collect(),
        )
    }

    fn deck() -> Deck {
        Deck::new(
            "Midrange",
            "Druid",
            vec![
                Card::new("EX1_169", "Innervate", "Free", "Basic", 2),
                Card::new("EX1_571", "Force of Nature", "Epic", "Expert", 2),
                Card::new("EX1_298", "Ragnaros the Firelord", "Legendary", "Expert", 1),
            ],
        )
    }

    #[test]
    fn test_fully_owned_deck_has_no_missing_cards() {
        let exporter = owned(&[("EX1_169", 2), ("EX1_571", 2), ("EX1_298", 1)]);
        assert!(exporter.missing_cards(&deck()).is_empty());
    }

    #[test]
    fn test_shortfall_becomes_count() {
        let exporter = owned(&[("EX1_169", 2), ("EX1_571", 1)]);
        let missing = exporter.missing_cards(&deck());

        assert_eq!(missing.len(), 2);
        assert_eq!(missing[0].name, "Force of Nature");
        assert_eq!(missing[0].count, 1);
        assert_eq!(missing[1].name, "Ragnaros the Firelord");
        assert_eq!(missing[1].count, 1);
    }

    #[test]
    fn test_extra_owned_copies_do_not_matter() {
        let exporter = owned(&[("EX1_169", 5), ("EX1_571", 3), ("EX1_298", 2)]);
        assert!(exporter.missing_cards(&deck()).is_empty());
    }

    #[test]
    fn test_export_returns_missing_cards() {
        let mut exporter = owned(&[]);
        let missing = exporter.export(&deck()).unwrap();
        assert_eq!(missing.len(), 3);
        assert_eq!(missing.iter().map(|c| c.count).sum::<u32>(), 5);
    }
}
