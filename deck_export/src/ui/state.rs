use hs_common::Deck;

#[derive(Default)]
pub struct AppState {
    pub deck_path: String,
    pub decks: Vec<Deck>,
    pub selected: Option<usize>,
    pub import_url: String,
    pub status: String,
    pub show_missing_window: bool,
    pub missing_window_content: String,
}

impl AppState {
    pub fn selected_deck(&self) -> Option<&Deck> {
        self.selected.and_then(|i| self.decks.get(i))
    }

    /// Adds `deck` unless one with the same name is listed, and selects it
    pub fn add_deck(&mut self, deck: Deck) {
        let index = match self.decks.iter().position(|d| d.name == deck.name) {
            Some(i) => {
                self.decks[i] = deck;
                i
            }
            None => {
                self.decks.push(deck);
                self.decks.len() - 1
            }
        };
        self.selected = Some(index);
    }

    /// Folds decks read from the saved-decks folder into the list.
    ///
    /// Decks already listed are refreshed from disk but keep the missing
    /// cards recorded by their last export. Decks opened from elsewhere
    /// stay listed, and the selection is left on the same deck.
    pub fn merge_saved_decks(&mut self, saved: Vec<Deck>) {
        for mut deck in saved {
            match self.decks.iter().position(|d| d.name == deck.name) {
                Some(i) => {
                    deck.missing_cards = std::mem::take(&mut self.decks[i].missing_cards);
                    self.decks[i] = deck;
                }
                None => self.decks.push(deck),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{read_deck_dir, JsonDeckStore};
    use crate::missing_cards::missing_cards_message;
    use crate::services::DeckStore;
    use hs_common::Card;
    use tempfile::TempDir;

    #[test]
    fn test_add_deck_selects_it() {
        let mut state = AppState::default();
        assert!(state.selected_deck().is_none());

        state.add_deck(Deck::new("Zoo", "Warlock", Vec::new()));
        state.add_deck(Deck::new("Freeze", "Mage", Vec::new()));
        assert_eq!(state.selected_deck().unwrap().name, "Freeze");
    }

    #[test]
    fn test_add_deck_replaces_same_name() {
        let mut state = AppState::default();
        state.add_deck(Deck::new("Zoo", "Warlock", Vec::new()));
        state.add_deck(Deck::new("Freeze", "Mage", Vec::new()));
        state.add_deck(Deck::new("Zoo", "Paladin", Vec::new()));

        assert_eq!(state.decks.len(), 2);
        assert_eq!(state.selected, Some(0));
        assert_eq!(state.selected_deck().unwrap().class, "Paladin");
    }

    #[test]
    fn test_merge_keeps_missing_cards_after_save() {
        let temp_dir = TempDir::new().unwrap();
        let leeroy = Card::new("EX1_116", "Leeroy Jenkins", "Legendary", "Expert", 1);

        let mut state = AppState::default();
        state.add_deck(Deck::new("Elsewhere", "Priest", Vec::new()));
        state.add_deck(Deck::new("Zoo", "Warlock", vec![leeroy.clone()]));
        state.decks[1].missing_cards = vec![leeroy];

        let deck = state.selected_deck().unwrap().clone();
        JsonDeckStore
            .save(&deck, &temp_dir.path().join("Zoo.json"))
            .unwrap();
        JsonDeckStore
            .save(
                &Deck::new("Aggro", "Hunter", Vec::new()),
                &temp_dir.path().join("Aggro.json"),
            )
            .unwrap();

        state.merge_saved_decks(read_deck_dir(temp_dir.path()).unwrap());

        let names: Vec<&str> = state.decks.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Elsewhere", "Zoo", "Aggro"]);
        assert_eq!(state.selected_deck().unwrap().name, "Zoo");
        assert_eq!(state.selected_deck().unwrap().missing_cards.len(), 1);
        assert!(missing_cards_message(state.selected_deck().unwrap()).contains("You need 1600 dust"));
    }

    #[test]
    fn test_merge_refreshes_listed_deck_from_disk() {
        let mut state = AppState::default();
        state.add_deck(Deck::new("Zoo", "Warlock", Vec::new()));

        state.merge_saved_decks(vec![Deck::new("Zoo", "Paladin", Vec::new())]);

        assert_eq!(state.decks.len(), 1);
        assert_eq!(state.selected_deck().unwrap().class, "Paladin");
    }
}
