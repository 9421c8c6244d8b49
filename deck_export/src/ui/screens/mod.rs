mod deck;

pub use deck::DeckScreen;
