//! Shared types for Hearthstone deck tooling: cards, decks and their errors.

pub mod card;
pub mod deck;
pub mod error;

pub use card::{Card, Rarity};
pub use deck::Deck;
pub use error::DeckError;
