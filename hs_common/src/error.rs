//! Error types shared by the deck tooling crates

/// Errors raised while building or decoding decks
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("Invalid deck id string entry '{entry}': {reason}")]
    InvalidIdString { entry: String, reason: String },

    #[error("Deck id string is empty")]
    EmptyIdString,
}

/// Result alias for deck operations
pub type Result<T> = std::result::Result<T, DeckError>;
