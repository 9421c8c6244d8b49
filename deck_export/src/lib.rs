pub mod actions;
pub mod clipboard;
pub mod collection;
pub mod config;
pub mod deck_image;
pub mod error;
pub mod import;
pub mod io;
pub mod missing_cards;
pub mod paths;
pub mod services;
pub mod ui;

// Re-export commonly used items
pub use actions::{ActionOutcome, ExportActions, MissingCardsDisplay};
pub use config::ExportConfig;
pub use error::{ExportError, ExportResult};
pub use missing_cards::{dust_cost, missing_cards_message, MissingCardsReport};
pub use services::Services;
