//! Deck import from a URL.
//!
//! The URL may serve a deck as JSON or as a plain `id:count;...` string.

use crate::error::{ExportError, ExportResult};
use crate::services::DeckImporter;
use hs_common::Deck;

const USER_AGENT: &str = "HS-Deck-Export/1.0";
const FALLBACK_DECK_NAME: &str = "Imported Deck";

/// Fetch a deck from `url`
pub fn fetch_deck(url: &str) -> ExportResult<Deck> {
    log::info!("Fetching deck from: {}", url);

    let response = reqwest::blocking::Client::new()
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()?;

    if !response.status().is_success() {
        return Err(ExportError::HttpStatus(response.status()));
    }

    let body = response.text()?;
    parse_deck_body(url, &body)
}

/// Decodes a downloaded deck. JSON objects are read as decks, anything else
/// as an id string named after the last URL path segment.
pub fn parse_deck_body(url: &str, body: &str) -> ExportResult<Deck> {
    let trimmed = body.trim_start();
    if trimmed.starts_with('{') {
        let deck: Deck = serde_json::from_str(trimmed)?;
        return Ok(deck);
    }

    let name = deck_name_from_url(url);
    Ok(Deck::from_id_string(&name, "", body)?)
}

fn deck_name_from_url(url: &str) -> String {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| {
            u.path_segments()
                .and_then(|mut segments| segments.rfind(|s| !s.is_empty()).map(str::to_string))
        })
        .map(|segment| match segment.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem.to_string(),
            _ => segment,
        })
        .unwrap_or_else(|| FALLBACK_DECK_NAME.to_string())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UrlDeckImporter;

impl DeckImporter for UrlDeckImporter {
    fn import(&self, url: &str) -> ExportResult<Deck> {
        fetch_deck(url)
    }
}
