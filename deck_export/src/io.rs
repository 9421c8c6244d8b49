use crate::error::{ExportError, ExportResult};
use crate::services::{DeckStore, FolderOpener};
use hs_common::Deck;
use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

/// Read a deck saved by [`JsonDeckStore`]
pub fn read_deck(path: &Path) -> ExportResult<Deck> {
    let content = std::fs::read_to_string(path)?;
    let deck: Deck = serde_json::from_str(&content)?;
    Ok(deck)
}

/// Read an owned-card collection: a JSON object of card id to copies owned
pub fn read_collection(path: &Path) -> ExportResult<HashMap<String, u32>> {
    let content = std::fs::read_to_string(path)?;
    let collection: HashMap<String, u32> = serde_json::from_str(&content)?;
    log::info!(
        "Loaded collection with {} cards from {}",
        collection.len(),
        path.display()
    );
    Ok(collection)
}

/// Lists every deck file in `dir`, skipping files that fail to parse
pub fn read_deck_dir(dir: &Path) -> ExportResult<Vec<Deck>> {
    let mut decks = Vec::new();
    if !dir.exists() {
        return Ok(decks);
    }

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        match read_deck(&path) {
            Ok(deck) => decks.push(deck),
            Err(e) => log::warn!("Skipping {}: {}", path.display(), e),
        }
    }

    decks.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(decks)
}

/// Stores decks as pretty-printed JSON
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonDeckStore;

impl DeckStore for JsonDeckStore {
    fn extension(&self) -> &'static str {
        ".json"
    }

    fn save(&self, deck: &Deck, path: &Path) -> ExportResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(deck)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn load(&self, path: &Path) -> ExportResult<Deck> {
        read_deck(path)
    }
}

/// Opens folders in the platform file browser
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemFolderOpener;

#[cfg(target_os = "windows")]
const FILE_BROWSER: &str = "explorer";
#[cfg(target_os = "macos")]
const FILE_BROWSER: &str = "open";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const FILE_BROWSER: &str = "xdg-open";

impl FolderOpener for SystemFolderOpener {
    fn open(&self, path: &Path) -> ExportResult<()> {
        log::debug!("Opening {} with {}", path.display(), FILE_BROWSER);
        Command::new(FILE_BROWSER)
            .arg(path)
            .spawn()
            .map(|_| ())
            .map_err(ExportError::from)
    }
}
