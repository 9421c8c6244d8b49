//! User-triggered deck actions: export, screenshot, save, copy, import.
//!
//! Every action runs to completion on the calling thread. Waits go through
//! the [`Pause`](crate::services::Pause) service and every dialog is modal.

use crate::config::ExportConfig;
use crate::error::{ExportError, ExportResult};
use crate::missing_cards::missing_cards_message;
use crate::paths::{valid_file_path, SAVED_DECKS_DIR, SCREENSHOTS_DIR};
use crate::services::{DialogChoice, Dpi, Services, WindowRect};
use hs_common::Deck;
use std::path::{Path, PathBuf};

/// Cards that need the golden-copy setting before exporting
const GOLDEN_SENSITIVE_CARDS: [&str; 2] = ["Stalagg", "Feugen"];

const GOLDEN_NOTE: &str = "\n\nIMPORTANT: If you own golden versions of Feugen or Stalagg please make sure to configure\nOptions > Other > Exporting";

/// What an action ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// No deck was selected
    NoSelection,
    /// The user backed out of a prompt
    Cancelled,
    /// The deck was built in the game client
    Exported { missing: usize },
    Saved(PathBuf),
    Copied,
    /// Missing-card report was shown
    Reported,
    /// The deck has no missing cards to report
    NothingToReport,
    /// A collaborator failed; the user has been told
    Failed,
}

/// Where the missing-card report is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingCardsDisplay {
    Overlay,
    Dialog,
}

impl MissingCardsDisplay {
    /// Wide game windows have room for the overlay; everything else gets a dialog
    pub fn for_window(rect: Option<WindowRect>, threshold: f32) -> Self {
        match rect.and_then(|r| r.aspect_ratio()) {
            Some(ratio) if ratio > threshold => MissingCardsDisplay::Overlay,
            _ => MissingCardsDisplay::Dialog,
        }
    }
}

pub struct ExportActions {
    pub config: ExportConfig,
    pub services: Services,
}

impl ExportActions {
    pub fn new(config: ExportConfig, services: Services) -> Self {
        Self { config, services }
    }

    /// Exports the selected deck and records its missing cards on it
    pub fn export_selected(&mut self, selected: Option<&mut Deck>) -> ExportResult<ActionOutcome> {
        match selected {
            Some(deck) => self.export_deck(deck),
            None => Ok(ActionOutcome::NoSelection),
        }
    }

    /// Confirmation text shown before the exporter takes over mouse and keyboard
    pub fn export_instructions(&self, deck: &Deck) -> String {
        let hint = if self.config.auto_clear_deck {
            "(or open an existing one to be cleared automatically)"
        } else {
            ""
        };
        let mut message = format!(
            "1) create a new, empty {}-Deck {}.\n\n2) leave the deck creation screen open.\n\n3)do not move your mouse or type after clicking \"export\"",
            deck.class, hint
        );

        if deck.contains_any(&GOLDEN_SENSITIVE_CARDS) {
            message.push_str(GOLDEN_NOTE);
        }
        message
    }

    pub fn export_deck(&mut self, deck: &mut Deck) -> ExportResult<ActionOutcome> {
        let message = self.export_instructions(deck);
        let title = format!("Export {} to Hearthstone", deck.name);
        if !self.services.dialogs.confirm(&title, &message, "export") {
            log::debug!("Export of {} cancelled", deck.info());
            return Ok(ActionOutcome::Cancelled);
        }

        self.services
            .dialogs
            .show_progress("Creating Deck", "Please do not move your mouse or type.");
        self.services.window.set_topmost(false);
        self.services.pause.pause(self.config.export_delay());

        let exported = self.services.exporter.export(deck);
        self.services.dialogs.close_progress();

        deck.missing_cards = match exported {
            Ok(missing) => missing,
            Err(e) => {
                log::error!("Failed to export {}: {}", deck.info(), e);
                self.services
                    .dialogs
                    .show_message("Error", "Could not export deck");
                return Ok(ActionOutcome::Failed);
            }
        };
        log::info!(
            "Exported {} ({} missing cards)",
            deck.info(),
            deck.missing_cards.len()
        );

        if !deck.missing_cards.is_empty() {
            let report = missing_cards_message(deck);
            let display = MissingCardsDisplay::for_window(
                self.services.window.rect(),
                self.config.overlay_aspect_threshold,
            );
            match display {
                MissingCardsDisplay::Overlay => {
                    self.services.window.show_missing_cards_overlay(&report)
                }
                MissingCardsDisplay::Dialog => self.services.dialogs.show_missing_cards(&report),
            }
        }

        Ok(ActionOutcome::Exported {
            missing: deck.missing_cards.len(),
        })
    }

    pub fn screenshot_selected(&mut self, selected: Option<&Deck>) -> ExportResult<ActionOutcome> {
        let Some(deck) = selected else {
            return Ok(ActionOutcome::NoSelection);
        };
        log::info!("Creating screenshot of {}", deck.info());

        let surface = &mut self.services.surface;
        if let Err(e) = surface.open(&deck.cards) {
            log::error!("Failed to open render surface: {}", e);
            self.services
                .dialogs
                .show_message("", "Error saving screenshot");
            return Ok(ActionOutcome::Failed);
        }
        self.services
            .pause
            .pause(self.config.screenshot_render_delay());

        let Some((scale_x, scale_y)) = surface.scale_factor() else {
            log::warn!("Render surface was not drawn, skipping screenshot");
            surface.close();
            return Ok(ActionOutcome::Failed);
        };
        let dpi = Dpi::from_scale(scale_x, scale_y);

        let extension = surface.extension();
        let captured = valid_file_path(&self.config.data_dir, SCREENSHOTS_DIR, &deck.name, extension)
            .map_err(ExportError::from)
            .and_then(|path| surface.capture(dpi, &path).map(|_| path));
        surface.close();

        match captured {
            Ok(path) => {
                self.show_saved_file_message(&path, SCREENSHOTS_DIR);
                Ok(ActionOutcome::Saved(path))
            }
            Err(e) => {
                log::error!("Failed to save screenshot: {}", e);
                self.services
                    .dialogs
                    .show_message("", "Error saving screenshot");
                Ok(ActionOutcome::Failed)
            }
        }
    }

    pub fn save_selected_to_file(&mut self, selected: Option<&Deck>) -> ExportResult<ActionOutcome> {
        let Some(deck) = selected else {
            return Ok(ActionOutcome::NoSelection);
        };

        let extension = self.services.store.extension();
        let path = valid_file_path(&self.config.data_dir, SAVED_DECKS_DIR, &deck.name, extension)?;
        if let Err(e) = self.services.store.save(deck, &path) {
            log::error!("Failed to save {}: {}", deck.info(), e);
            self.services.dialogs.show_message("Error", "Error saving deck");
            return Ok(ActionOutcome::Failed);
        }

        self.show_saved_file_message(&path, SAVED_DECKS_DIR);
        log::info!("Saved {} to file: {}", deck.info(), path.display());
        Ok(ActionOutcome::Saved(path))
    }

    pub fn copy_selected_to_clipboard(
        &mut self,
        selected: Option<&Deck>,
    ) -> ExportResult<ActionOutcome> {
        let Some(deck) = selected else {
            return Ok(ActionOutcome::NoSelection);
        };

        if let Err(e) = self.services.clipboard.set_text(&deck.to_id_string()) {
            log::error!("Failed to copy {} to clipboard: {}", deck.info(), e);
            self.services
                .dialogs
                .show_message("Error", "Could not copy to clipboard");
            return Ok(ActionOutcome::Failed);
        }

        self.services.dialogs.show_message("", "copied to clipboard");
        log::info!("Copied {} to clipboard", deck.info());
        Ok(ActionOutcome::Copied)
    }

    /// Tells the user where `path` was written and offers to open its folder.
    /// The file is already written, so a folder that fails to open is only logged.
    pub fn show_saved_file_message(&mut self, path: &Path, dir: &str) {
        let message = format!("Saved to\n\"{}\"", path.display());
        let choice = self.services.dialogs.ask("", &message, "Open folder");
        log::info!("Saved to {}", path.display());

        if choice == DialogChoice::Negative {
            let folder = self.config.data_dir.join(dir);
            if let Err(e) = self.services.opener.open(&folder) {
                log::error!("Failed to open folder {}: {}", folder.display(), e);
            }
        }
    }

    /// `url` is `None` when the user dismissed the URL prompt
    pub fn export_from_url(&mut self, url: Option<&str>) -> ExportResult<ActionOutcome> {
        let Some(url) = url else {
            return Ok(ActionOutcome::Cancelled);
        };

        match self.services.importer.import(url) {
            Ok(mut deck) => {
                log::info!("Imported {} from {}", deck.info(), url);
                self.export_deck(&mut deck)
            }
            Err(e) => {
                log::error!("Failed to import deck from {}: {}", url, e);
                self.services
                    .dialogs
                    .show_message("Error", "Could not load deck from specified url");
                Ok(ActionOutcome::Failed)
            }
        }
    }

    pub fn show_missing_dust(&mut self, selected: Option<&Deck>) -> ExportResult<ActionOutcome> {
        let Some(deck) = selected else {
            return Ok(ActionOutcome::NoSelection);
        };

        let report = missing_cards_message(deck);
        if report.is_empty() {
            log::debug!("No missing cards recorded for {}", deck.info());
            return Ok(ActionOutcome::NothingToReport);
        }

        self.services.dialogs.show_missing_cards(&report);
        Ok(ActionOutcome::Reported)
    }
}
