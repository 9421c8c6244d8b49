//! Collaborators the export actions talk to.
//!
//! Each trait hides one outside concern (dialogs, the game window, the
//! exporter, files, clipboard, network) so actions can run against the
//! desktop implementations or against fakes.

use crate::error::ExportResult;
use hs_common::{Card, Deck};
use std::path::Path;
use std::time::Duration;

/// Button picked in a two-button dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    Affirmative,
    Negative,
}

pub trait Dialogs {
    /// Asks a yes/no question. Returns `true` when the affirmative button was chosen.
    fn confirm(&mut self, title: &str, message: &str, affirmative: &str) -> bool;

    fn show_message(&mut self, title: &str, message: &str);

    /// Shows a message with an OK button and an extra `negative` button.
    fn ask(&mut self, title: &str, message: &str, negative: &str) -> DialogChoice;

    fn show_progress(&mut self, title: &str, message: &str);

    fn close_progress(&mut self);

    fn show_missing_cards(&mut self, message: &str);
}

/// Size of the game client window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRect {
    pub width: u32,
    pub height: u32,
}

impl WindowRect {
    /// Width divided by height, `None` for a collapsed window
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.height == 0 {
            None
        } else {
            Some(self.width as f32 / self.height as f32)
        }
    }
}

pub trait GameWindow {
    /// Current game client rect, `None` when the client is not running
    fn rect(&self) -> Option<WindowRect>;

    /// Keeps our own window above the game or lets it drop behind
    fn set_topmost(&mut self, topmost: bool);

    fn show_missing_cards_overlay(&mut self, message: &str);
}

pub trait DeckExporter {
    /// Builds `deck` in the game client and returns the cards that could not be found
    fn export(&mut self, deck: &Deck) -> ExportResult<Vec<Card>>;
}

/// Capture resolution in dots per inch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dpi {
    pub x: f64,
    pub y: f64,
}

impl Dpi {
    pub const BASE: f64 = 96.0;

    /// DPI for a surface scaled by `scale_x` / `scale_y` relative to 96 DPI
    pub fn from_scale(scale_x: f64, scale_y: f64) -> Self {
        Self {
            x: Self::BASE * scale_x,
            y: Self::BASE * scale_y,
        }
    }
}

/// Window or offscreen buffer the deck list is drawn on for screenshots
pub trait RenderSurface {
    fn open(&mut self, cards: &[Card]) -> ExportResult<()>;

    /// Device scale per axis, `None` if the surface never got drawn
    fn scale_factor(&self) -> Option<(f64, f64)>;

    fn capture(&mut self, dpi: Dpi, path: &Path) -> ExportResult<()>;

    fn close(&mut self);

    /// Extension of the captured file, including the dot
    fn extension(&self) -> &'static str {
        ".png"
    }
}

pub trait DeckStore {
    /// Extension of deck files, including the dot
    fn extension(&self) -> &'static str;

    fn save(&self, deck: &Deck, path: &Path) -> ExportResult<()>;

    fn load(&self, path: &Path) -> ExportResult<Deck>;
}

pub trait ClipboardWriter {
    fn set_text(&mut self, text: &str) -> ExportResult<()>;
}

pub trait DeckImporter {
    fn import(&self, url: &str) -> ExportResult<Deck>;
}

pub trait FolderOpener {
    fn open(&self, path: &Path) -> ExportResult<()>;
}

pub trait Pause {
    fn pause(&self, duration: Duration);
}

/// Blocks the current thread
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPause;

impl Pause for ThreadPause {
    fn pause(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Everything the export actions need from the outside world
pub struct Services {
    pub dialogs: Box<dyn Dialogs>,
    pub window: Box<dyn GameWindow>,
    pub exporter: Box<dyn DeckExporter>,
    pub surface: Box<dyn RenderSurface>,
    pub store: Box<dyn DeckStore>,
    pub clipboard: Box<dyn ClipboardWriter>,
    pub importer: Box<dyn DeckImporter>,
    pub opener: Box<dyn FolderOpener>,
    pub pause: Box<dyn Pause>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dpi_from_scale() {
        assert_eq!(Dpi::from_scale(1.0, 1.0), Dpi { x: 96.0, y: 96.0 });
        assert_eq!(Dpi::from_scale(1.5, 2.0), Dpi { x: 144.0, y: 192.0 });
    }

    #[test]
    fn test_aspect_ratio() {
        let wide = WindowRect { width: 1920, height: 1080 };
        assert!((wide.aspect_ratio().unwrap() - 1.777).abs() < 0.01);

        let collapsed = WindowRect { width: 800, height: 0 };
        assert!(collapsed.aspect_ratio().is_none());
    }
}
