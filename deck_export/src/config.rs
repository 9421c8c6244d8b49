use crate::error::ExportResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application settings passed to every export action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// Exporter clears an already open deck instead of requiring an empty one
    pub auto_clear_deck: bool,
    /// Root for the `SavedDecks` and `Screenshots` folders
    pub data_dir: PathBuf,
    /// Wait before the exporter starts driving the game client
    pub export_delay_ms: u64,
    /// Wait for the render surface to draw before capturing it
    pub screenshot_render_delay_ms: u64,
    /// Game window width/height ratio above which missing cards go to the overlay
    pub overlay_aspect_threshold: f32,
    /// Owned-card collection used to find missing cards
    pub collection_path: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            auto_clear_deck: false,
            data_dir: Self::default_data_dir(),
            export_delay_ms: 500,
            screenshot_render_delay_ms: 100,
            overlay_aspect_threshold: 1.5,
            collection_path: None,
        }
    }
}

impl ExportConfig {
    /// ~/.local/share/hs_deck_export on Linux
    fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hs_deck_export")
    }

    /// Get the default config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hs_deck_export")
            .join("config.json")
    }

    pub fn export_delay(&self) -> Duration {
        Duration::from_millis(self.export_delay_ms)
    }

    pub fn screenshot_render_delay(&self) -> Duration {
        Duration::from_millis(self.screenshot_render_delay_ms)
    }

    /// Load config from the default location, or defaults if missing
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`; unreadable or invalid files fall back to defaults
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        log::warn!("Failed to parse config file, using defaults: {}", e);
                    }
                },
                Err(e) => {
                    log::warn!("Failed to read config file, using defaults: {}", e);
                }
            }
        }
        log::info!("Using default config");
        Self::default()
    }

    /// Save config to the default location
    pub fn save(&self) -> ExportResult<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> ExportResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        log::debug!("Saved config to {}", path.display());
        Ok(())
    }
}
