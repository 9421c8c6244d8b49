use eframe::egui;
use std::path::{Path, PathBuf};

/// Path field with a Browse button for opening deck files
pub struct DeckFilePicker<'a> {
    path: &'a mut String,
    saved_decks: &'a Path,
    extension: &'a str,
}

impl<'a> DeckFilePicker<'a> {
    /// `extension` is the deck store's extension, with or without the dot
    pub fn new(path: &'a mut String, saved_decks: &'a Path, extension: &'a str) -> Self {
        Self {
            path,
            saved_decks,
            extension,
        }
    }

    /// The Browse dialog opens in the saved-decks folder once it exists
    fn start_folder(&self) -> Option<&Path> {
        self.saved_decks.is_dir().then_some(self.saved_decks)
    }

    /// Returns the file picked through the dialog this frame, if any
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<PathBuf> {
        let mut picked = None;
        ui.horizontal(|ui| {
            ui.label("Deck file:");
            if ui.button("Browse").clicked() {
                let extension = self.extension.trim_start_matches('.');
                let mut dialog = rfd::FileDialog::new().add_filter("Deck", &[extension]);
                if let Some(folder) = self.start_folder() {
                    dialog = dialog.set_directory(folder);
                }
                picked = dialog.pick_file();
            }
            ui.text_edit_singleline(self.path);
        });

        if let Some(path) = &picked {
            *self.path = path.display().to_string();
        }
        picked
    }
}
