use eframe::egui;
use std::path::Path;

use crate::{
    actions::{ActionOutcome, ExportActions},
    error::ExportResult,
    io::read_deck_dir,
    paths::SAVED_DECKS_DIR,
    ui::{
        components::{DeckFilePicker, OutputWindow},
        dialogs::SharedFeedback,
        state::AppState,
    },
};

pub struct DeckScreen;

impl DeckScreen {
    pub fn show(
        ctx: &egui::Context,
        state: &mut AppState,
        actions: &mut ExportActions,
        feedback: &SharedFeedback,
    ) {
        egui::SidePanel::left("deck_list")
            .resizable(true)
            .default_width(200.0)
            .show(ctx, |ui| {
                Self::show_deck_list(ui, state, actions);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Hearthstone Deck Export");
            ui.add_space(10.0);

            let saved_dir = actions.config.data_dir.join(SAVED_DECKS_DIR);
            let extension = actions.services.store.extension();
            let picked = DeckFilePicker::new(&mut state.deck_path, &saved_dir, extension).show(ui);
            if let Some(path) = picked {
                Self::load_deck_file(state, actions, &path);
            }

            ui.horizontal(|ui| {
                ui.label("Deck URL:");
                ui.text_edit_singleline(&mut state.import_url);
                if ui.button("Export from URL").clicked() {
                    let url = state.import_url.trim().to_string();
                    let url = (!url.is_empty()).then_some(url);
                    let result = actions.export_from_url(url.as_deref());
                    Self::report(state, "Export from URL", result);
                }
            });

            ui.separator();

            match state.selected_deck().cloned() {
                Some(deck) => {
                    ui.label(format!("{} - {}", deck.name, deck.class));
                    ui.horizontal_wrapped(|ui| {
                        if ui.button("Export").clicked() {
                            let selected = state.selected.and_then(|i| state.decks.get_mut(i));
                            let result = actions.export_selected(selected);
                            Self::report(state, "Export", result);
                        }
                        if ui.button("Screenshot").clicked() {
                            let result = actions.screenshot_selected(Some(&deck));
                            Self::report(state, "Screenshot", result);
                        }
                        if ui.button("Save to file").clicked() {
                            let result = actions.save_selected_to_file(Some(&deck));
                            Self::report(state, "Save", result);
                            Self::reload_saved_decks(state, actions);
                        }
                        if ui.button("Copy id to clipboard").clicked() {
                            let result = actions.copy_selected_to_clipboard(Some(&deck));
                            Self::report(state, "Copy", result);
                        }
                        if ui.button("Missing dust").clicked() {
                            let result = actions.show_missing_dust(Some(&deck));
                            Self::report(state, "Missing dust", result);
                        }
                    });
                    ui.add_space(6.0);
                    Self::show_card_list(ui, &deck);
                }
                None => {
                    ui.label("Select or open a deck.");
                }
            }

            if !state.status.is_empty() {
                ui.separator();
                ui.label(&state.status);
            }
        });

        Self::show_feedback(ctx, state, feedback);
    }

    fn show_deck_list(ui: &mut egui::Ui, state: &mut AppState, actions: &ExportActions) {
        ui.horizontal(|ui| {
            ui.heading("Decks");
            if ui.small_button("Reload").clicked() {
                Self::reload_saved_decks(state, actions);
            }
        });
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            for i in 0..state.decks.len() {
                let selected = state.selected == Some(i);
                let label = format!("{} ({})", state.decks[i].name, state.decks[i].class);
                if ui.selectable_label(selected, label).clicked() {
                    state.selected = Some(i);
                }
            }
        });
    }

    fn show_card_list(ui: &mut egui::Ui, deck: &hs_common::Deck) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("card_list").striped(true).show(ui, |ui| {
                for card in &deck.cards {
                    ui.label(card.cost.to_string());
                    ui.label(card.display_name());
                    ui.label(card.rarity().as_str());
                    ui.label(format!("x{}", card.count));
                    ui.end_row();
                }
            });
            ui.label(format!("{} cards", deck.card_total()));
        });
    }

    fn show_feedback(ctx: &egui::Context, state: &mut AppState, feedback: &SharedFeedback) {
        let mut feedback = feedback.borrow_mut();

        if let Some(message) = feedback.missing_cards.take() {
            state.missing_window_content = message;
            state.show_missing_window = true;
        }
        if state.show_missing_window {
            OutputWindow::new(
                "Missing cards",
                &state.missing_window_content,
                &mut state.show_missing_window,
            )
            .show(ctx);
        }

        if let Some(progress) = &feedback.progress {
            egui::TopBottomPanel::bottom("progress").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(progress);
                });
            });
        }

        let mut close_overlay = false;
        if let Some(overlay) = &feedback.overlay {
            egui::Area::new(egui::Id::new("missing_cards_overlay"))
                .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.label(overlay);
                        if ui.button("Dismiss").clicked() {
                            close_overlay = true;
                        }
                    });
                });
        }
        if close_overlay {
            feedback.overlay = None;
        }
    }

    fn load_deck_file(state: &mut AppState, actions: &ExportActions, path: &Path) {
        match actions.services.store.load(path) {
            Ok(deck) => {
                log::info!("Opened {}", deck.info());
                state.status = format!("Opened {}", deck.name);
                state.add_deck(deck);
            }
            Err(e) => {
                log::error!("Failed to open {}: {}", path.display(), e);
                state.status = format!("Error: {e}");
            }
        }
    }

    pub fn reload_saved_decks(state: &mut AppState, actions: &ExportActions) {
        let dir = actions.config.data_dir.join(SAVED_DECKS_DIR);
        match read_deck_dir(&dir) {
            Ok(decks) => {
                log::debug!("Found {} saved decks in {}", decks.len(), dir.display());
                state.merge_saved_decks(decks);
            }
            Err(e) => state.status = format!("Error reading saved decks: {e}"),
        }
    }

    fn report(state: &mut AppState, action: &str, result: ExportResult<ActionOutcome>) {
        state.status = match result {
            Ok(ActionOutcome::NoSelection) => "No deck selected".to_string(),
            Ok(ActionOutcome::Cancelled) => format!("{action} cancelled"),
            Ok(ActionOutcome::Exported { missing: 0 }) => "Deck exported".to_string(),
            Ok(ActionOutcome::Exported { missing }) => {
                format!("Deck exported, {missing} cards missing")
            }
            Ok(ActionOutcome::Saved(path)) => format!("Saved to {}", path.display()),
            Ok(ActionOutcome::Copied) => "Deck id copied".to_string(),
            Ok(ActionOutcome::Reported) => String::new(),
            Ok(ActionOutcome::NothingToReport) => "No missing cards recorded".to_string(),
            Ok(ActionOutcome::Failed) => format!("{action} failed"),
            Err(e) => {
                log::error!("{} failed: {}", action, e);
                format!("Error: {e}")
            }
        };
    }
}
