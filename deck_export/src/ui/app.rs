use std::cell::RefCell;
use std::rc::Rc;

use eframe::{self, egui};
use egui::ViewportBuilder;

use super::{
    dialogs::{DesktopWindow, Feedback, RfdDialogs, SharedFeedback},
    screens::DeckScreen,
    state::AppState,
};
use crate::{
    actions::ExportActions,
    clipboard::SystemClipboard,
    collection::CollectionExporter,
    config::ExportConfig,
    deck_image::DeckImageSurface,
    import::UrlDeckImporter,
    io::{JsonDeckStore, SystemFolderOpener},
    services::{Services, ThreadPause},
};

pub struct DeckExportApp {
    state: AppState,
    actions: ExportActions,
    feedback: SharedFeedback,
}

impl DeckExportApp {
    fn new(cc: &eframe::CreationContext<'_>, config: ExportConfig) -> Self {
        let feedback: SharedFeedback = Rc::new(RefCell::new(Feedback::default()));

        let exporter = match &config.collection_path {
            Some(path) => CollectionExporter::from_file(path).unwrap_or_else(|e| {
                log::warn!("Failed to load collection {}: {}", path.display(), e);
                CollectionExporter::default()
            }),
            None => {
                log::warn!("No collection configured, every card will be reported missing");
                CollectionExporter::default()
            }
        };

        let services = Services {
            dialogs: Box::new(RfdDialogs::new(Rc::clone(&feedback))),
            window: Box::new(DesktopWindow::new(cc.egui_ctx.clone(), Rc::clone(&feedback))),
            exporter: Box::new(exporter),
            surface: Box::new(DeckImageSurface::new(
                cc.egui_ctx.pixels_per_point() as f64,
            )),
            store: Box::new(JsonDeckStore),
            clipboard: Box::new(SystemClipboard::new()),
            importer: Box::new(UrlDeckImporter),
            opener: Box::new(SystemFolderOpener),
            pause: Box::new(ThreadPause),
        };

        let mut app = Self {
            state: AppState::default(),
            actions: ExportActions::new(config, services),
            feedback,
        };
        DeckScreen::reload_saved_decks(&mut app.state, &app.actions);
        app
    }
}

impl eframe::App for DeckExportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        DeckScreen::show(ctx, &mut self.state, &mut self.actions, &self.feedback);
    }
}

pub fn launch_gui(config: ExportConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Hearthstone Deck Export",
        options,
        Box::new(|cc| Ok(Box::new(DeckExportApp::new(cc, config)))),
    )
}
