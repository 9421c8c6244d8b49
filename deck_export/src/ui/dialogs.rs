//! Desktop implementations of the dialog and game-window services.

use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::services::{DialogChoice, Dialogs, GameWindow, WindowRect};

/// Messages the actions hand back to the window for display
#[derive(Debug, Default)]
pub struct Feedback {
    pub progress: Option<String>,
    pub missing_cards: Option<String>,
    pub overlay: Option<String>,
}

pub type SharedFeedback = Rc<RefCell<Feedback>>;

/// Native message boxes through `rfd`
pub struct RfdDialogs {
    feedback: SharedFeedback,
}

impl RfdDialogs {
    pub fn new(feedback: SharedFeedback) -> Self {
        Self { feedback }
    }
}

fn picked(result: &MessageDialogResult, label: &str) -> bool {
    match result {
        MessageDialogResult::Custom(chosen) => chosen == label,
        MessageDialogResult::Ok | MessageDialogResult::Yes => label == "OK",
        _ => false,
    }
}

impl Dialogs for RfdDialogs {
    fn confirm(&mut self, title: &str, message: &str, affirmative: &str) -> bool {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::OkCancelCustom(
                affirmative.to_string(),
                "cancel".to_string(),
            ))
            .show();
        picked(&result, affirmative)
    }

    fn show_message(&mut self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn ask(&mut self, title: &str, message: &str, negative: &str) -> DialogChoice {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::OkCancelCustom(
                "OK".to_string(),
                negative.to_string(),
            ))
            .show();
        if picked(&result, negative) {
            DialogChoice::Negative
        } else {
            DialogChoice::Affirmative
        }
    }

    fn show_progress(&mut self, title: &str, message: &str) {
        log::info!("{}: {}", title, message);
        self.feedback.borrow_mut().progress = Some(format!("{title}: {message}"));
    }

    fn close_progress(&mut self) {
        self.feedback.borrow_mut().progress = None;
    }

    fn show_missing_cards(&mut self, message: &str) {
        self.feedback.borrow_mut().missing_cards = Some(message.to_string());
    }
}

/// Our own window; the game client is not tracked on this build
pub struct DesktopWindow {
    ctx: egui::Context,
    feedback: SharedFeedback,
}

impl DesktopWindow {
    pub fn new(ctx: egui::Context, feedback: SharedFeedback) -> Self {
        Self { ctx, feedback }
    }
}

impl GameWindow for DesktopWindow {
    fn rect(&self) -> Option<WindowRect> {
        None
    }

    fn set_topmost(&mut self, topmost: bool) {
        let level = if topmost {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        };
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::WindowLevel(level));
    }

    fn show_missing_cards_overlay(&mut self, message: &str) {
        self.feedback.borrow_mut().overlay = Some(message.to_string());
    }
}
