mod app;
mod components;
mod dialogs;
mod screens;
mod state;

pub use app::launch_gui;
pub use dialogs::{DesktopWindow, Feedback, RfdDialogs};
