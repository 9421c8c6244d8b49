mod file_picker;
mod output_window;

pub use file_picker::DeckFilePicker;
pub use output_window::OutputWindow;
