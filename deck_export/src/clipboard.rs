//! System clipboard access.

use crate::error::{ExportError, ExportResult};
use crate::services::ClipboardWriter;

/// Clipboard backed by `arboard`.
///
/// The handle is kept open after the first write: on X11 the copied text
/// disappears once its owner is dropped.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn clipboard(&mut self) -> ExportResult<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ExportError::Clipboard(format!("Failed to access clipboard: {}", e)))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ExportError::Clipboard("Clipboard unavailable".to_string()))
    }
}

impl ClipboardWriter for SystemClipboard {
    fn set_text(&mut self, text: &str) -> ExportResult<()> {
        log::debug!("Copying {} characters to clipboard", text.len());
        self.clipboard()?
            .set_text(text)
            .map_err(|e| ExportError::Clipboard(format!("Failed to set clipboard text: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore] // Requires clipboard access
    fn test_clipboard_set_text() {
        let mut clipboard = SystemClipboard::new();
        assert!(clipboard.set_text("CS2_029:2;CS2_032:1").is_ok());
    }
}
