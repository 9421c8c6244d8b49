use std::fmt;

use hs_common::DeckError;

/// Unified error type for export, file and clipboard operations
#[derive(Debug)]
pub enum ExportError {
    /// HTTP request failed (network error, timeout, etc.)
    Network(reqwest::Error),
    /// Failed to parse JSON
    Parse(serde_json::Error),
    /// HTTP error status code
    HttpStatus(reqwest::StatusCode),
    /// File I/O error
    Io(std::io::Error),
    /// Image encoding error
    Image(image::ImageError),
    /// Clipboard could not be accessed or written
    Clipboard(String),
    /// Deck data could not be decoded
    Deck(DeckError),
    /// The exporter or render surface reported a failure
    Export(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Network(e) => write!(f, "Network error: {}", e),
            ExportError::Parse(e) => write!(f, "Parse error: {}", e),
            ExportError::HttpStatus(status) => write!(f, "HTTP error: {}", status),
            ExportError::Io(e) => write!(f, "I/O error: {}", e),
            ExportError::Image(e) => write!(f, "Image error: {}", e),
            ExportError::Clipboard(msg) => write!(f, "Clipboard error: {}", msg),
            ExportError::Deck(e) => write!(f, "Deck error: {}", e),
            ExportError::Export(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Network(e) => Some(e),
            ExportError::Parse(e) => Some(e),
            ExportError::Io(e) => Some(e),
            ExportError::Image(e) => Some(e),
            ExportError::Deck(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ExportError {
    fn from(err: reqwest::Error) -> Self {
        ExportError::Network(err)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Parse(err)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err)
    }
}

impl From<image::ImageError> for ExportError {
    fn from(err: image::ImageError) -> Self {
        ExportError::Image(err)
    }
}

impl From<DeckError> for ExportError {
    fn from(err: DeckError) -> Self {
        ExportError::Deck(err)
    }
}

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;
