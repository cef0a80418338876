//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use async_trait::async_trait;

use crate::application::ports::{ClipboardError, LocalClipboard};

/// Cross-platform clipboard adapter using arboard
pub struct ArboardClipboard;

impl ArboardClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

fn open() -> Result<arboard::Clipboard, ClipboardError> {
    arboard::Clipboard::new().map_err(|e| ClipboardError::ClipboardUnavailable(e.to_string()))
}

#[async_trait]
impl LocalClipboard for ArboardClipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();

        // arboard operations are blocking
        tokio::task::spawn_blocking(move || {
            open()?
                .set_text(&text)
                .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::CopyFailed(format!("Task join error: {}", e)))?
    }

    async fn paste(&self) -> Result<String, ClipboardError> {
        tokio::task::spawn_blocking(|| {
            open()?
                .get_text()
                .map_err(|e| ClipboardError::PasteFailed(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::PasteFailed(format!("Task join error: {}", e)))?
    }
}
