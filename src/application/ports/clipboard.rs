//! Local system clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

/// Local clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Failed to copy to clipboard: {0}")]
    CopyFailed(String),

    #[error("Failed to read clipboard: {0}")]
    PasteFailed(String),
}

/// Port for the local system clipboard
#[async_trait]
pub trait LocalClipboard: Send + Sync {
    /// Copy text to the system clipboard.
    async fn copy(&self, text: &str) -> Result<(), ClipboardError>;

    /// Read the current text from the system clipboard.
    async fn paste(&self) -> Result<String, ClipboardError>;
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl LocalClipboard for Box<dyn LocalClipboard> {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().copy(text).await
    }

    async fn paste(&self) -> Result<String, ClipboardError> {
        self.as_ref().paste().await
    }
}
