//! Note transport port interface

use async_trait::async_trait;
use thiserror::Error;

/// Transport errors
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Port for talking to the clipboard service over HTTP
#[async_trait]
pub trait NoteTransport: Send + Sync {
    /// Fetch the slot page at `url` and return its body.
    ///
    /// The response status is not inspected.
    async fn fetch_page(&self, url: &str) -> Result<String, TransportError>;

    /// Submit `text` as the new slot content at `url`.
    ///
    /// # Returns
    /// The HTTP status code of the final response
    async fn submit(&self, url: &str, text: &str) -> Result<u16, TransportError>;
}

/// Blanket implementation for boxed transports
#[async_trait]
impl NoteTransport for Box<dyn NoteTransport> {
    async fn fetch_page(&self, url: &str) -> Result<String, TransportError> {
        self.as_ref().fetch_page(url).await
    }

    async fn submit(&self, url: &str, text: &str) -> Result<u16, TransportError> {
        self.as_ref().submit(url, text).await
    }
}
