//! reqwest-backed note transport adapter

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::REFERER;
use reqwest::redirect::Policy;

use crate::application::ports::{NoteTransport, TransportError};
use crate::domain::config::{AppConfig, DEFAULT_USER_AGENT};

/// Maximum number of redirects followed per request
const MAX_REDIRECTS: usize = 10;

/// Form field carrying the slot text on writes
const CONTENT_FIELD: &str = "t";

/// HTTP transport using a shared reqwest client
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with the default browser user agent and no timeout
    pub fn new() -> Result<Self, TransportError> {
        Self::with_options(DEFAULT_USER_AGENT, None)
    }

    /// Create a transport with a custom user agent and optional request timeout
    pub fn with_options(user_agent: &str, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(user_agent)
            .redirect(Policy::limited(MAX_REDIRECTS));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Request(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Create a transport from merged configuration
    pub fn from_config(config: &AppConfig) -> Result<Self, TransportError> {
        Self::with_options(config.user_agent_or_default(), config.timeout())
    }
}

#[async_trait]
impl NoteTransport for ReqwestTransport {
    async fn fetch_page(&self, url: &str) -> Result<String, TransportError> {
        let response = self
            .client
            .get(url)
            .header(REFERER, url)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))
    }

    async fn submit(&self, url: &str, text: &str) -> Result<u16, TransportError> {
        let response = self
            .client
            .post(url)
            .header(REFERER, url)
            .form(&[(CONTENT_FIELD, text)])
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(response.status().as_u16())
    }
}
