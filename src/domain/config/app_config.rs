//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::note::{SlotId, DEFAULT_SEPARATOR, DEFAULT_SERVICE_ROOT};

/// User agent sent with every request unless configured otherwise
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:142.0) Gecko/20100101 Firefox/142.0";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub service_url: Option<String>,
    pub slot: Option<String>,
    pub separator: Option<String>,
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            service_url: Some(DEFAULT_SERVICE_ROOT.to_string()),
            slot: None,
            separator: Some(DEFAULT_SEPARATOR.to_string()),
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
            timeout_secs: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            service_url: other.service_url.or(self.service_url),
            slot: other.slot.or(self.slot),
            separator: other.separator.or(self.separator),
            user_agent: other.user_agent.or(self.user_agent),
            timeout_secs: other.timeout_secs.or(self.timeout_secs),
        }
    }

    /// Get the service root, or note.ms if not set
    pub fn service_url_or_default(&self) -> &str {
        self.service_url.as_deref().unwrap_or(DEFAULT_SERVICE_ROOT)
    }

    /// Get the configured slot as a validated id, if one is set and valid
    pub fn slot_id(&self) -> Option<SlotId> {
        self.slot.as_ref().and_then(|s| s.parse().ok())
    }

    /// Get the append separator, or newline if not set
    pub fn separator_or_default(&self) -> &str {
        self.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR)
    }

    /// Get the user agent, or the built-in browser string if not set
    pub fn user_agent_or_default(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Get the request timeout, if one is configured
    pub fn timeout(&self) -> Option<std::time::Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(std::time::Duration::from_secs)
    }
}
