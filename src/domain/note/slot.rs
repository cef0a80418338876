//! Slot identifier value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::SlotIdError;

/// Default service root
pub const DEFAULT_SERVICE_ROOT: &str = "https://note.ms";

/// Maximum accepted slot id length
pub const MAX_SLOT_LEN: usize = 128;

/// Name of a clipboard slot, the last path segment of the slot URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotId(String);

impl SlotId {
    /// Validate and wrap a slot identifier
    pub fn new(input: impl Into<String>) -> Result<Self, SlotIdError> {
        let input = input.into();

        if input.is_empty() {
            return Err(SlotIdError::Empty);
        }

        let len = input.chars().count();
        if len > MAX_SLOT_LEN {
            return Err(SlotIdError::TooLong {
                len,
                max: MAX_SLOT_LEN,
            });
        }

        if !input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            return Err(SlotIdError::InvalidCharacters { input });
        }

        if input == "." || input == ".." {
            return Err(SlotIdError::Reserved { input });
        }

        Ok(Self(input))
    }

    /// Get the slot id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build the slot URL under the given service root.
    ///
    /// Trailing slashes on the root are ignored.
    pub fn url(&self, service_root: &str) -> String {
        format!("{}/{}", service_root.trim_end_matches('/'), self.0)
    }
}

impl FromStr for SlotId {
    type Err = SlotIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SlotId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
