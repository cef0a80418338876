//! Remote clipboard client use case

use thiserror::Error;

use crate::domain::error::PageParseError;
use crate::domain::note::{extract_content, join_content, SaveMode, SlotId, DEFAULT_SERVICE_ROOT};

use super::ports::{Narrator, NoteEvent, NoteTransport, SilentNarrator, TransportError};

/// Errors from clipboard client calls
#[derive(Debug, Clone, Error)]
pub enum NoteError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected page layout: {0}")]
    Parse(#[from] PageParseError),

    #[error("Server rejected the write (HTTP {status})")]
    Rejected { status: u16 },

    #[error("Append aborted, existing content could not be read: {0}")]
    AppendAborted(Box<NoteError>),
}

impl From<TransportError> for NoteError {
    fn from(err: TransportError) -> Self {
        Self::Network(err.to_string())
    }
}

impl NoteError {
    /// Whether retrying the same call later might succeed.
    ///
    /// Network failures, 5xx and 429 rejections are transient; 4xx
    /// rejections and layout mismatches are not.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Parse(_) => false,
            Self::Rejected { status } => *status >= 500 || *status == 429,
            Self::AppendAborted(cause) => cause.is_transient(),
        }
    }

    /// HTTP status of a rejected write
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status } => Some(*status),
            Self::AppendAborted(cause) => cause.status(),
            _ => None,
        }
    }
}

/// Result of an accepted save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    /// HTTP status returned by the service
    pub status: u16,
    /// The full text that was written to the slot
    pub written: String,
}

/// Client bound to a single slot of the clipboard service.
///
/// Every call is one sequential request/response pass with no retry.
/// Appends are read-modify-write without locking, so concurrent appends
/// to the same slot race.
pub struct ClipboardClient<T, N = SilentNarrator>
where
    T: NoteTransport,
    N: Narrator,
{
    slot: SlotId,
    url: String,
    transport: T,
    narrator: N,
}

impl<T: NoteTransport> ClipboardClient<T, SilentNarrator> {
    /// Create a client for `slot` on note.ms that reports nothing
    pub fn silent(slot: SlotId, transport: T) -> Self {
        Self::new(slot, transport, SilentNarrator)
    }
}

impl<T, N> ClipboardClient<T, N>
where
    T: NoteTransport,
    N: Narrator,
{
    /// Create a client for `slot` on note.ms
    pub fn new(slot: SlotId, transport: T, narrator: N) -> Self {
        Self::with_service_root(DEFAULT_SERVICE_ROOT, slot, transport, narrator)
    }

    /// Create a client for `slot` under a custom service root
    pub fn with_service_root(service_root: &str, slot: SlotId, transport: T, narrator: N) -> Self {
        let url = slot.url(service_root);
        Self {
            slot,
            url,
            transport,
            narrator,
        }
    }

    pub fn slot(&self) -> &SlotId {
        &self.slot
    }

    /// URL of the slot page
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Read the current slot content.
    ///
    /// An empty slot reads as `Ok("")`.
    pub async fn fetch(&self) -> Result<String, NoteError> {
        self.narrator.narrate(&NoteEvent::FetchStarted {
            url: self.url.clone(),
        });

        let result = match self.transport.fetch_page(&self.url).await {
            Ok(body) => extract_content(&body).map_err(NoteError::from),
            Err(e) => Err(NoteError::from(e)),
        };

        match &result {
            Ok(_) => self.narrator.narrate(&NoteEvent::FetchSucceeded),
            Err(e) => self.narrator.narrate(&NoteEvent::FetchFailed {
                reason: e.to_string(),
            }),
        }

        result
    }

    /// Write content to the slot, replacing or appending per `mode`.
    ///
    /// In append mode a failed pre-read aborts the save before anything is
    /// posted.
    pub async fn save(&self, content: &str, mode: &SaveMode) -> Result<SaveOutcome, NoteError> {
        let final_content = match mode {
            SaveMode::Replace => content.to_string(),
            SaveMode::Append { separator } => {
                self.narrator.narrate(&NoteEvent::AppendStarted);

                let existing = match self.fetch().await {
                    Ok(existing) => existing,
                    Err(e) => {
                        self.narrator.narrate(&NoteEvent::AppendAborted);
                        return Err(NoteError::AppendAborted(Box::new(e)));
                    }
                };

                if existing.is_empty() {
                    self.narrator.narrate(&NoteEvent::OriginalEmpty);
                } else {
                    self.narrator.narrate(&NoteEvent::OriginalJoined);
                }

                join_content(&existing, separator, content)
            }
        };

        self.post(final_content).await
    }

    /// Overwrite the slot with `content`
    pub async fn replace(&self, content: &str) -> Result<SaveOutcome, NoteError> {
        self.save(content, &SaveMode::Replace).await
    }

    /// Append `content` after a newline
    pub async fn append(&self, content: &str) -> Result<SaveOutcome, NoteError> {
        self.save(content, &SaveMode::append()).await
    }

    async fn post(&self, text: String) -> Result<SaveOutcome, NoteError> {
        self.narrator.narrate(&NoteEvent::SaveStarted {
            url: self.url.clone(),
        });

        let status = match self.transport.submit(&self.url, &text).await {
            Ok(status) => status,
            Err(e) => {
                let err = NoteError::from(e);
                self.narrator.narrate(&NoteEvent::SaveFailed {
                    reason: err.to_string(),
                });
                return Err(err);
            }
        };

        if !(200..300).contains(&status) {
            let err = NoteError::Rejected { status };
            self.narrator.narrate(&NoteEvent::SaveFailed {
                reason: err.to_string(),
            });
            return Err(err);
        }

        self.narrator.narrate(&NoteEvent::SaveSucceeded { status });
        Ok(SaveOutcome {
            status,
            written: text,
        })
    }
}
