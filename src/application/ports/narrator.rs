//! Narration port interface
//!
//! The client reports its progress as [`NoteEvent`]s instead of printing.

use std::sync::Mutex;

/// Progress and status events emitted by the clipboard client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteEvent {
    FetchStarted { url: String },
    FetchSucceeded,
    FetchFailed { reason: String },
    AppendStarted,
    /// Existing content was non-empty and will be joined with the new text
    OriginalJoined,
    /// Existing content was empty, the new text is written alone
    OriginalEmpty,
    /// The pre-read failed and the save was abandoned before posting
    AppendAborted,
    SaveStarted { url: String },
    SaveSucceeded { status: u16 },
    SaveFailed { reason: String },
}

/// Observer for client progress
pub trait Narrator: Send + Sync {
    fn narrate(&self, event: &NoteEvent);
}

impl<N: Narrator + ?Sized> Narrator for &N {
    fn narrate(&self, event: &NoteEvent) {
        (**self).narrate(event)
    }
}

impl Narrator for Box<dyn Narrator> {
    fn narrate(&self, event: &NoteEvent) {
        self.as_ref().narrate(event)
    }
}

/// Narrator that discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn narrate(&self, _event: &NoteEvent) {}
}

/// Narrator that keeps every event, for inspection after a call
#[derive(Debug, Default)]
pub struct RecordingNarrator {
    events: Mutex<Vec<NoteEvent>>,
}

impl RecordingNarrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events seen so far
    pub fn events(&self) -> Vec<NoteEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl Narrator for RecordingNarrator {
    fn narrate(&self, event: &NoteEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
