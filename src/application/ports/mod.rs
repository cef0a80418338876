//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod narrator;
pub mod transport;

// Re-export common types
pub use clipboard::{ClipboardError, LocalClipboard};
pub use config::ConfigStore;
pub use narrator::{Narrator, NoteEvent, RecordingNarrator, SilentNarrator};
pub use transport::{NoteTransport, TransportError};
