//! Application layer - Use cases and port interfaces
//!
//! Contains the clipboard client and trait definitions
//! for external system interactions.

pub mod clipboard_client;
pub mod ports;

// Re-export use cases
pub use clipboard_client::{ClipboardClient, NoteError, SaveOutcome};
