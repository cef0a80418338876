//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces:
//! the HTTP transport, the local clipboard bridge and the config file store.

pub mod clipboard;
pub mod config;
pub mod http;

// Re-export adapters
pub use clipboard::{create_clipboard, ArboardClipboard};
pub use config::XdgConfigStore;
pub use http::ReqwestTransport;
