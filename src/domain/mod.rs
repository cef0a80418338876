//! Domain layer - Core business logic
//!
//! Contains value objects, page parsing and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod note;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use note::{extract_content, join_content, SaveMode, SlotId};
