//! Local clipboard infrastructure module

mod arboard;

pub use arboard::ArboardClipboard;

use crate::application::ports::LocalClipboard;

/// Create the clipboard bridge for the current platform
pub fn create_clipboard() -> Box<dyn LocalClipboard> {
    Box::new(ArboardClipboard::new())
}
