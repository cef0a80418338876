//! Note domain: slots, page parsing and content composition

pub mod compose;
pub mod page;
pub mod slot;

pub use compose::{join_content, SaveMode, DEFAULT_SEPARATOR};
pub use page::extract_content;
pub use slot::{SlotId, DEFAULT_SERVICE_ROOT, MAX_SLOT_LEN};
