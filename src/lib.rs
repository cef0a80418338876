//! noteclip - client for note.ms style online plaintext clipboards
//!
//! A slot is a named page on the service. The client reads the text stored
//! in a slot and replaces or appends to it.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Slot ids, page parsing, content composition, config and errors
//! - **Application**: The clipboard client use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (reqwest, arboard, config file)
//! - **CLI**: Command-line interface, argument parsing and output
//!
//! # Example
//!
//! ```no_run
//! use noteclip::application::ClipboardClient;
//! use noteclip::domain::{SaveMode, SlotId};
//! use noteclip::infrastructure::ReqwestTransport;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ClipboardClient::silent(SlotId::new("testid")?, ReqwestTransport::new()?);
//! client.save("first line", &SaveMode::Replace).await?;
//! client.save("second line", &SaveMode::append()).await?;
//! println!("{}", client.fetch().await?);
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
