//! CLI argument definitions using Clap

use clap::{Args, Parser, Subcommand};

/// noteclip - read and write note.ms style online clipboards
#[derive(Parser, Debug)]
#[command(name = "noteclip")]
#[command(version)]
#[command(about = "Read, replace and append to an online plaintext clipboard slot")]
#[command(long_about = None)]
pub struct Cli {
    /// Slot id (last path segment of the clipboard URL)
    #[arg(short = 's', long, value_name = "ID", env = "NOTECLIP_SLOT", global = true)]
    pub slot: Option<String>,

    /// Service root URL
    #[arg(long, value_name = "URL", env = "NOTECLIP_SERVICE_URL", global = true)]
    pub service_url: Option<String>,

    /// Suppress progress messages on stderr
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the current slot content
    Get {
        /// Also copy the content to the system clipboard
        #[arg(short = 'c', long)]
        copy: bool,
    },
    /// Replace the slot content
    Set(WriteArgs),
    /// Append to the slot content
    Append {
        #[command(flatten)]
        write: WriteArgs,

        /// Separator placed between existing and new content
        #[arg(long, value_name = "SEP")]
        separator: Option<String>,
    },
    /// Replace, append, and append with a custom separator, re-reading after each step
    Demo,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Source of the text to write
#[derive(Args, Debug, Clone)]
pub struct WriteArgs {
    /// Text to write ("-" or omitted reads stdin)
    #[arg(value_name = "TEXT", conflicts_with = "from_clipboard")]
    pub text: Option<String>,

    /// Take the text from the system clipboard
    #[arg(long)]
    pub from_clipboard: bool,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Where the text for a write comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    Literal(String),
    Stdin,
    Clipboard,
}

impl WriteArgs {
    pub fn source(&self) -> TextSource {
        if self.from_clipboard {
            return TextSource::Clipboard;
        }
        match self.text.as_deref() {
            None | Some("-") => TextSource::Stdin,
            Some(text) => TextSource::Literal(text.to_string()),
        }
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "service_url",
    "slot",
    "separator",
    "user_agent",
    "timeout_secs",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
