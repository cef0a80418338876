//! CLI presenter for output formatting

use std::sync::Mutex;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::application::ports::{Narrator, NoteEvent};

/// Presenter for CLI output formatting.
///
/// Status goes to stderr, slot content to stdout.
pub struct Presenter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    /// Start a spinner with message, replacing any running one
    pub fn start_spinner(&self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));

        // No terminal to draw on
        if spinner.is_hidden() {
            self.info(message);
        }

        if let Some(old) = self.take_spinner() {
            old.finish_and_clear();
        }
        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(spinner);
        }
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&self, message: &str) {
        match self.take_spinner() {
            Some(spinner) if !spinner.is_hidden() => {
                spinner.finish_with_message(format!("{} {}", "✓".green(), message))
            }
            Some(spinner) => {
                spinner.finish_and_clear();
                self.success(message)
            }
            None => self.success(message),
        }
    }

    /// Mark spinner as failed and finish
    pub fn spinner_fail(&self, message: &str) {
        match self.take_spinner() {
            Some(spinner) if !spinner.is_hidden() => {
                spinner.finish_with_message(format!("{} {}", "✗".red(), message))
            }
            Some(spinner) => {
                spinner.finish_and_clear();
                self.error(message)
            }
            None => self.error(message),
        }
    }

    fn take_spinner(&self) -> Option<ProgressBar> {
        self.spinner.lock().ok().and_then(|mut slot| slot.take())
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout (the slot content itself)
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a slot content block between rules (demo output)
    pub fn content_block(&self, title: &str, content: &str) {
        let rule = "-".repeat(21);
        println!("{}", title.bold());
        println!("{}", rule.dimmed());
        println!("{}", content);
        println!("{}", rule.dimmed());
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Human-readable line for a client event
pub fn describe_event(event: &NoteEvent) -> String {
    match event {
        NoteEvent::FetchStarted { url } => format!("Reading from '{}'...", url),
        NoteEvent::FetchSucceeded => "Read complete".to_string(),
        NoteEvent::FetchFailed { reason } => format!("Read failed: {}", reason),
        NoteEvent::AppendStarted => "Append mode, fetching existing content".to_string(),
        NoteEvent::OriginalJoined => "Existing content found, joining".to_string(),
        NoteEvent::OriginalEmpty => "Existing content is empty, writing new content alone".to_string(),
        NoteEvent::AppendAborted => "Existing content unavailable, save aborted".to_string(),
        NoteEvent::SaveStarted { url } => format!("Saving to '{}'...", url),
        NoteEvent::SaveSucceeded { status } => format!("Saved (HTTP {})", status),
        NoteEvent::SaveFailed { reason } => format!("Save failed: {}", reason),
    }
}

impl Narrator for Presenter {
    fn narrate(&self, event: &NoteEvent) {
        let line = describe_event(event);
        match event {
            NoteEvent::FetchStarted { .. } | NoteEvent::SaveStarted { .. } => {
                self.start_spinner(&line)
            }
            NoteEvent::FetchSucceeded | NoteEvent::SaveSucceeded { .. } => {
                self.spinner_success(&line)
            }
            NoteEvent::FetchFailed { .. } | NoteEvent::SaveFailed { .. } => {
                self.spinner_fail(&line)
            }
            NoteEvent::AppendAborted => self.warn(&line),
            NoteEvent::AppendStarted | NoteEvent::OriginalJoined | NoteEvent::OriginalEmpty => {
                self.info(&line)
            }
        }
    }
}
