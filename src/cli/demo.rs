//! Walkthrough of replace and append against a live slot

use chrono::{DateTime, FixedOffset};

use crate::application::ports::{Narrator, NoteTransport};
use crate::application::{ClipboardClient, NoteError};
use crate::domain::note::SaveMode;

use super::presenter::Presenter;

/// One demo step: a label, the text to write and how to write it
struct DemoStep {
    label: &'static str,
    text: String,
    mode: SaveMode,
}

/// Build the demo steps for the given moment
fn demo_steps(now: DateTime<FixedOffset>) -> Vec<DemoStep> {
    vec![
        DemoStep {
            label: "Replace",
            text: format!(
                "Content replaced by noteclip at {}.",
                now.format("%Y-%m-%d %H:%M:%S")
            ),
            mode: SaveMode::Replace,
        },
        DemoStep {
            label: "Append",
            text: "A new line added in append mode.".to_string(),
            mode: SaveMode::append(),
        },
        DemoStep {
            label: "Append with custom separator",
            text: "Appended after a ' | ' separator.".to_string(),
            mode: SaveMode::append_with(" | "),
        },
    ]
}

/// Run every step, re-reading the slot after each successful write.
///
/// A failed step does not stop later ones; the last failure is returned.
pub async fn run_demo<T, N>(
    client: &ClipboardClient<T, N>,
    presenter: &Presenter,
    now: DateTime<FixedOffset>,
) -> Result<(), NoteError>
where
    T: NoteTransport,
    N: Narrator,
{
    let mut last_error = None;

    for step in demo_steps(now) {
        presenter.info(&format!("--- {} ---", step.label));

        let result = match client.save(&step.text, &step.mode).await {
            Ok(_) => client.fetch().await,
            Err(e) => Err(e),
        };

        match result {
            Ok(content) => {
                presenter.success(&format!("{} succeeded", step.label));
                presenter.content_block("Current content:", &content);
            }
            Err(e) => {
                presenter.error(&format!("{} failed: {}", step.label, e));
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
