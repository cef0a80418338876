//! Command runners

use std::process::ExitCode;

use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::application::ports::{
    ClipboardError, ConfigStore, LocalClipboard, Narrator, NoteTransport, SilentNarrator,
    TransportError,
};
use crate::application::{ClipboardClient, NoteError, SaveOutcome};
use crate::domain::config::AppConfig;
use crate::domain::error::{ConfigError, SlotIdError};
use crate::domain::note::{SaveMode, SlotId};
use crate::infrastructure::{create_clipboard, ReqwestTransport, XdgConfigStore};

use super::args::{Cli, Commands, TextSource, WriteArgs};
use super::config_cmd::handle_config_command;
use super::demo::run_demo;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Errors surfaced by the binary
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Note(#[from] NoteError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Slot(#[from] SlotIdError),

    #[error("Failed to read stdin: {0}")]
    Stdin(String),

    #[error("No slot configured. Pass --slot, set NOTECLIP_SLOT or run 'noteclip config set slot <id>'")]
    MissingSlot,
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingSlot | Self::Slot(_) => EXIT_USAGE_ERROR,
            _ => EXIT_ERROR,
        }
    }
}

/// Run the parsed command line
pub async fn run(cli: Cli) -> ExitCode {
    let presenter = Presenter::new();
    let store = XdgConfigStore::new();

    let result = match cli.command {
        Commands::Config { action } => handle_config_command(action, &store, &presenter)
            .await
            .map_err(AppError::from),
        command => {
            let cli_config = AppConfig {
                slot: cli.slot,
                service_url: cli.service_url,
                ..Default::default()
            };
            let config = load_merged_config(&store, cli_config).await;
            run_slot_command(command, &config, cli.quiet, &presenter).await
        }
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(e.exit_code())
        }
    }
}

/// Load and merge configuration: defaults < file < env/CLI
pub async fn load_merged_config<S: ConfigStore>(store: &S, cli_config: AppConfig) -> AppConfig {
    let file_config = store.load_or_empty().await;

    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Resolve the slot to operate on
pub fn resolve_slot(config: &AppConfig) -> Result<SlotId, AppError> {
    let raw = config.slot.as_deref().ok_or(AppError::MissingSlot)?;
    Ok(raw.parse()?)
}

async fn run_slot_command(
    command: Commands,
    config: &AppConfig,
    quiet: bool,
    presenter: &Presenter,
) -> Result<(), AppError> {
    let slot = resolve_slot(config)?;
    let transport = ReqwestTransport::from_config(config)?;
    let narrator: Box<dyn Narrator> = if quiet {
        Box::new(SilentNarrator)
    } else {
        Box::new(Presenter::new())
    };
    let client = ClipboardClient::with_service_root(
        config.service_url_or_default(),
        slot,
        transport,
        narrator,
    );
    let clipboard = create_clipboard();

    match command {
        Commands::Get { copy } => {
            let content = run_get(&client, copy, &clipboard, presenter).await?;
            presenter.output(&content);
        }
        Commands::Set(write) => {
            let text = resolve_text(&write, &clipboard, tokio::io::stdin()).await?;
            run_save(&client, &text, &SaveMode::Replace).await?;
        }
        Commands::Append { write, separator } => {
            let text = resolve_text(&write, &clipboard, tokio::io::stdin()).await?;
            let separator = separator.unwrap_or_else(|| config.separator_or_default().to_string());
            run_save(&client, &text, &SaveMode::Append { separator }).await?;
        }
        Commands::Demo => {
            let now = chrono::Local::now().fixed_offset();
            run_demo(&client, presenter, now).await?;
        }
        Commands::Config { .. } => unreachable!(), // Handled before config merge
    }

    Ok(())
}

/// Fetch the slot content, optionally mirroring it to the local clipboard.
///
/// Clipboard failures are reported as warnings.
pub async fn run_get<T, N, C>(
    client: &ClipboardClient<T, N>,
    copy: bool,
    clipboard: &C,
    presenter: &Presenter,
) -> Result<String, AppError>
where
    T: NoteTransport,
    N: Narrator,
    C: LocalClipboard,
{
    let content = client.fetch().await?;

    if copy {
        match clipboard.copy(&content).await {
            Ok(()) => presenter.info("Copied to clipboard"),
            Err(e) => presenter.warn(&format!("Clipboard copy failed: {}", e)),
        }
    }

    Ok(content)
}

/// Save text to the slot
pub async fn run_save<T, N>(
    client: &ClipboardClient<T, N>,
    text: &str,
    mode: &SaveMode,
) -> Result<SaveOutcome, AppError>
where
    T: NoteTransport,
    N: Narrator,
{
    Ok(client.save(text, mode).await?)
}

/// Read the text to write from its source.
///
/// Stdin input loses a single trailing line break.
pub async fn resolve_text<C, R>(
    args: &WriteArgs,
    clipboard: &C,
    mut stdin: R,
) -> Result<String, AppError>
where
    C: LocalClipboard,
    R: AsyncRead + Unpin,
{
    match args.source() {
        TextSource::Literal(text) => Ok(text),
        TextSource::Clipboard => Ok(clipboard.paste().await?),
        TextSource::Stdin => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .await
                .map_err(|e| AppError::Stdin(e.to_string()))?;
            if buf.ends_with('\n') {
                buf.pop();
                if buf.ends_with('\r') {
                    buf.pop();
                }
            }
            Ok(buf)
        }
    }
}
