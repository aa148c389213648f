// launchdeck - SpaceX launch browser for the terminal
//
// Fetches launch records from the SpaceX v3 API and shows them as cards,
// with a mission name search plus launch year / launch outcome / landing
// outcome filters.
//
// Architecture:
// - API (reqwest): typed launch records and the GET /launches client
// - Provider: shared launch data + filters, one fetch task per filter change
// - Front page: view model derived from provider state and the search string
// - TUI (ratatui): renders the front page, routes keys to filter changes
// - CLI (clap): `list` for one-shot output, `config` for the config file

mod api;
mod cli;
mod config;
mod front_page;
mod logging;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, ListArgs};
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // config --show/--path/--reset run before anything else and exit
    if let Some(command) = &cli.command {
        if cli::handle_config_command(command) {
            return Ok(());
        }
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();
    let tui_mode = config.enable_tui && cli.command.is_none();

    let log_buffer = LogBuffer::new();
    let _file_guard = init_logging(&config, tui_mode, &log_buffer);

    tracing::debug!(api_url = %config.api_url, limit = config.limit, "Configuration loaded");

    match cli.command {
        Some(Commands::List(args)) => cli::run_list(&config, &args).await,
        Some(Commands::Config { .. }) => Ok(()),
        None if !tui_mode => {
            tracing::info!("TUI disabled, printing launches once");
            cli::run_list(&config, &ListArgs::default()).await
        }
        None => {
            let (provider, events_rx) =
                api::ApiProvider::new(&config).context("Failed to build HTTP client")?;
            provider.mount();

            tracing::info!("Starting TUI");
            let result = tui::run_tui(provider, events_rx, log_buffer, &config).await;
            if let Err(e) = &result {
                tracing::error!("TUI error: {:?}", e);
            }
            result
        }
    }
}

/// Initialize tracing
///
/// - TUI mode: capture logs into the buffer shown in the logs panel
///   (stdout would garble the display)
/// - Headless: human-readable logs on stderr, keeping stdout for output
/// - File logging: optional rolling JSON files in addition to the above
///
/// Precedence: RUST_LOG env var > config file > default "info"
///
/// The returned guard must be kept alive so file logs flush.
fn init_logging(
    config: &Config,
    tui_mode: bool,
    log_buffer: &LogBuffer,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_filter = format!("launchdeck={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let tui_layer = tui_mode.then(|| TuiLogLayer::new(log_buffer.clone()));
    let stderr_layer =
        (!tui_mode).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let (file_layer, guard) = if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let dir = &config.logging.file_dir;
                let prefix = &config.logging.file_prefix;
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(dir, prefix),
                    LogRotation::Daily => tracing_appender::rolling::daily(dir, prefix),
                    LogRotation::Never => tracing_appender::rolling::never(dir, prefix),
                };

                // Writes happen on a background thread
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}
