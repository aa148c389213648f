// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, provider events)
// - Rebuilding the front page from the provider each frame
// - Carrying out filter changes and clipboard copies

pub mod app;
pub mod clipboard;
pub mod components;
pub mod layout;
pub mod scroll;
pub mod theme;
pub mod traits;
pub mod views;

use crate::api::{use_api, ApiProvider, FilterChange, ProviderEvent};
use crate::config::Config;
use crate::front_page::FrontPage;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, AppAction};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done. The provider should already be mounted.
pub async fn run_tui(
    provider: ApiProvider,
    mut events_rx: mpsc::Receiver<ProviderEvent>,
    log_buffer: LogBuffer,
    config: &Config,
) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config, log_buffer);

    let result = run_event_loop(&mut terminal, &mut app, &provider, &mut events_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Handles three kinds of events:
/// 1. Keyboard input
/// 2. Timer ticks (spinner, toast expiry)
/// 3. Provider events (a fetch resolved)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    provider: &ApiProvider,
    events_rx: &mut mpsc::Receiver<ProviderEvent>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        let page = provider.provide(|| {
            FrontPage::from_context(app.search_query(), &app.fallback_patch_url)
        })?;
        app.set_page(page);

        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            key = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => Some(key_event),
                        _ => None,
                    }
                } else {
                    None
                }
            } => {
                if let Some(key_event) = key {
                    handle_key_event(app, provider, key_event)?;
                }
            }

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {
                app.tick();
            }

            // A fetch resolved
            Some(provider_event) = events_rx.recv() => {
                app.on_provider_event(provider_event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key_event(app: &mut App, provider: &ApiProvider, key_event: KeyEvent) -> Result<()> {
    // Some terminals report releases too
    if key_event.kind != KeyEventKind::Press {
        return Ok(());
    }

    match app.handle_key(key_event) {
        AppAction::None | AppAction::Quit => {}
        AppAction::Filter(change) => apply_filter(provider, change)?,
        AppAction::Copy(url) => match clipboard::copy_to_clipboard(&url) {
            Ok(()) => app.show_toast("✓ Copied patch URL"),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                app.show_toast("✗ Clipboard unavailable");
            }
        },
    }

    Ok(())
}

/// Route a filter change through the provider in scope
///
/// The fetch task is detached; its result arrives as a provider event.
fn apply_filter(provider: &ApiProvider, change: FilterChange) -> Result<()> {
    provider.provide(|| -> Result<()> {
        let api = use_api()?;
        drop(api.handle_filter_change(change));
        Ok(())
    })
}
