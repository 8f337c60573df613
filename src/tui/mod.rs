// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, fetch results)
// - Rendering the UI

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod theme;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::source::{spawn_fetch, FetchOutcome, RecordSource, Source};
use anyhow::{Context, Result};
use app::{App, Effect};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, starts the initial fetch in the background, runs
/// the event loop, and restores the terminal when done. The table is usable
/// (empty) before the fetch lands.
pub async fn run_tui(config: Config, log_buffer: LogBuffer, source: Source) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config, log_buffer, source.describe());

    let (fetch_tx, mut fetch_rx) = mpsc::channel::<FetchOutcome>(4);
    spawn_fetch(source.clone(), fetch_tx.clone());

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &source, &fetch_tx, &mut fetch_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three things with tokio::select!:
/// 1. Keyboard input
/// 2. Timer ticks (spinner, toast expiry)
/// 3. Fetch outcomes
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    source: &Source,
    fetch_tx: &mpsc::Sender<FetchOutcome>,
    fetch_rx: &mut mpsc::Receiver<FetchOutcome>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        let mut effect = Effect::None;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        if let Some(action) = input::map_key(app.mode, key_event) {
                            effect = app.apply(action);
                        }
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {
                app.tick();
            }

            // Fetch finished
            Some(outcome) = fetch_rx.recv() => {
                app.on_fetch(outcome);
            }
        }

        if effect == Effect::Refetch {
            tracing::info!("Reloading users from {}", source.describe());
            spawn_fetch(source.clone(), fetch_tx.clone());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
