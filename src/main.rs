//! Quest - actor-based terminal HTTP workbench
//!
//! Architecture:
//! - UI Layer (Ratatui) - terminal rendering and input polling
//! - App Layer - session state machine and effect runner
//! - Network Layer (Tokio) - async HTTP execution

use std::fs::OpenOptions;
use std::io;

use anyhow::Context;
use crossterm::{
    event::{self, Event as TermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc::{self, error::TryRecvError};

use quest_tui::app::{AppActor, SessionState};
use quest_tui::constants::{
    debug_log_enabled, APP_NAME, APP_VERSION, DEBUG_LOG_FILE, INPUT_POLL_INTERVAL,
};
use quest_tui::messages::{Event, NetworkCommand, NetworkResponse, RenderState};
use quest_tui::network::{HttpExecutor, NetworkActor};
use quest_tui::storage::RequestLibrary;
use quest_tui::theme::Theme;
use quest_tui::ui;

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // File logging only when DEBUG is set; the terminal belongs to the UI
    let _log_guard = if debug_log_enabled() {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(DEBUG_LOG_FILE)
            .with_context(|| format!("opening {}", DEBUG_LOG_FILE))?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file);
        tracing_subscriber::fmt()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .init();
        Some(guard)
    } else {
        None
    };
    tracing::info!(version = APP_VERSION, "{} starting", APP_NAME);

    let theme = Theme::DEFAULT;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(HttpExecutor::default(), net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(
        SessionState::new(theme),
        RequestLibrary::default(),
        net_cmd_tx,
        render_tx,
    );
    tokio::spawn(app_actor.run(event_rx, net_resp_rx));

    let size = terminal.size()?;
    let _ = event_tx.send(Event::Resize {
        width: size.width,
        height: size.height,
    });

    run_ui_loop(&mut terminal, &theme, event_tx, &mut render_rx).await?;

    tracing::info!("{} exiting", APP_NAME);
    Ok(())
}

/// Draw the latest snapshot and forward terminal input until the app stops
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    theme: &Theme,
    event_tx: mpsc::UnboundedSender<Event>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        terminal.draw(|f| ui::draw(f, &current_state, theme))?;

        if event::poll(INPUT_POLL_INTERVAL)? {
            match event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    let _ = event_tx.send(Event::Key(key));
                }
                TermEvent::Resize(width, height) => {
                    let _ = event_tx.send(Event::Resize { width, height });
                }
                _ => {}
            }
        }

        // Drain state updates; the app dropping its sender means quit
        loop {
            match render_rx.try_recv() {
                Ok(state) => current_state = state,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Ok(()),
            }
        }

        tokio::task::yield_now().await;
    }
}
