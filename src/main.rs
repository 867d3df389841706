// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Carousel TUI.
//!
//! A terminal front end for the circular playlist player.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns the [`PlaybackController`], manages the terminal
//!   lifecycle and renders the UI.
//! * The **MPV Worker** plays audio and reports media lifecycle events.
//! * **Input and Tick Threads** capture key presses and drive periodic
//!   redraws.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Every thread
//! talks to the main thread through a single `std::sync::mpsc` channel of
//! [`AppEvent`]s.

mod events;
mod render;
mod theme;

use anyhow::{Context, Result};
use carousel::{
    config::{self, AppConfig},
    player::{PlaybackController, Progress, mpv::MpvMedia},
};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs, io,
    path::Path,
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::{
    events::{AppEvent, process_events},
    theme::Theme,
};

const LOG_FILE: &str = "carousel.log";

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub controller: PlaybackController<MpvMedia>,

    pub progress: Option<Progress>,
    pub total_time: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    ///
    /// The playlist is built from the configured tracks and the first track
    /// is loaded, paused, ready to play.
    pub fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let media = MpvMedia::spawn(event_tx.clone());

        let mut controller = PlaybackController::new(config.playlist(), media);
        controller.set_volume(config.volume_level());
        controller.set_muted(config.muted);
        controller.set_looping(config.looping);
        controller.load_current();

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            controller,
            progress: None,
            total_time: None,
        }
    }

    /// Copies the current playback preferences back into the configuration.
    fn remember_preferences(&mut self) {
        self.config.volume = (self.controller.volume() * 100.0).round() as u8;
        self.config.muted = self.controller.is_muted();
        self.config.looping = self.controller.is_looping();
    }
}

/// The entry point of the application.
///
/// Sets up logging, loads the configuration, manages the terminal lifecycle,
/// and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let _log_guard = init_logging().context("Failed to initialise logging")?;

    let (config, save_path) = match config::config_path() {
        Ok(path) => config::load_config_or_default(&path),
        Err(e) => {
            warn!("Using default configuration: {:#}", anyhow::Error::new(e));
            (AppConfig::default(), None)
        }
    };
    info!(tracks = config.tracks.len(), "Starting");

    let mut app = App::new(config);

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    // Preferences are only written back over a configuration that loaded.
    if let Some(path) = save_path {
        app.remember_preferences();
        if let Err(e) = config::save_config_to(&path, &app.config) {
            warn!("Failed to save preferences: {:#}", anyhow::Error::new(e));
        }
    }

    res.context("Application error occurred")
}

/// Installs a `tracing` subscriber writing to a log file next to the
/// configuration file.
///
/// The terminal belongs to the UI, so nothing is logged to stdout or stderr.
/// The returned guard flushes the log when dropped.
fn init_logging() -> Result<WorkerGuard> {
    let log_dir = config::config_path()
        .ok()
        .and_then(|path| path.parent().map(Path::to_path_buf))
        .unwrap_or_else(std::env::temp_dir);
    create_log_dir(&log_dir)?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&log_dir, LOG_FILE));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    Ok(guard)
}

fn create_log_dir(log_dir: &Path) -> Result<()> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))
}

/// Prepares the terminal for the TUI application.
///
/// Enables raw mode to capture all keyboard input and switches to the
/// alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`] and makes the cursor
/// visible again. It is best-effort and does not return a result.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    process_events(terminal, app)
}
