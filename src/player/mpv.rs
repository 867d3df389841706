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

//! MPV-backed media resource.
//!
//! This module implements [`MediaResource`] on top of `libmpv`. The mpv
//! context lives on a dedicated worker thread so that loading and seeking
//! never block the caller.
//!
//! # Architecture
//!
//! The engine operates using a dual-channel communication pattern:
//! 1. **Command Channel**: Receives [`MpvCommand`]s from the [`MpvMedia`]
//!    handle (load, play, pause, seek and so on).
//! 2. **Event Channel**: Broadcasts [`MediaEvent`]s to the owner of the
//!    handle as mpv reports property changes.
//!
//! The worker also mirrors mpv's position and duration into a shared
//! [`Timeline`] so the handle can answer clock queries synchronously.

use std::{
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        mpsc::{self, Receiver, Sender, TryRecvError},
    },
    thread,
};

use mpv::Format;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::player::media::{MediaEvent, MediaResource};

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("failed to initialise mpv")]
    Init(#[source] mpv::Error),

    #[error("mpv command `{command}` failed")]
    Command {
        command: String,
        #[source]
        source: mpv::Error,
    },

    #[error("media event receiver has gone away")]
    EventChannelClosed,
}

#[derive(Debug)]
enum MpvCommand {
    Load(String),
    Play,
    Pause,
    SeekTo(f64),
    SetVolume(f64),
    SetMuted(bool),
}

/// Options applied to every mpv context.
const MPV_OPTIONS: [(&str, &str); 3] = [
    ("vo", "null"),
    // Keep a finished file loaded so it can be rewound for looping.
    ("keep-open", "yes"),
    // Loading a file must not start it, only `Play` does.
    ("pause", "yes"),
];

/// Last known clock of the loaded media.
#[derive(Debug, Default, Clone, Copy)]
struct Timeline {
    position: f64,
    duration: Option<f64>,
    /// Set from a load until the new file reports its duration.
    loading: bool,
}

impl Timeline {
    fn begin_load(&mut self) {
        *self = Timeline {
            loading: true,
            ..Timeline::default()
        };
    }

    /// Applies an observed mpv property change and returns the event it raises.
    ///
    /// Changes arriving while a load is pending belong to the previous file and
    /// are dropped, so a stale end of file never skips the new track.
    fn apply(&mut self, name: &str, change: Format) -> Option<MediaEvent> {
        match (name, change) {
            ("duration", Format::Double(duration)) if duration > 0.0 => {
                self.loading = false;
                self.duration = Some(duration);
                Some(MediaEvent::MetadataLoaded)
            }
            _ if self.loading => None,
            ("time-pos", Format::Double(seconds)) if seconds >= 0.0 => {
                self.position = seconds;
                Some(MediaEvent::TimeUpdate)
            }
            ("eof-reached", Format::Flag(true)) => Some(MediaEvent::Ended),
            _ => None,
        }
    }
}

/// A handle to the mpv worker.
///
/// Dropping the handle closes the command channel, which shuts the worker
/// down.
#[derive(Debug)]
pub struct MpvMedia {
    command_tx: Sender<MpvCommand>,
    timeline: Arc<Mutex<Timeline>>,
}

impl MpvMedia {
    /// Spawns the mpv worker thread and returns a handle to it.
    ///
    /// # Arguments
    ///
    /// * `event_tx` - The channel receiving media lifecycle events, usually the
    ///   application's main event channel.
    pub fn spawn<E>(event_tx: Sender<E>) -> Self
    where
        E: From<MediaEvent> + Send + 'static,
    {
        let (command_tx, command_rx) = mpsc::channel();
        let timeline = Arc::new(Mutex::new(Timeline::default()));

        let worker_timeline = Arc::clone(&timeline);
        thread::spawn(move || {
            let error_tx = event_tx.clone();
            if let Err(e) = mpv_worker(command_rx, event_tx, worker_timeline) {
                error!(error = %e, "mpv worker failed");
                let _ = error_tx.send(MediaEvent::BackendFailed(e.to_string()).into());
            }
        });

        Self {
            command_tx,
            timeline,
        }
    }

    fn send(&self, command: MpvCommand) {
        if let Err(e) = self.command_tx.send(command) {
            warn!(command = ?e.0, "mpv worker is not running, command dropped");
        }
    }

    fn timeline(&self) -> MutexGuard<'_, Timeline> {
        lock_timeline(&self.timeline)
    }

    /// Whether a newly set source has yet to report its duration.
    ///
    /// An end of file received meanwhile was raised by the previous source.
    pub fn is_loading(&self) -> bool {
        self.timeline().loading
    }
}

impl MediaResource for MpvMedia {
    fn set_source(&mut self, locator: &str) {
        self.timeline().begin_load();
        self.send(MpvCommand::Load(locator.to_string()));
    }

    fn play(&mut self) {
        self.send(MpvCommand::Play);
    }

    fn pause(&mut self) {
        self.send(MpvCommand::Pause);
    }

    fn current_time(&self) -> f64 {
        self.timeline().position
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.timeline().position = seconds;
        self.send(MpvCommand::SeekTo(seconds));
    }

    fn duration(&self) -> Option<f64> {
        self.timeline().duration
    }

    fn set_volume(&mut self, volume: f64) {
        self.send(MpvCommand::SetVolume(volume));
    }

    fn set_muted(&mut self, muted: bool) {
        self.send(MpvCommand::SetMuted(muted));
    }
}

// A panic while holding the lock leaves plain numbers behind, still usable.
fn lock_timeline(timeline: &Mutex<Timeline>) -> MutexGuard<'_, Timeline> {
    timeline.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The primary execution loop for the mpv backend.
///
/// Runs until the command channel is closed.
///
/// # Errors
///
/// Returns an error if the mpv context cannot be created, if mpv rejects a
/// command, or if nobody is listening for events any more.
fn mpv_worker<E>(
    command_rx: Receiver<MpvCommand>,
    event_tx: Sender<E>,
    timeline: Arc<Mutex<Timeline>>,
) -> Result<(), MediaError>
where
    E: From<MediaEvent>,
{
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new()?;
        for (option, value) in MPV_OPTIONS {
            builder.set_option(option, value)?;
        }
        builder.build()
    })()
    .map_err(MediaError::Init)?;

    handler
        .observe_property::<f64>("duration", 0)
        .map_err(MediaError::Init)?;
    handler
        .observe_property::<f64>("time-pos", 0)
        .map_err(MediaError::Init)?;
    handler
        .observe_property::<bool>("eof-reached", 0)
        .map_err(MediaError::Init)?;

    debug!("mpv worker started");

    while process_commands(&mut handler, &command_rx)? {
        process_mpv_events(&mut handler, &event_tx, &timeline)?;
    }

    debug!("mpv worker stopped");
    Ok(())
}

/// Drains and executes all pending commands.
///
/// Returns `false` once the handle has been dropped.
fn process_commands(
    handler: &mut mpv::MpvHandler,
    command_rx: &Receiver<MpvCommand>,
) -> Result<bool, MediaError> {
    loop {
        let command = match command_rx.try_recv() {
            Ok(command) => command,
            Err(TryRecvError::Empty) => return Ok(true),
            Err(TryRecvError::Disconnected) => return Ok(false),
        };

        debug!(?command, "mpv command");

        let result = match &command {
            // The handle has already reset the timeline.
            MpvCommand::Load(locator) => handler.command(&["loadfile", locator, "replace"]),
            MpvCommand::Play => handler.set_property("pause", false),
            MpvCommand::Pause => handler.set_property("pause", true),
            MpvCommand::SeekTo(seconds) => {
                handler.command(&["seek", &seconds.to_string(), "absolute"])
            }
            MpvCommand::SetVolume(volume) => handler.set_property("volume", volume * 100.0),
            MpvCommand::SetMuted(muted) => handler.set_property("mute", *muted),
        };

        result.map_err(|source| MediaError::Command {
            command: format!("{:?}", command),
            source,
        })?;
    }
}

/// Polls for an mpv event and translates it into a [`MediaEvent`].
///
/// Waits for up to 50ms so the command queue is drained regularly.
fn process_mpv_events<E>(
    handler: &mut mpv::MpvHandler,
    event_tx: &Sender<E>,
    timeline: &Mutex<Timeline>,
) -> Result<(), MediaError>
where
    E: From<MediaEvent>,
{
    let Some(mpv_event) = handler.wait_event(0.05) else {
        return Ok(());
    };

    let media_event = match mpv_event {
        mpv::Event::PropertyChange { name, change, .. } => {
            lock_timeline(timeline).apply(name, change)
        }
        _ => None,
    };

    if let Some(event) = media_event {
        event_tx
            .send(event.into())
            .map_err(|_| MediaError::EventChannelClosed)?;
    }

    Ok(())
}
