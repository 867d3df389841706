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

//! The media playback device seen by the controller.

/// A single playback device.
///
/// Implementations render audio for one source at a time. Commands are fire
/// and forget: a device that cannot honour one logs it and carries on, the
/// caller never sees a failure.
pub trait MediaResource {
    /// Replaces the loaded media. The new source starts at position zero and
    /// its duration is unknown until its metadata has loaded.
    ///
    /// Loading never starts playback; the source stays paused until
    /// [`play`](Self::play) is called.
    fn set_source(&mut self, locator: &str);

    fn play(&mut self);

    fn pause(&mut self);

    /// Playback position in seconds.
    fn current_time(&self) -> f64;

    fn set_current_time(&mut self, seconds: f64);

    /// Length of the loaded media in seconds, `None` until metadata loads.
    fn duration(&self) -> Option<f64>;

    /// Output level in `[0, 1]`.
    fn set_volume(&mut self, volume: f64);

    fn set_muted(&mut self, muted: bool);
}

/// Lifecycle notifications raised by a media device.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Playback reached the end of the loaded media.
    Ended,
    /// The playback position moved.
    TimeUpdate,
    /// The duration of the loaded media became known.
    MetadataLoaded,
    /// The device stopped working and will not raise further events.
    BackendFailed(String),
}
