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

//! Playback control and state management.
//!
//! This module provides the [`PlaybackController`], which owns the playlist
//! and the playback intent (playing, looping, muted, volume) and is the only
//! place that issues commands to the [`MediaResource`].
//!
//! The controller is synchronous. Whatever delivers user input and media
//! events calls the matching method and renders the state it reports back.
//! Operations on an empty playlist, or before any media has been loaded, do
//! nothing at all rather than fail.

pub mod media;
#[cfg(feature = "mpv")]
pub mod mpv;

use tracing::debug;

use crate::{
    model::{Track, playlist::Playlist},
    player::media::MediaResource,
    util::format::format_time,
};

/// The transport intent last commanded by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Playing,
    Paused,
}

/// Playback position as shown to the user.
#[derive(Clone, Debug, PartialEq)]
pub struct Progress {
    pub elapsed: String,
    pub total: String,
    /// Position as a fraction of the duration, in `[0, 1]`.
    pub fraction: f64,
}

#[derive(Debug)]
pub struct PlaybackController<M> {
    playlist: Playlist,
    media: M,
    is_playing: bool,
    is_looping: bool,
    is_muted: bool,
    volume: f64,
    source_loaded: bool,
}

impl<M: MediaResource> PlaybackController<M> {
    /// Creates a paused controller over `playlist`.
    ///
    /// Nothing is sent to `media` until [`Self::load_current`] or one of the
    /// playback operations is called.
    pub fn new(playlist: Playlist, media: M) -> Self {
        Self {
            playlist,
            media,
            is_playing: false,
            is_looping: false,
            is_muted: false,
            volume: 1.0,
            source_loaded: false,
        }
    }

    /// Points the media at the current track without starting playback.
    pub fn load_current(&mut self) {
        let Some(track) = self.playlist.current_track() else {
            return;
        };

        debug!(title = track.title(), locator = track.locator(), "Loading track");
        self.media.set_source(track.locator());
        self.source_loaded = true;
    }

    /// Flips between playing and paused and reports the new state.
    ///
    /// Pausing keeps the playback position. Without a loaded source this
    /// does nothing and reports the unchanged state.
    pub fn toggle_play_pause(&mut self) -> PlayerState {
        if !self.source_loaded {
            return self.state();
        }

        if self.is_playing {
            self.media.pause();
        } else {
            self.media.play();
        }
        self.is_playing = !self.is_playing;

        debug!(state = ?self.state(), "Toggled playback");
        self.state()
    }

    pub fn play_next(&mut self) {
        if self.playlist.is_empty() {
            return;
        }
        self.playlist.advance();
        self.play_current();
    }

    pub fn play_previous(&mut self) {
        if self.playlist.is_empty() {
            return;
        }
        self.playlist.retreat();
        self.play_current();
    }

    /// Jumps to a random track, possibly the current one, and plays it from
    /// the start.
    pub fn play_shuffled(&mut self) {
        if self.playlist.is_empty() {
            return;
        }
        self.playlist.random_jump();
        self.play_current();
    }

    // Loads the current track from position zero and starts it.
    fn play_current(&mut self) {
        self.load_current();
        self.media.play();
        self.is_playing = true;
    }

    /// Handles the media reaching the end of the current track.
    ///
    /// A looping controller rewinds and replays the same track, otherwise
    /// playback moves on to the next one.
    pub fn on_media_ended(&mut self) {
        if !self.is_looping {
            self.play_next();
            return;
        }

        if !self.source_loaded {
            return;
        }

        debug!("Replaying looped track");
        self.media.set_current_time(0.0);
        self.media.play();
        self.is_playing = true;
    }

    /// Derives the displayed position from the media's live clock.
    ///
    /// Returns `None` while the duration is unknown.
    pub fn on_time_update(&self) -> Option<Progress> {
        let duration = self.known_duration()?;
        let elapsed = self.media.current_time();

        Some(Progress {
            elapsed: format_time(elapsed),
            total: format_time(duration),
            fraction: (elapsed / duration).clamp(0.0, 1.0),
        })
    }

    /// Returns the formatted total time once the media knows its duration.
    pub fn on_metadata_loaded(&self) -> Option<String> {
        self.known_duration().map(format_time)
    }

    /// Moves playback to `fraction` of the way through the current track.
    ///
    /// `fraction` is clamped to `[0, 1]`. Nothing happens while the duration
    /// is unknown.
    pub fn seek(&mut self, fraction: f64) {
        if !self.source_loaded || fraction.is_nan() {
            return;
        }
        let Some(duration) = self.known_duration() else {
            return;
        };

        let target = fraction.clamp(0.0, 1.0) * duration;
        debug!(target, "Seeking");
        self.media.set_current_time(target);
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.is_looping = looping;
    }

    pub fn toggle_looping(&mut self) -> bool {
        self.set_looping(!self.is_looping);
        self.is_looping
    }

    /// Sets the mute intent, forwarded to the media unless the playlist is
    /// empty.
    pub fn set_muted(&mut self, muted: bool) {
        self.is_muted = muted;
        if !self.playlist.is_empty() {
            self.media.set_muted(muted);
        }
    }

    pub fn toggle_muted(&mut self) -> bool {
        self.set_muted(!self.is_muted);
        self.is_muted
    }

    /// Sets the output level, clamped to `[0, 1]`. `NaN` is ignored.
    ///
    /// Like mute, the level is only forwarded when there is something to play.
    pub fn set_volume(&mut self, volume: f64) {
        if volume.is_nan() {
            return;
        }
        self.volume = volume.clamp(0.0, 1.0);
        if !self.playlist.is_empty() {
            self.media.set_volume(self.volume);
        }
    }

    pub fn state(&self) -> PlayerState {
        if self.is_playing {
            PlayerState::Playing
        } else {
            PlayerState::Paused
        }
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_muted(&self) -> bool {
        self.is_muted
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.playlist.current_track()
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    fn known_duration(&self) -> Option<f64> {
        self.media
            .duration()
            .filter(|duration| duration.is_finite() && *duration > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Source(String),
        Play,
        Pause,
        Time(f64),
        Volume(f64),
        Muted(bool),
    }

    #[derive(Debug, Default)]
    struct FakeMedia {
        calls: Vec<Call>,
        time: f64,
        duration: Option<f64>,
    }

    impl MediaResource for FakeMedia {
        fn set_source(&mut self, locator: &str) {
            self.calls.push(Call::Source(locator.to_string()));
            self.time = 0.0;
            self.duration = None;
        }

        fn play(&mut self) {
            self.calls.push(Call::Play);
        }

        fn pause(&mut self) {
            self.calls.push(Call::Pause);
        }

        fn current_time(&self) -> f64 {
            self.time
        }

        fn set_current_time(&mut self, seconds: f64) {
            self.calls.push(Call::Time(seconds));
            self.time = seconds;
        }

        fn duration(&self) -> Option<f64> {
            self.duration
        }

        fn set_volume(&mut self, volume: f64) {
            self.calls.push(Call::Volume(volume));
        }

        fn set_muted(&mut self, muted: bool) {
            self.calls.push(Call::Muted(muted));
        }
    }

    fn controller(count: usize) -> PlaybackController<FakeMedia> {
        let mut playlist = Playlist::with_seed(9);
        for n in 1..=count {
            playlist.append(Track::new(format!("Song {n}"), format!("song{n}.mp3")));
        }
        PlaybackController::new(playlist, FakeMedia::default())
    }

    fn current_title(controller: &PlaybackController<FakeMedia>) -> String {
        controller
            .current_track()
            .expect("current track")
            .title()
            .to_string()
    }

    #[test]
    fn toggle_plays_then_pauses() {
        let mut c = controller(3);
        c.load_current();

        assert_eq!(c.toggle_play_pause(), PlayerState::Playing);
        assert!(c.is_playing());
        assert_eq!(c.media().calls.last(), Some(&Call::Play));

        assert_eq!(c.toggle_play_pause(), PlayerState::Paused);
        assert!(!c.is_playing());
        assert_eq!(c.media().calls.last(), Some(&Call::Pause));
    }

    #[test]
    fn load_current_only_sets_the_source() {
        let mut c = controller(3);
        c.load_current();

        assert_eq!(c.media().calls, vec![Call::Source("song1.mp3".into())]);
        assert_eq!(c.state(), PlayerState::Paused);
    }

    #[test]
    fn toggle_without_source_is_noop() {
        let mut c = controller(3);

        assert_eq!(c.toggle_play_pause(), PlayerState::Paused);
        assert!(c.media().calls.is_empty());
    }

    #[test]
    fn pause_keeps_position() {
        let mut c = controller(2);
        c.load_current();
        c.toggle_play_pause();
        c.media_mut().time = 42.0;
        c.toggle_play_pause();

        assert_eq!(c.media().current_time(), 42.0);
    }

    #[test]
    fn play_next_loads_and_plays() {
        let mut c = controller(3);
        c.play_next();

        assert_eq!(current_title(&c), "Song 2");
        assert_eq!(c.state(), PlayerState::Playing);
        assert_eq!(
            c.media().calls,
            vec![Call::Source("song2.mp3".into()), Call::Play]
        );
    }

    #[test]
    fn play_previous_wraps_to_last() {
        let mut c = controller(3);
        c.play_previous();

        assert_eq!(current_title(&c), "Song 3");
        assert!(c.is_playing());
    }

    #[test]
    fn play_next_while_playing_restarts_from_zero() {
        let mut c = controller(3);
        c.play_next();
        c.media_mut().time = 80.0;
        c.play_next();

        assert_eq!(current_title(&c), "Song 3");
        assert_eq!(c.media().current_time(), 0.0);
        assert!(c.is_playing());
    }

    #[test]
    fn seven_nexts_return_to_start() {
        let mut c = controller(7);
        for _ in 0..7 {
            c.play_next();
        }
        assert_eq!(current_title(&c), "Song 1");
    }

    #[test]
    fn play_shuffled_loads_the_chosen_track() {
        let mut c = controller(7);
        c.play_shuffled();

        let locator = c.current_track().expect("track").locator().to_string();
        assert_eq!(c.media().calls, vec![Call::Source(locator), Call::Play]);
        assert!(c.is_playing());
    }

    #[test]
    fn ended_while_looping_replays_same_track() {
        let mut c = controller(3);
        c.play_next();
        c.set_looping(true);
        c.media_mut().time = 180.0;
        c.media_mut().calls.clear();

        c.on_media_ended();

        assert_eq!(current_title(&c), "Song 2");
        assert_eq!(c.media().calls, vec![Call::Time(0.0), Call::Play]);
        assert!(c.is_playing());
    }

    #[test]
    fn ended_without_looping_moves_on() {
        let mut c = controller(3);
        c.play_next();
        c.media_mut().calls.clear();

        c.on_media_ended();

        assert_eq!(current_title(&c), "Song 3");
        assert_eq!(
            c.media().calls,
            vec![Call::Source("song3.mp3".into()), Call::Play]
        );
    }

    #[test]
    fn seek_scales_by_duration() {
        let mut c = controller(1);
        c.load_current();
        c.media_mut().duration = Some(200.0);

        c.seek(0.5);
        assert_eq!(c.media().current_time(), 100.0);

        c.seek(1.5);
        assert_eq!(c.media().current_time(), 200.0);
    }

    #[test]
    fn seek_with_unknown_duration_is_noop() {
        let mut c = controller(1);
        c.load_current();
        c.media_mut().calls.clear();

        c.seek(0.5);
        assert!(c.media().calls.is_empty());
    }

    #[test]
    fn time_update_reports_progress() {
        let mut c = controller(1);
        c.load_current();
        assert_eq!(c.on_time_update(), None);

        c.media_mut().duration = Some(200.0);
        c.media_mut().time = 125.9;

        let progress = c.on_time_update().expect("progress");
        assert_eq!(progress.elapsed, "2:05");
        assert_eq!(progress.total, "3:20");
        assert!((progress.fraction - 0.6295).abs() < 1e-9);
        assert_eq!(c.on_metadata_loaded().as_deref(), Some("3:20"));
    }

    #[test]
    fn volume_is_clamped() {
        let mut c = controller(1);
        c.set_volume(1.7);
        assert_eq!(c.volume(), 1.0);

        c.set_volume(-0.2);
        assert_eq!(c.volume(), 0.0);

        c.set_volume(f64::NAN);
        assert_eq!(c.volume(), 0.0);
        assert_eq!(c.media().calls, vec![Call::Volume(1.0), Call::Volume(0.0)]);
    }

    #[test]
    fn toggles_report_new_values() {
        let mut c = controller(1);

        assert!(c.toggle_muted());
        assert!(!c.toggle_muted());
        assert_eq!(c.media().calls, vec![Call::Muted(true), Call::Muted(false)]);

        assert!(c.toggle_looping());
        assert!(c.is_looping());
    }

    #[test]
    fn empty_playlist_issues_no_commands() {
        let mut c = controller(0);
        c.load_current();
        c.toggle_play_pause();
        c.play_next();
        c.play_previous();
        c.play_shuffled();
        c.on_media_ended();
        c.set_looping(true);
        c.on_media_ended();
        c.seek(0.5);
        c.set_volume(0.4);
        c.set_muted(true);

        assert!(c.media().calls.is_empty());
        assert!(!c.is_playing());
        assert!(c.on_time_update().is_none());
    }

    #[test]
    fn empty_playlist_keeps_preferences() {
        let mut c = controller(0);
        c.set_volume(0.4);
        assert!(c.toggle_muted());

        assert_eq!(c.volume(), 0.4);
        assert!(c.is_muted());
        assert!(c.media().calls.is_empty());
    }
}
