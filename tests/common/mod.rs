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

#![allow(dead_code)]

use carousel::{
    model::{Track, playlist::Playlist},
    player::media::MediaResource,
};

/// A media device that records what it was told and keeps a clock the test
/// can move by hand.
#[derive(Debug, Default)]
pub struct RecordingMedia {
    pub source: Option<String>,
    pub playing: bool,
    pub time: f64,
    pub duration: Option<f64>,
    pub volume: f64,
    pub muted: bool,
    pub commands: usize,
}

impl RecordingMedia {
    /// Simulates the metadata of the loaded source arriving.
    pub fn load_metadata(&mut self, duration: f64) {
        self.duration = Some(duration);
    }
}

impl MediaResource for RecordingMedia {
    fn set_source(&mut self, locator: &str) {
        self.commands += 1;
        self.source = Some(locator.to_string());
        self.time = 0.0;
        self.duration = None;
    }

    fn play(&mut self) {
        self.commands += 1;
        self.playing = true;
    }

    fn pause(&mut self) {
        self.commands += 1;
        self.playing = false;
    }

    fn current_time(&self) -> f64 {
        self.time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.commands += 1;
        self.time = seconds;
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn set_volume(&mut self, volume: f64) {
        self.commands += 1;
        self.volume = volume;
    }

    fn set_muted(&mut self, muted: bool) {
        self.commands += 1;
        self.muted = muted;
    }
}

pub fn numbered_playlist(count: usize, seed: u64) -> Playlist {
    let mut playlist = Playlist::with_seed(seed);
    playlist.extend((1..=count).map(|n| Track::new(format!("Song {n}"), format!("song{n}.mp3"))));
    playlist
}
