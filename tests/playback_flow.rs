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

mod common;

use carousel::{
    config::AppConfig,
    model::playlist::Playlist,
    player::{PlaybackController, PlayerState},
};
use common::{RecordingMedia, numbered_playlist};

fn title(controller: &PlaybackController<RecordingMedia>) -> &str {
    controller.current_track().expect("track").title()
}

#[test]
fn listening_session() {
    let mut controller = PlaybackController::new(numbered_playlist(7, 1), RecordingMedia::default());
    controller.load_current();
    assert_eq!(controller.media().source.as_deref(), Some("song1.mp3"));
    assert!(!controller.media().playing);

    assert_eq!(controller.toggle_play_pause(), PlayerState::Playing);
    controller.media_mut().load_metadata(200.0);
    assert_eq!(controller.on_metadata_loaded().as_deref(), Some("3:20"));

    controller.seek(0.5);
    assert_eq!(controller.media().time, 100.0);
    let progress = controller.on_time_update().expect("progress");
    assert_eq!(progress.elapsed, "1:40");
    assert_eq!(progress.fraction, 0.5);

    // The track runs out and playback moves on by itself.
    controller.on_media_ended();
    assert_eq!(title(&controller), "Song 2");
    assert_eq!(controller.media().source.as_deref(), Some("song2.mp3"));
    assert!(controller.is_playing());
    assert!(controller.on_time_update().is_none());

    controller.set_looping(true);
    controller.media_mut().load_metadata(90.0);
    controller.media_mut().time = 90.0;
    controller.on_media_ended();
    assert_eq!(title(&controller), "Song 2");
    assert_eq!(controller.media().time, 0.0);

    assert_eq!(controller.toggle_play_pause(), PlayerState::Paused);
    assert!(!controller.media().playing);

    controller.play_previous();
    assert_eq!(title(&controller), "Song 1");
    assert_eq!(controller.state(), PlayerState::Playing);
}

#[test]
fn seven_nexts_from_configured_playlist_return_home() {
    let config = AppConfig::default();
    let mut controller = PlaybackController::new(config.playlist(), RecordingMedia::default());
    controller.load_current();

    for _ in 0..7 {
        controller.play_next();
    }

    assert_eq!(title(&controller), "Song 1");
    assert_eq!(controller.media().source.as_deref(), Some("./Songs/song1.mp3"));
}

#[test]
fn shuffle_plays_a_track_from_the_playlist() {
    let mut controller = PlaybackController::new(numbered_playlist(7, 5), RecordingMedia::default());

    for _ in 0..20 {
        controller.play_shuffled();
        let locator = controller.current_track().expect("track").locator().to_string();
        assert_eq!(controller.media().source.as_deref(), Some(locator.as_str()));
        assert!(controller.media().playing);
    }
}

#[test]
fn preferences_reach_the_media() {
    let mut controller = PlaybackController::new(numbered_playlist(2, 0), RecordingMedia::default());

    controller.set_volume(0.3);
    controller.set_muted(true);
    assert_eq!(controller.media().volume, 0.3);
    assert!(controller.media().muted);

    controller.set_volume(4.0);
    assert_eq!(controller.media().volume, 1.0);
}

#[test]
fn empty_playlist_stays_silent() {
    let mut controller = PlaybackController::new(Playlist::with_seed(0), RecordingMedia::default());

    controller.load_current();
    assert_eq!(controller.toggle_play_pause(), PlayerState::Paused);
    controller.play_next();
    controller.play_previous();
    controller.play_shuffled();
    controller.on_media_ended();
    controller.seek(0.25);
    controller.set_volume(0.5);
    controller.set_muted(true);

    assert_eq!(controller.media().commands, 0);
    assert_eq!(controller.volume(), 0.5);
    assert!(controller.current_track().is_none());
    assert!(controller.on_metadata_loaded().is_none());
}

#[test]
fn seek_before_metadata_is_ignored() {
    let mut controller = PlaybackController::new(numbered_playlist(3, 0), RecordingMedia::default());
    controller.play_next();
    let commands = controller.media().commands;

    controller.seek(0.75);

    assert_eq!(controller.media().commands, commands);
    assert_eq!(controller.media().time, 0.0);
}
