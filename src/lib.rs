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

//! # Carousel.
//!
//! The playback core of a circular playlist player.
//!
//! * [`model::playlist::Playlist`] keeps the tracks in a ring with a movable
//!   cursor, supporting forward, backward and random navigation.
//! * [`player::PlaybackController`] owns the playback intent (playing, looping,
//!   muted, volume) and is the only component that talks to the
//!   [`player::media::MediaResource`] doing the actual audio output.
//!
//! The terminal front end lives in the `carousel` binary; nothing in this
//! library knows about keys or widgets.

pub mod config;
pub mod model;
pub mod player;
pub mod util;
