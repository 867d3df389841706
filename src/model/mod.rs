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

//! Domain models.
//!
//! A [`Track`] is the unit of playback, and a [`playlist::Playlist`] arranges
//! tracks in a ring.

pub mod playlist;

use serde::{Deserialize, Serialize};

/// A playable entry: a display title and an opaque locator understood by the
/// media backend (usually a file path).
///
/// Tracks are created when the playlist is built and never change afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Track {
    title: String,
    locator: String,
}

impl Track {
    pub fn new(title: impl Into<String>, locator: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            locator: locator.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn locator(&self) -> &str {
        &self.locator
    }
}
