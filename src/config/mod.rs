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

//! Application configuration.
//!
//! This module manages the application configuration file: the track list
//! the playlist is built from, and the volume, mute and loop preferences the
//! player starts with.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::model::{Track, playlist::Playlist};

pub const CONFIG_NAME: &str = "carousel";

const DEFAULT_TRACK_COUNT: usize = 7;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to locate the configuration file")]
    Locate(#[source] confy::ConfyError),

    #[error("failed to load configuration from {path}")]
    Load {
        path: PathBuf,
        #[source]
        source: confy::ConfyError,
    },

    #[error("failed to store configuration to {path}")]
    Store {
        path: PathBuf,
        #[source]
        source: confy::ConfyError,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Output level in percent.
    pub volume: u8,
    pub muted: bool,
    pub looping: bool,
    pub tracks: Vec<Track>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            volume: 100,
            muted: false,
            looping: false,
            tracks: (1..=DEFAULT_TRACK_COUNT)
                .map(|n| Track::new(format!("Song {n}"), format!("./Songs/song{n}.mp3")))
                .collect(),
        }
    }
}

impl AppConfig {
    /// Builds the playlist in configuration order.
    pub fn playlist(&self) -> Playlist {
        self.tracks.iter().cloned().collect()
    }

    /// The configured volume as a level in `[0, 1]`.
    pub fn volume_level(&self) -> f64 {
        f64::from(self.volume.min(100)) / 100.0
    }
}

/// Returns the location of the configuration file.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    confy::get_configuration_file_path(CONFIG_NAME, None).map_err(ConfigError::Locate)
}

pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&config_path()?)
}

pub fn save_config(cfg: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(&config_path()?, cfg)
}

/// Loads the configuration at `path`, writing the defaults there first if the
/// file does not exist yet.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    confy::load_path(path).map_err(|source| ConfigError::Load {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the configuration at `path`, falling back to the defaults when it
/// cannot be read.
///
/// The returned path is where preferences may be stored back. It is `None`
/// after a fallback, so a broken file is left for the user to repair rather
/// than replaced by the defaults.
pub fn load_config_or_default(path: &Path) -> (AppConfig, Option<PathBuf>) {
    match load_config_from(path) {
        Ok(cfg) => (cfg, Some(path.to_path_buf())),
        Err(e) => {
            warn!("Using default configuration: {:#}", anyhow::Error::new(e));
            (AppConfig::default(), None)
        }
    }
}

pub fn save_config_to(path: &Path, cfg: &AppConfig) -> Result<(), ConfigError> {
    confy::store_path(path, cfg).map_err(|source| ConfigError::Store {
        path: path.to_path_buf(),
        source,
    })
}
