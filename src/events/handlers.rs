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

use anyhow::{Result, bail};
use tracing::{debug, error};

use crate::App;

pub(super) fn handle_media_ended(app: &mut App) {
    if app.controller.media().is_loading() {
        debug!("Ignoring end of the previous track");
        return;
    }

    let looping = app.controller.is_looping();
    debug!(looping, "Track ended");

    app.controller.on_media_ended();
    if !looping {
        clear_timeline(app);
    }
}

pub(super) fn handle_time_update(app: &mut App) {
    if let Some(progress) = app.controller.on_time_update() {
        app.progress = Some(progress);
    }
}

pub(super) fn handle_metadata_loaded(app: &mut App) {
    app.total_time = app.controller.on_metadata_loaded();
}

pub(super) fn handle_backend_failed(reason: String) -> Result<()> {
    error!(%reason, "Media backend failed");
    bail!("Media backend failure: {}", reason)
}

// The displayed clock belongs to the previous track until the new one reports.
pub(super) fn clear_timeline(app: &mut App) {
    app.progress = None;
    app.total_time = None;
}
