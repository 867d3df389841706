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

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::{App, events::AppEvent};

use super::handlers::clear_timeline;

const FINE_VOLUME_DELTA: i32 = 1;
const VOLUME_DELTA: i32 = 5;

const SCRUB_DELTA: i32 = 5;

/// Maps keyboard input to playback commands.
///
/// Keys stand in for the player's buttons and sliders:
///
/// * **Transport**: space toggles play/pause, the arrow keys move to the next
///   or previous track and `s` jumps to a random one.
/// * **Modes**: `l` toggles looping and `m` toggles mute.
/// * **Volume**: `-`/`=` step by 5%, `_`/`+` by 1%.
/// * **Scrubbing**: `0`-`9` jump to 0%-90% of the track, `,`/`.` step by 5%.
///
/// # Errors
///
/// Returns an error if the exit event cannot be delivered.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char(' ') => {
            app.controller.toggle_play_pause();
        }
        KeyCode::Right => {
            app.controller.play_next();
            clear_timeline(app);
        }
        KeyCode::Left => {
            app.controller.play_previous();
            clear_timeline(app);
        }
        KeyCode::Char('s') => {
            app.controller.play_shuffled();
            clear_timeline(app);
        }

        KeyCode::Char('l') => {
            app.controller.toggle_looping();
        }
        KeyCode::Char('m') => {
            app.controller.toggle_muted();
        }

        KeyCode::Char('-') => adjust_volume(app, -VOLUME_DELTA),
        KeyCode::Char('=') => adjust_volume(app, VOLUME_DELTA),
        KeyCode::Char('_') => adjust_volume(app, -FINE_VOLUME_DELTA),
        KeyCode::Char('+') => adjust_volume(app, FINE_VOLUME_DELTA),

        KeyCode::Char(digit @ '0'..='9') => {
            let tenths = digit.to_digit(10).unwrap_or_default() as i32;
            scrub_to(app, tenths * 10);
        }
        KeyCode::Char(',') => adjust_scrub(app, -SCRUB_DELTA),
        KeyCode::Char('.') => adjust_scrub(app, SCRUB_DELTA),

        _ => {}
    }

    Ok(())
}

// Volume and scrub positions are whole percentages, like the sliders they
// replace.

fn adjust_volume(app: &mut App, delta: i32) {
    let percent = (app.controller.volume() * 100.0).round() as i32 + delta;
    app.controller
        .set_volume(f64::from(percent.clamp(0, 100)) / 100.0);
}

fn adjust_scrub(app: &mut App, delta: i32) {
    let Some(progress) = &app.progress else {
        return;
    };
    let percent = (progress.fraction * 100.0).round() as i32 + delta;
    scrub_to(app, percent);
}

fn scrub_to(app: &mut App, percent: i32) {
    app.controller.seek(f64::from(percent.clamp(0, 100)) / 100.0);
}
