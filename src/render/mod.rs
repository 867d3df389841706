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

mod icons;
mod player;
mod playlist;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::{
    App,
    render::{
        icons::{ICON_LOOP, ICON_MUTED, ICON_NEXT, ICON_PLAY, ICON_PREV, ICON_SHUFFLE},
        player::draw_player,
        playlist::draw_playlist,
    },
};

pub(crate) fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    // Outer layout: playlist, player, key hints
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(7),
            Constraint::Length(1),
        ])
        .split(area);

    draw_playlist(f, outer[0], app);
    draw_player(f, outer[1], app);
    draw_hints(f, outer[2], app);
}

fn draw_hints(f: &mut Frame, area: Rect, app: &App) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(app.theme.accent_colour));
    let label = |l: &'static str| Span::styled(l, Style::default().fg(app.theme.hint_fg));

    let hints = Line::from(vec![
        key(" space "),
        label(ICON_PLAY),
        key("  \u{2190} "),
        label(ICON_PREV),
        key("  \u{2192} "),
        label(ICON_NEXT),
        key("  s "),
        label(ICON_SHUFFLE),
        key("  l "),
        label(ICON_LOOP),
        key("  m "),
        label(ICON_MUTED),
        key("  -/= "),
        label("volume"),
        key("  0-9 ,/. "),
        label("seek"),
        key("  q "),
        label("quit"),
    ]);

    f.render_widget(Paragraph::new(hints), area);
}
