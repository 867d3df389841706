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

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding},
};

use crate::App;

pub(crate) fn draw_playlist(f: &mut Frame, area: Rect, app: &App) {
    let playlist = app.controller.playlist();
    let current = playlist.current_position();

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1))
        .title(format!(" Playlist | {} tracks ", playlist.len()));

    let items: Vec<ListItem> = playlist
        .iter()
        .enumerate()
        .map(|(position, track)| {
            let style = if Some(position) == current {
                Style::default()
                    .fg(app.theme.accent_colour)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.track_fg)
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>3}  ", position + 1),
                    Style::default().fg(app.theme.track_number_fg),
                ),
                Span::styled(track.title(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_symbol("\u{25B8} ");

    // Selecting the current track keeps it scrolled into view.
    let mut state = ListState::default().with_selected(current);
    f.render_stateful_widget(list, area, &mut state);
}
