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

use carousel::player::PlayerState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    render::icons::{ICON_LOOP, ICON_MUTED, ICON_PAUSE, ICON_PLAY, ICON_VOLUME_HIGH},
};

const UNKNOWN_TIME: &str = "-:--";

pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(chunks[0]);

    let controller = &app.controller;

    // The icon shows what the play key does next.
    let icon = match controller.state() {
        PlayerState::Playing => ICON_PAUSE,
        PlayerState::Paused => ICON_PLAY,
    };

    let title = controller
        .current_track()
        .map(|track| track.title())
        .unwrap_or("No tracks");

    let track_line = Line::from(vec![
        Span::styled(format!(" {} ", icon), Style::default().add_modifier(Modifier::BOLD))
            .fg(Color::White),
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD))
            .fg(app.theme.accent_colour),
    ]);
    f.render_widget(Paragraph::new(track_line), info_chunks[0]);

    let elapsed = app
        .progress
        .as_ref()
        .map(|progress| progress.elapsed.as_str())
        .unwrap_or(UNKNOWN_TIME);
    let total = app.total_time.as_deref().unwrap_or(UNKNOWN_TIME);

    let time_line = Line::from(vec![
        Span::styled(elapsed, Style::default().add_modifier(Modifier::BOLD))
            .fg(app.theme.accent_colour),
        Span::styled(" / ", Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
        Span::styled(total, Style::default().add_modifier(Modifier::BOLD))
            .fg(app.theme.accent_colour),
    ]);
    f.render_widget(
        Paragraph::new(time_line).alignment(Alignment::Right),
        info_chunks[1],
    );

    let control_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(chunks[2]);

    let mode_colour = |active: bool| {
        if active {
            app.theme.accent_colour
        } else {
            app.theme.inactive_colour
        }
    };

    let mode_line = Line::from(vec![
        Span::styled(format!(" {} loop ", ICON_LOOP), Style::default())
            .fg(mode_colour(controller.is_looping())),
        Span::styled(format!(" {} mute ", ICON_MUTED), Style::default())
            .fg(mode_colour(controller.is_muted())),
    ]);
    f.render_widget(Paragraph::new(mode_line), control_chunks[0]);

    let volume_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(5),
        ])
        .split(control_chunks[1]);

    let volume_icon = if controller.is_muted() {
        ICON_MUTED
    } else {
        ICON_VOLUME_HIGH
    };
    f.render_widget(Paragraph::new(volume_icon).fg(Color::White), volume_layout[0]);

    let volume = controller.volume().clamp(0.0, 1.0);

    let volume_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(mode_colour(!controller.is_muted()))
                .bg(app.theme.gauge_track_colour),
        )
        .ratio(volume)
        .label("")
        .use_unicode(true);
    f.render_widget(volume_gauge, volume_layout[1]);

    let volume_label = Paragraph::new(format!(" {}%", (volume * 100.0).round() as u16))
        .alignment(Alignment::Right)
        .fg(Color::White);
    f.render_widget(volume_label, volume_layout[2]);

    let position = app
        .progress
        .as_ref()
        .map(|progress| progress.fraction)
        .unwrap_or(0.0)
        .clamp(0.0, 1.0);

    let position_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(app.theme.accent_colour)
                .bg(app.theme.gauge_track_colour),
        )
        .ratio(position)
        .label("")
        .use_unicode(true);

    f.render_widget(position_gauge, chunks[4]);
}
