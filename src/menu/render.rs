// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Menu rendering
//!
//! Draws the selection menu with ratatui: title bar, grouped model list,
//! help line. Pure drawing; all state lives in [`MenuState`].

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::state::{MenuRow, MenuState};

/// Main draw function
pub fn draw(frame: &mut Frame, state: &MenuState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Model list
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    draw_title(frame, chunks[0]);
    draw_list(frame, chunks[1], state);
    draw_status(frame, chunks[2]);
}

/// Draw the title bar
fn draw_title(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let title = Paragraph::new(" select model ")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(block);

    frame.render_widget(title, area);
}

/// Draw the grouped model list
fn draw_list(frame: &mut Frame, area: Rect, state: &MenuState) {
    let rows = state.rows();

    // the selected entry's index among render rows, separators included
    let selected_row = rows
        .iter()
        .position(|row| matches!(row, MenuRow::Entry { position, .. } if *position == state.position()))
        .unwrap_or(0);

    // Adjust scroll to keep the selected row visible
    let visible_height = area.height as usize;
    let total_rows = rows.len();
    let scroll = if selected_row < visible_height / 2 {
        0
    } else if selected_row + visible_height / 2 >= total_rows {
        total_rows.saturating_sub(visible_height)
    } else {
        selected_row.saturating_sub(visible_height / 2)
    };

    let items: Vec<ListItem> = rows
        .iter()
        .skip(scroll)
        .take(visible_height)
        .map(|row| match row {
            MenuRow::Separator => ListItem::new(""),
            MenuRow::Entry { position, item } => {
                let is_selected = *position == state.position();
                let prefix = if is_selected { "▶ " } else { "  " };
                let marker = if item.active { " (current)" } else { "" };

                let style = if is_selected {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else if item.active {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                };

                ListItem::new(format!("{}{}{}", prefix, item.label, marker)).style(style)
            }
        })
        .collect();

    frame.render_widget(List::new(items), area);
}

/// Draw the help line
fn draw_status(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));

    let status = Paragraph::new(" ↑↓/jk: Navigate | Enter: Select | q/Esc: Cancel ")
        .style(Style::default().fg(Color::DarkGray))
        .block(block);

    frame.render_widget(status, area);
}
