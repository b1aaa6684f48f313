//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.

use libemojipick::{Picker, ViewKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{AppState, InputMethod};

/// Width of one grid cell in terminal columns
const CELL_WIDTH: usize = 4;

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState, picker: &Picker) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input line
            Constraint::Min(3),    // Grid
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    render_input(frame, chunks[0], state);
    render_grid(frame, chunks[1], state, picker);
    render_status_bar(frame, chunks[2], state, picker);

    if state.help_visible {
        render_help_overlay(frame, area);
    }
}

fn accent(state: &AppState, color: Color) -> Style {
    if state.config.colors_enabled {
        Style::default().fg(color)
    } else {
        Style::default()
    }
}

/// Render the query (or literal text) line
fn render_input(frame: &mut Frame, area: Rect, state: &AppState) {
    let (title, text) = match state.input_method {
        InputMethod::Search => (" Search ", state.query.as_str()),
        InputMethod::Text => (" Text ", state.literal.as_str()),
    };

    let line = if text.is_empty() {
        Line::from(Span::styled(
            "Type to search, F1 to browse everything",
            accent(state, Color::DarkGray),
        ))
    } else {
        Line::from(vec![Span::raw(text), Span::styled("▏", accent(state, Color::Cyan))])
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .title(title)
            .title(Line::from(format!(" [{}] ", state.input_method.label())).alignment(Alignment::Right))
            .borders(Borders::ALL)
            .border_style(accent(state, Color::Cyan)),
    );
    frame.render_widget(input, area);
}

/// Render the visible page of the active view as a grid
fn render_grid(frame: &mut Frame, area: Rect, state: &AppState, picker: &Picker) {
    let grid = picker.grid();
    let page = picker.visible_page();

    let title = match state.view {
        ViewKind::Recents => " Recent ".to_string(),
        ViewKind::Search => format!(" {} matches ", state.view_len),
        ViewKind::HelpBrowse => " All emojis ".to_string(),
    };
    let page_info = if state.view_len > 0 {
        let page_size = grid.page_size().max(1);
        format!(
            " page {}/{} ",
            page.offset / page_size + 1,
            state.view_len.div_ceil(page_size)
        )
    } else {
        String::new()
    };

    let block = Block::default()
        .title(title)
        .title(Line::from(page_info).alignment(Alignment::Right))
        .borders(Borders::ALL);

    if page.entries.is_empty() {
        let message = match state.view {
            ViewKind::Recents => "Nothing picked yet",
            _ => "No matches",
        };
        let empty = Paragraph::new(Span::styled(message, accent(state, Color::Yellow)))
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let highlight = if state.config.colors_enabled {
        Style::default().bg(Color::Cyan).fg(Color::Black).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };

    let lines: Vec<Line> = page
        .entries
        .chunks(grid.cols.max(1))
        .enumerate()
        .map(|(row, entries)| {
            let spans: Vec<Span> = entries
                .iter()
                .enumerate()
                .map(|(col, emoji)| {
                    let cell = format!(" {:<width$}", emoji.glyph(), width = CELL_WIDTH - 1);
                    if page.highlighted == Some(row * grid.cols + col) {
                        Span::styled(cell, highlight)
                    } else {
                        Span::raw(cell)
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render status bar with the highlighted emoji and key hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, picker: &Picker) {
    let selected = match picker.selected() {
        Some(emoji) => Span::styled(
            format!("{} {}", emoji.glyph(), emoji.name()),
            accent(state, Color::Green).add_modifier(Modifier::BOLD),
        ),
        None => Span::raw(""),
    };

    let mut first = vec![selected];
    if let Some(ref message) = state.status.message {
        first.push(Span::raw(" | "));
        first.push(Span::raw(message.as_str()));
    }

    let hints = "Enter: pick | Shift+Enter: pick, stay open | F1: all | F2: input | F3: help | Esc: back";
    let lines = vec![
        Line::from(first),
        Line::from(Span::styled(hints, accent(state, Color::Gray))),
    ];

    frame.render_widget(Paragraph::new(lines).block(Block::default().borders(Borders::TOP)), area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled("Keyboard Shortcuts", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("  type           - Search"),
        Line::from("  arrows, Tab    - Move"),
        Line::from("  Enter          - Pick and close"),
        Line::from("  Shift+Enter    - Pick and stay open"),
        Line::from("  Ctrl+C         - Pick and stay open"),
        Line::from("  Esc            - Clear search, otherwise quit"),
        Line::from("  F1             - Browse everything, again for next page"),
        Line::from("  F2             - Switch between emoji and text input"),
        Line::from("  mouse wheel    - Scroll"),
        Line::from(""),
        Line::from("Press Esc or F3 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
