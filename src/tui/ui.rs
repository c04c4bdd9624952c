//! Stateless UI rendering.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Renders the header, message log and input box.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Status
            Constraint::Min(5),    // Messages
            Constraint::Length(3), // Input
        ])
        .split(frame.area());

    let title = Paragraph::new("Catch Phrase")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_status(frame, chunks[1], app);
    draw_messages(frame, chunks[2], app);
    draw_input(frame, chunks[3], app);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            format!("Score: {}", app.score()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];

    match app.time_left() {
        Some(secs) => {
            let color = if secs <= 10 { Color::Red } else { Color::Yellow };
            spans.push(Span::styled(
                format!("Time: {:>2}s", secs),
                Style::default().fg(color),
            ));
        }
        None => spans.push(Span::styled("Time: --", Style::default().fg(Color::DarkGray))),
    }

    if let Some(word) = app.secret_word() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("Word: {}", word),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ));
    }

    let title = app.role().map(|role| role.to_string()).unwrap_or_default();
    let status = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(status, area);
}

fn draw_messages(frame: &mut Frame, area: Rect, app: &App) {
    let visible = area.height.saturating_sub(2) as usize;
    let messages = app.messages();
    let start = messages.len().saturating_sub(visible);

    let lines: Vec<Line> = messages[start..]
        .iter()
        .map(|message| {
            if message.starts_with("> ") {
                Line::styled(message.as_str(), Style::default().fg(Color::DarkGray))
            } else {
                Line::raw(message.as_str())
            }
        })
        .collect();

    let log = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(log, area);
}

fn draw_input(frame: &mut Frame, area: Rect, app: &App) {
    let title = if app.is_finished() {
        "Press any key to exit".to_string()
    } else {
        app.prompt()
            .map(|prompt| format!("{} (Esc quits)", prompt))
            .unwrap_or_else(|| "Please wait...".to_string())
    };

    let input = Paragraph::new(app.input())
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(input, area);
}
