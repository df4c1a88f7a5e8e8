//! Layout components (main area, status bar)

use crate::app::App;
use crate::state::FormStatus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the form area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

fn status_color(status: FormStatus) -> Color {
    match status {
        FormStatus::Pristine => Color::Gray,
        FormStatus::Validating => Color::Yellow,
        FormStatus::Valid => Color::Green,
        FormStatus::Invalid => Color::Red,
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.form.status();
    let mut spans = vec![Span::styled(
        format!(" ● {} ", status.label()),
        Style::default().fg(status_color(status)),
    )];

    if !app.form.state().is_pristine() {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            format!("attempt #{}", app.form.attempt()),
            Style::default().fg(Color::Gray),
        ));
    }

    let invalid = app.form.errors().len();
    if invalid > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{invalid} invalid"),
            Style::default().fg(Color::Red),
        ));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " Esc:quit ";
    let status_bar =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status_bar, area);

    let quit_width = (quit_hint.len() as u16).min(area.width);
    let quit_area = Rect {
        x: area.right().saturating_sub(quit_width),
        y: area.y,
        width: quit_width,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
