//! Submit button for the form

use crate::state::FormStatus;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

const LABEL: &str = "Submit";

/// Width of the button including borders, padding and the shortcut hint
pub fn submit_button_width() -> u16 {
    // " Submit (Ctrl+S) " plus two borders
    (LABEL.len() + crate::platform::SUBMIT_SHORTCUT.len() + 5 + 2) as u16
}

/// Border color of the unfocused button after the last submit attempt
fn outcome_color(status: FormStatus) -> Color {
    match status {
        FormStatus::Valid => Color::Green,
        FormStatus::Invalid => Color::Red,
        FormStatus::Pristine | FormStatus::Validating => Color::DarkGray,
    }
}

/// Render the submit button; focus wins over the last outcome's color
pub fn render_submit_button(frame: &mut Frame, area: Rect, status: FormStatus, is_selected: bool) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(outcome_color(status))
    };

    let label_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let content = Line::from(vec![
        Span::styled(format!(" {LABEL} "), label_style),
        Span::styled(
            format!("({}) ", crate::platform::SUBMIT_SHORTCUT),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let area = Rect {
        width: area.width.min(submit_button_width()),
        ..area
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), area);
}
