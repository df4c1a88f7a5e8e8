//! Acknowledgement dialog: shows the submitted record

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the accepted record as a centered overlay
pub fn render_acknowledgement_dialog(frame: &mut Frame, record_json: &str) {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::styled("Enter", key),
        Span::raw("/"),
        Span::styled("Esc", key),
        Span::raw(": dismiss  "),
        Span::styled(crate::platform::COPY_HINT, Style::default().fg(Color::Gray)),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Form submitted",
            title_color: Color::Green,
            border_color: Color::Green,
            message: record_json,
            hint: Some(hint),
            max_width: 70,
        },
    );
}
