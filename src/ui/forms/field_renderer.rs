//! Field rendering: one labelled input control plus its error annotation

use crate::schema::{FieldSchema, InputControl};
use crate::state::FieldView;
use crate::validation::RawValue;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

/// Rows a field occupies: bordered control plus one error line
pub fn field_height(control: InputControl) -> u16 {
    let control_rows = match control {
        // Nine checkboxes need two lines on narrow terminals
        InputControl::Checkboxes => 4,
        _ => 3,
    };
    control_rows + 1
}

/// Parse `#rrggbb` into a terminal color
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Marker in front of an option of a radio or checkbox group
pub fn option_marker(control: InputControl, selected: bool) -> &'static str {
    match (control, selected) {
        (InputControl::Checkboxes, true) => "[x]",
        (InputControl::Checkboxes, false) => "[ ]",
        (_, true) => "(•)",
        (_, false) => "( )",
    }
}

fn is_option_selected(value: Option<&RawValue>, option: &str) -> bool {
    match value {
        Some(RawValue::Text(s)) => s == option,
        Some(RawValue::Many(items)) => items.iter().any(|i| i == option),
        None => false,
    }
}

/// Draw a field and, beneath it, its error message if any
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    view: FieldView,
    is_active: bool,
    option_cursor: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Control
            Constraint::Length(1), // Error annotation
        ])
        .split(area);

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if view.error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = if view.schema.is_required() {
        format!(" {} * ", view.schema.label)
    } else {
        format!(" {} ", view.schema.label)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let content = control_line(view, is_active, option_cursor);
    frame.render_widget(
        Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .block(block),
        chunks[0],
    );

    if let Some(error) = view.error {
        let annotation = Paragraph::new(Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(annotation, chunks[1]);
    }
}

fn control_line(view: FieldView, is_active: bool, option_cursor: usize) -> Line<'static> {
    let schema = view.schema;
    match schema.control {
        InputControl::Text | InputControl::Number | InputControl::Date => {
            text_line(schema, view.value, is_active, None)
        }
        InputControl::Color => {
            let swatch = view
                .value
                .and_then(RawValue::as_text)
                .and_then(parse_hex_color);
            text_line(schema, view.value, is_active, swatch)
        }
        InputControl::Select => select_line(schema, view.value, is_active),
        InputControl::Radio | InputControl::Checkboxes => {
            options_line(schema, view.value, is_active, option_cursor)
        }
    }
}

fn text_line(
    schema: &FieldSchema,
    value: Option<&RawValue>,
    is_active: bool,
    swatch: Option<Color>,
) -> Line<'static> {
    let text = value.and_then(RawValue::as_text).unwrap_or_default();
    let mut spans = Vec::new();

    if let Some(color) = swatch {
        spans.push(Span::styled("██ ", Style::default().fg(color)));
    }

    if text.is_empty() && !is_active {
        let placeholder = schema.placeholder.as_deref().unwrap_or("(empty)");
        spans.push(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        let style = if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        spans.push(Span::styled(text.to_string(), style));
    }

    if is_active {
        spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

fn select_line(schema: &FieldSchema, value: Option<&RawValue>, is_active: bool) -> Line<'static> {
    let current = value.and_then(RawValue::as_text).unwrap_or_default();
    let label = if current.is_empty() {
        schema.placeholder.clone().unwrap_or_else(|| "Select".to_string())
    } else {
        schema.choice_label(current).to_string()
    };
    let label_style = if current.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    if is_active {
        Line::from(vec![
            Span::styled("◀ ", Style::default().fg(Color::Cyan)),
            Span::styled(label, label_style),
            Span::styled(" ▶", Style::default().fg(Color::Cyan)),
        ])
    } else {
        Line::from(Span::styled(label, label_style))
    }
}

fn options_line(
    schema: &FieldSchema,
    value: Option<&RawValue>,
    is_active: bool,
    option_cursor: usize,
) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, choice) in schema.choices.iter().enumerate() {
        let selected = is_option_selected(value, &choice.value);
        let highlighted = is_active && idx == option_cursor;

        let style = if highlighted {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::REVERSED)
        } else if selected {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };

        spans.push(Span::styled(
            format!("{} {}", option_marker(schema.control, selected), choice.label),
            style,
        ));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#000000"), Some(Color::Rgb(0, 0, 0)));
        assert_eq!(parse_hex_color("#ff8000"), Some(Color::Rgb(255, 128, 0)));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("000000"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn test_option_markers() {
        assert_eq!(option_marker(InputControl::Checkboxes, true), "[x]");
        assert_eq!(option_marker(InputControl::Checkboxes, false), "[ ]");
        assert_eq!(option_marker(InputControl::Radio, true), "(•)");
        assert_eq!(option_marker(InputControl::Radio, false), "( )");
    }

    #[test]
    fn test_field_heights() {
        assert_eq!(field_height(InputControl::Text), 4);
        assert_eq!(field_height(InputControl::Checkboxes), 5);
    }

    #[test]
    fn test_option_selection() {
        let many = RawValue::many(["html", "css"]);
        assert!(is_option_selected(Some(&many), "css"));
        assert!(!is_option_selected(Some(&many), "react"));
        assert!(is_option_selected(Some(&RawValue::text("bsc")), "bsc"));
        assert!(!is_option_selected(None, "bsc"));
    }

    #[test]
    fn test_select_shows_placeholder_when_empty() {
        let schema = crate::schema::basic_form_schema().unwrap();
        let gender = schema.field("gender").unwrap();
        let line = select_line(gender, Some(&RawValue::text("")), false);
        assert_eq!(line.to_string(), "Select your gender");
        let line = select_line(gender, Some(&RawValue::text("female")), true);
        assert_eq!(line.to_string(), "◀ Female ▶");
    }

    #[test]
    fn test_text_line_uses_placeholder_when_inactive() {
        let schema = crate::schema::basic_form_schema().unwrap();
        let email = schema.field("email").unwrap();
        assert_eq!(text_line(email, None, false, None).to_string(), "Your email");
        assert_eq!(
            text_line(email, Some(&RawValue::text("j")), true, None).to_string(),
            format!("j{CURSOR}")
        );
    }
}
