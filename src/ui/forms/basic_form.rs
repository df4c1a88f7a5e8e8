//! Basic form rendering: scrolled field list, submit button and help text

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::state::FormStatus;
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::ops::Range;

/// Rows to show so that `active` is visible, given each row's height.
///
/// Starts at the top while the active row fits there; otherwise scrolls just
/// enough to put the active row at the bottom.
pub fn visible_window(heights: &[u16], active: usize, available: u16) -> Range<usize> {
    if heights.is_empty() {
        return 0..0;
    }
    let active = active.min(heights.len() - 1);

    let mut start = 0;
    let mut used: u16 = heights[..=active].iter().sum();
    while used > available && start < active {
        used -= heights[start];
        start += 1;
    }

    let mut end = active + 1;
    while end < heights.len() && used + heights[end] <= available {
        used += heights[end];
        end += 1;
    }
    start..end
}

/// Draw the form with its outer frame
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let border_color = match app.form.status() {
        FormStatus::Invalid => Color::Red,
        FormStatus::Valid => Color::Green,
        _ => Color::Cyan,
    };

    let block = Block::default()
        .title(" Basic Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Fields and submit button
            Constraint::Length(1), // Help text
        ])
        .horizontal_margin(1)
        .split(inner);

    draw_rows(frame, chunks[0], app);
    draw_help_text(frame, chunks[1]);
}

fn draw_rows(frame: &mut Frame, area: Rect, app: &App) {
    let views: Vec<_> = app.form.field_views().collect();

    // Fields first, then the submit button as the last row
    let heights: Vec<u16> = views
        .iter()
        .map(|v| field_height(v.schema.control))
        .chain(std::iter::once(BUTTON_HEIGHT))
        .collect();

    let window = visible_window(&heights, app.state.active_form_field, area.height);
    let mut y = area.y;

    for row in window {
        let height = heights[row].min(area.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let row_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };

        let is_active = row == app.state.active_form_field;
        match views.get(row) {
            Some(view) => draw_field(frame, row_area, *view, is_active, app.state.option_cursor),
            None => render_submit_button(frame, row_area, app.form.status(), is_active),
        }
        y += height;
    }
}

/// Draw the key hints under the form
pub fn draw_help_text(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Cyan);
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", key),
        Span::raw(": next field  "),
        Span::styled("←/→", key),
        Span::raw(": choose  "),
        Span::styled("Space", key),
        Span::raw(": pick  "),
        Span::styled(crate::platform::CLEAR_SHORTCUT, key),
        Span::raw(": clear  "),
        Span::styled(crate::platform::SUBMIT_SHORTCUT, key),
        Span::raw(": submit  "),
        Span::styled("Esc", key),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_everything_fits() {
        assert_eq!(visible_window(&[4, 4, 3], 0, 20), 0..3);
        assert_eq!(visible_window(&[4, 4, 3], 2, 20), 0..3);
    }

    #[test]
    fn test_top_window_while_active_fits() {
        assert_eq!(visible_window(&[4, 4, 4, 4], 1, 8), 0..2);
    }

    #[test]
    fn test_scrolls_to_keep_active_visible() {
        assert_eq!(visible_window(&[4, 4, 4, 4], 3, 8), 2..4);
        assert_eq!(visible_window(&[4, 5, 4, 3], 2, 9), 1..3);
    }

    #[test]
    fn test_active_row_taller_than_area() {
        assert_eq!(visible_window(&[4, 4], 1, 2), 1..2);
    }

    #[test]
    fn test_no_rows() {
        assert_eq!(visible_window(&[], 0, 10), 0..0);
    }

    #[test]
    fn test_active_clamped() {
        assert_eq!(visible_window(&[4, 4], 9, 4), 1..2);
    }
}
