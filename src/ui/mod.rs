//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use components::{render_acknowledgement_dialog, render_error_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_basic_form(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Modal overlays last so they sit on top
    if let Some(json) = app.acknowledgement.message() {
        render_acknowledgement_dialog(frame, json);
    }
    if let Some(message) = &app.state.error_message {
        render_error_dialog(frame, message);
    }
}
