//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_submit_button, BUTTON_HEIGHT};
pub use dialog::{render_acknowledgement_dialog, render_error_dialog};
