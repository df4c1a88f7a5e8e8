//! Dialog components for TUI

mod acknowledgement_dialog;
mod base;
mod error_dialog;

pub use acknowledgement_dialog::render_acknowledgement_dialog;
pub use error_dialog::render_error_dialog;
