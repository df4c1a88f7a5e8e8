//! Form rendering module
//!
//! - `field_renderer`: one labelled control per input kind, with error line
//! - `basic_form`: the whole form, scrolled to the focused row

mod basic_form;
mod field_renderer;

pub use basic_form::draw as draw_basic_form;
