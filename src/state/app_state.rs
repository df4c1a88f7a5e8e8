//! Application state definitions

use super::forms::Form;

/// UI-side state around the form: focus, highlights and messages
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Number of form fields (the submit button is one more row)
    pub field_count: usize,
    /// Focused row; `field_count` means the submit button
    pub active_form_field: usize,
    /// Highlighted option inside a radio or checkbox group
    pub option_cursor: usize,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
    /// Error shown in a modal dialog until dismissed
    pub error_message: Option<String>,
}

impl AppState {
    pub fn new(field_count: usize) -> Self {
        Self {
            field_count,
            ..Default::default()
        }
    }

    /// Returns true if the submit button is currently focused
    pub fn is_submit_active(&self) -> bool {
        self.active_form_field == self.field_count
    }

    /// Index of the focused field, if a field (not the button) has focus
    pub fn active_field_index(&self) -> Option<usize> {
        (!self.is_submit_active()).then_some(self.active_form_field)
    }

    /// Move the option highlight, wrapping within `option_count`
    pub fn move_option_cursor(&mut self, forward: bool, option_count: usize) {
        if option_count == 0 {
            return;
        }
        self.option_cursor = if forward {
            (self.option_cursor + 1) % option_count
        } else if self.option_cursor == 0 {
            option_count - 1
        } else {
            self.option_cursor - 1
        };
    }

    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }

    pub fn push_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }
}

impl Form for AppState {
    fn field_count(&self) -> usize {
        self.field_count + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_form_field
    }
    fn set_active_field(&mut self, index: usize) {
        if index != self.active_form_field {
            self.option_cursor = 0;
        }
        self.active_form_field = index.min(self.field_count);
    }
}
