//! Application state and core logic

use crate::config::FormConfig;
use crate::schema::{basic_form_schema, default_values, InputControl};
use crate::state::{AppState, FieldEdit, Form, FormStatus, FormValidator};
use crate::submission::Acknowledgement;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// Focus, highlights and messages
    pub state: AppState,
    /// The form and its validation state
    pub form: FormValidator,
    /// Where accepted records are presented
    pub acknowledgement: Acknowledgement,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &FormConfig) -> Result<Self> {
        let schema = Arc::new(basic_form_schema()?);
        let initial_values = config.initial_values(default_values());
        let form = FormValidator::new(schema, initial_values)?
            .with_blur_validation(config.validate_on_blur());
        let state = AppState::new(form.schema().len());

        tracing::debug!(
            fields = form.schema().len(),
            validate_on_blur = config.validate_on_blur(),
            "Form ready"
        );

        Ok(Self {
            state,
            form,
            acknowledgement: Acknowledgement::new(),
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_error() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Acknowledgement dialog (modal)
        if self.acknowledgement.is_open() {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => self.acknowledgement.dismiss(),
                KeyCode::Char('c') => self.copy_acknowledgement(),
                _ => {}
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        let on_submit_button = self.state.is_submit_active();
        match key.code {
            KeyCode::Tab => self.move_focus(true)?,
            KeyCode::BackTab => self.move_focus(false)?,
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear_active_field()?
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Enter | KeyCode::Char(' ') if on_submit_button => self.submit(),
            _ if on_submit_button => {}
            _ => self.handle_field_key(key)?,
        }
        Ok(())
    }

    /// Keys while a field has focus
    fn handle_field_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(index) = self.state.active_field_index() else {
            return Ok(());
        };
        let field = &self.form.schema().fields()[index];
        let control = field.control;
        let options: Vec<String> = field.choices.iter().map(|c| c.value.clone()).collect();

        match (control, key.code) {
            // Enter in a field submits the form
            (_, KeyCode::Enter) if !matches!(control, InputControl::Radio | InputControl::Checkboxes) => {
                self.submit()
            }
            (InputControl::Select, KeyCode::Left | KeyCode::Char('h')) => {
                self.edit_active_field(FieldEdit::SelectPrev)?
            }
            (InputControl::Select, KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ')) => {
                self.edit_active_field(FieldEdit::SelectNext)?
            }
            (InputControl::Radio | InputControl::Checkboxes, KeyCode::Left | KeyCode::Char('h')) => {
                self.state.move_option_cursor(false, options.len())
            }
            (InputControl::Radio | InputControl::Checkboxes, KeyCode::Right | KeyCode::Char('l')) => {
                self.state.move_option_cursor(true, options.len())
            }
            (InputControl::Radio, KeyCode::Char(' ') | KeyCode::Enter) => {
                if let Some(value) = options.get(self.state.option_cursor) {
                    self.edit_active_field(FieldEdit::Pick(value.clone()))?;
                }
            }
            (InputControl::Checkboxes, KeyCode::Char(' ') | KeyCode::Enter) => {
                if let Some(value) = options.get(self.state.option_cursor) {
                    self.edit_active_field(FieldEdit::Toggle(value.clone()))?;
                }
            }
            (control, KeyCode::Char(c))
                if control.is_text_like() && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.edit_active_field(FieldEdit::Insert(c))?
            }
            (control, KeyCode::Backspace) if control.is_text_like() => {
                self.edit_active_field(FieldEdit::Backspace)?
            }
            _ => {}
        }
        Ok(())
    }

    /// Name of the focused field, if a field has focus
    fn active_field_name(&self) -> Option<String> {
        self.state
            .active_field_index()
            .and_then(|i| self.form.schema().fields().get(i))
            .map(|f| f.name.clone())
    }

    fn edit_active_field(&mut self, edit: FieldEdit) -> Result<()> {
        if let Some(name) = self.active_field_name() {
            self.form.edit_field(&name, edit)?;
        }
        Ok(())
    }

    /// Make the focused field absent again
    fn clear_active_field(&mut self) -> Result<()> {
        if let Some(name) = self.active_field_name() {
            self.form.clear_field_value(&name)?;
        }
        Ok(())
    }

    /// Move focus, validating the field being left when blur validation is on
    fn move_focus(&mut self, forward: bool) -> Result<()> {
        if let Some(name) = self.active_field_name() {
            self.form.blur_field(&name)?;
        }
        if forward {
            self.state.next_field();
        } else {
            self.state.prev_field();
        }
        Ok(())
    }

    /// Run a submit attempt and react to its outcome
    pub fn submit(&mut self) {
        match self.form.submit(&mut self.acknowledgement) {
            FormStatus::Valid => {
                self.state.status_message = Some("Form submitted".to_string());
            }
            FormStatus::Invalid => {
                let errors = self.form.errors();
                let count = errors.len();
                if let Some(index) = errors
                    .first_field()
                    .and_then(|name| self.form.schema().index_of(name))
                {
                    self.state.set_active_field(index);
                }
                let noun = if count == 1 { "field needs" } else { "fields need" };
                self.state.status_message = Some(format!("{count} {noun} attention"));
            }
            FormStatus::Pristine | FormStatus::Validating => {}
        }
    }

    fn copy_acknowledgement(&mut self) {
        let Some(json) = self.acknowledgement.message().map(str::to_string) else {
            return;
        };
        match self.copy_to_clipboard(&json) {
            Ok(()) => {
                self.acknowledgement.dismiss();
                self.state.status_message = Some("Copied record to clipboard".to_string());
            }
            Err(err) => {
                tracing::warn!("Clipboard copy failed: {err}");
                self.state.push_error(format!("Failed to copy to clipboard: {err}"));
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
