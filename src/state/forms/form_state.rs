//! Form state: raw values, errors and submission status

use crate::validation::{FieldErrors, RawValue};
use std::collections::HashMap;

/// Trait for focus movement through a form's rows
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    /// Never submitted
    #[default]
    Pristine,
    /// A submit attempt is being evaluated
    Validating,
    /// Last attempt passed
    Valid,
    /// Last attempt failed
    Invalid,
}

impl FormStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pristine => "Pristine",
            Self::Validating => "Validating",
            Self::Valid => "Valid",
            Self::Invalid => "Invalid",
        }
    }
}

/// Mutable state owned by one form instance
#[derive(Debug, Clone, Default)]
pub struct FormState {
    /// Field name → raw captured value; absent means "never set"
    pub values: HashMap<String, RawValue>,
    /// Field name → first failing error
    pub errors: FieldErrors,
    pub status: FormStatus,
    /// Id of the latest submit attempt (0 before the first)
    pub attempt: u64,
}

impl FormState {
    pub fn with_values(values: HashMap<String, RawValue>) -> Self {
        Self {
            values,
            ..Default::default()
        }
    }

    pub fn is_pristine(&self) -> bool {
        self.status == FormStatus::Pristine
    }
}
