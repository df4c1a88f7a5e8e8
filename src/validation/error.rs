//! Validation error taxonomy

use indexmap::IndexMap;
use std::fmt;
use thiserror::Error;

/// Which side of a cardinality range was violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardinalityBound {
    AtLeast(usize),
    AtMost(usize),
}

impl fmt::Display for CardinalityBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtLeast(min) => write!(f, "at least {min}"),
            Self::AtMost(max) => write!(f, "less than or equal to {max}"),
        }
    }
}

/// A field-scoped validation failure.
///
/// These are display data: they end up as the annotation rendered beneath a
/// field and never abort anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{label} is a required field")]
    Required { label: String },

    #[error("{label} must be a {expected}")]
    TypeMismatch {
        label: String,
        expected: &'static str,
    },

    #[error("Invalid {label} Value")]
    InvalidEnumValue { label: String, value: String },

    #[error("{label} field must have {bound} items")]
    CardinalityOutOfRange {
        label: String,
        count: usize,
        bound: CardinalityBound,
    },

    #[error("{label} must be a valid email")]
    InvalidFormat { label: String },
}

impl FieldError {
    /// Short kind name, used in logs and the status bar
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Required { .. } => "required",
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::InvalidEnumValue { .. } => "invalid_enum_value",
            Self::CardinalityOutOfRange { .. } => "cardinality_out_of_range",
            Self::InvalidFormat { .. } => "invalid_format",
        }
    }
}

/// First failing error per field, in schema declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(IndexMap<String, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, error: FieldError) {
        self.0.insert(field.into(), error);
    }

    /// Remove a field's error while keeping the order of the others
    pub fn remove(&mut self, field: &str) -> Option<FieldError> {
        self.0.shift_remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Name of the first invalid field
    pub fn first_field(&self) -> Option<&str> {
        self.0.keys().next().map(String::as_str)
    }

    /// Reorder entries, e.g. back into declaration order after a single-field update
    pub fn sort_by_position<F>(&mut self, position: F)
    where
        F: Fn(&str) -> usize,
    {
        self.0.sort_by(|a, _, b, _| position(a).cmp(&position(b)));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
impl FieldErrors {
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }
}

/// Errors in how a schema is declared or addressed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("duplicate field `{0}` in form schema")]
    DuplicateField(String),

    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("field `{field}` has min {min} greater than max {max}")]
    InvalidCardinality {
        field: String,
        min: usize,
        max: usize,
    },

    #[error("field `{0}` has an empty allowed-value set")]
    EmptyAllowedSet(String),
}
