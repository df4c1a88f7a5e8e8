//! Validation of raw form values against a `FormSchema`

mod error;
mod rules;
mod value;

pub use error::{FieldError, FieldErrors, SchemaError};
pub use rules::{validate, validate_field};
pub use value::{RawValue, TypedRecord};

#[cfg(test)]
pub use value::TypedValue;
