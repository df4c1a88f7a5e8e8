//! Declarative form schema
//!
//! - `field`: per-field kind, input control and rules
//! - `form`: ordered, name-unique set of fields
//! - `basic`: the basic form this application renders

mod basic;
mod field;
mod form;

pub use basic::{basic_form_schema, default_values};
pub use field::{FieldKind, FieldSchema, InputControl, Rule};
pub use form::FormSchema;
