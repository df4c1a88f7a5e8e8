//! Form domain layer
//!
//! - `field`: input-control edits on raw values
//! - `form_state`: values, errors and submit status
//! - `validator`: the component tying state to the schema

mod field;
mod form_state;
mod validator;

pub use field::FieldEdit;
pub use form_state::{Form, FormStatus};
pub use validator::{FieldView, FormValidator};
