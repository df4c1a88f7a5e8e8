//! The "Basic Form" schema and its default values

use super::field::{FieldSchema, InputControl};
use super::form::FormSchema;
use crate::validation::{RawValue, SchemaError};
use std::collections::HashMap;

pub const GENDERS: [(&str, &str); 2] = [("male", "Male"), ("female", "Female")];

pub const DEPARTMENTS: [(&str, &str); 3] = [("bsc", "BSC"), ("bba", "BBA"), ("ba", "BA")];

pub const SKILLS: [(&str, &str); 9] = [
    ("javascript", "Javascript"),
    ("typescript", "Typescript"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("react", "React"),
    ("redux", "Redux"),
    ("node", "Node"),
    ("express", "Express"),
    ("mongodb", "Mongodb"),
];

/// Value a color input holds before the user picks anything
pub const DEFAULT_COLOR: &str = "#000000";

/// Schema of the basic form
pub fn basic_form_schema() -> Result<FormSchema, SchemaError> {
    FormSchema::new(vec![
        FieldSchema::string("name", "Name")
            .placeholder("Your Name")
            .required(),
        FieldSchema::string("email", "Email")
            .placeholder("Your email")
            .email()
            .required(),
        FieldSchema::number("age", "Age")
            .placeholder("Your Age")
            .required(),
        FieldSchema::date("date", "Date")
            .placeholder("YYYY-MM-DD")
            .required(),
        FieldSchema::one_of("gender", "Gender", GENDERS)
            .placeholder("Select your gender")
            .required(),
        FieldSchema::one_of("department", "Department", DEPARTMENTS)
            .control(InputControl::Radio)
            .required(),
        FieldSchema::multi_select("skills", "Skills", SKILLS)
            .min_items(1)
            .max_items(3)
            .required(),
        FieldSchema::string("eyeColor", "Eye Color")
            .control(InputControl::Color)
            .required(),
    ])
}

/// Pre-filled values the form starts with
pub fn default_values() -> HashMap<String, RawValue> {
    HashMap::from([
        ("name".to_string(), RawValue::text("Mehedi Hasan ")),
        ("age".to_string(), RawValue::text("23")),
        ("eyeColor".to_string(), RawValue::text(DEFAULT_COLOR)),
    ])
}
