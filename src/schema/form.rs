//! Ordered set of field schemas

use super::field::FieldSchema;
use crate::validation::SchemaError;
use std::collections::HashSet;

/// Immutable, ordered form schema with unique field names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    fields: Vec<FieldSchema>,
}

impl FormSchema {
    /// Build a schema, rejecting duplicate names and inconsistent constraints
    pub fn new(fields: Vec<FieldSchema>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
            if field.allowed_values().is_some_and(<[String]>::is_empty) {
                return Err(SchemaError::EmptyAllowedSet(field.name.clone()));
            }
            if let Some((Some(min), Some(max))) = field.cardinality() {
                if min > max {
                    return Err(SchemaError::InvalidCardinality {
                        field: field.name.clone(),
                        min,
                        max,
                    });
                }
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}
