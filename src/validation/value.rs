//! Raw and typed field values

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

/// Untyped value as captured from an input control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Text, number, date, select, radio and color controls
    Text(String),
    /// Checkbox groups
    Many(Vec<String>),
}

impl RawValue {
    pub fn text(value: impl Into<String>) -> Self {
        RawValue::Text(value.into())
    }

    pub fn many<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RawValue::Many(values.into_iter().map(Into::into).collect())
    }

    /// Whether this counts as "no input" for a single-valued control
    pub fn is_blank(&self) -> bool {
        match self {
            RawValue::Text(s) => s.trim().is_empty(),
            RawValue::Many(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            RawValue::Many(_) => None,
        }
    }

    pub fn as_many(&self) -> Option<&[String]> {
        match self {
            RawValue::Many(v) => Some(v),
            RawValue::Text(_) => None,
        }
    }
}

/// Value after coercion
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Choice(String),
    Choices(Vec<String>),
}

impl Serialize for TypedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TypedValue::Text(s) | TypedValue::Choice(s) => serializer.serialize_str(s),
            // Whole numbers print without a trailing `.0`
            TypedValue::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                serializer.serialize_i64(*n as i64)
            }
            TypedValue::Number(n) => serializer.serialize_f64(*n),
            TypedValue::Date(d) => serializer.collect_str(&d.format("%Y-%m-%d")),
            TypedValue::Choices(v) => v.serialize(serializer),
        }
    }
}

/// A fully coerced, valid form record in schema declaration order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TypedRecord(IndexMap<String, TypedValue>);

impl TypedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: TypedValue) {
        self.0.insert(field.into(), value);
    }

    pub fn get(&self, field: &str) -> Option<&TypedValue> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Pretty JSON, as shown in the acknowledgement dialog
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
impl TypedRecord {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
