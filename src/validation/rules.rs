//! Rule interpreter
//!
//! A field is validated by folding its value through the field's rules in
//! order. The first rule that fails decides the field's error.

use super::error::{CardinalityBound, FieldError, FieldErrors};
use super::value::{RawValue, TypedRecord, TypedValue};
use crate::schema::{FieldKind, FieldSchema, FormSchema, Rule};
use chrono::{DateTime, NaiveDate};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

/// Validate every field of `schema` against `values`, in declaration order.
///
/// Returns the coerced record when every field passes, otherwise the first
/// failure of each failing field. Absent optional fields are left out of
/// the record.
pub fn validate(
    schema: &FormSchema,
    values: &HashMap<String, RawValue>,
) -> Result<TypedRecord, FieldErrors> {
    let mut record = TypedRecord::new();
    let mut errors = FieldErrors::new();

    for field in schema.fields() {
        match validate_field(field, values.get(&field.name)) {
            Ok(Some(value)) => record.insert(field.name.clone(), value),
            Ok(None) => {}
            Err(err) => errors.insert(field.name.clone(), err),
        }
    }

    if errors.is_empty() {
        Ok(record)
    } else {
        Err(errors)
    }
}

/// Validate a single field. `Ok(None)` means an absent optional field.
pub fn validate_field(
    field: &FieldSchema,
    raw: Option<&RawValue>,
) -> Result<Option<TypedValue>, FieldError> {
    // Lists are never blank: an empty selection is a cardinality question
    let present = raw.filter(|v| field.kind.is_multi() || !v.is_blank());

    let Some(raw) = present else {
        return if field.is_required() {
            Err(FieldError::Required {
                label: field.label.clone(),
            })
        } else {
            Ok(None)
        };
    };

    let mut value = initial_value(field, raw)?;
    for rule in field.rules() {
        value = apply_rule(field, rule, value)?;
    }
    Ok(Some(value))
}

/// Pass-through coercion by kind; numeric and date parsing happen in rules
fn initial_value(field: &FieldSchema, raw: &RawValue) -> Result<TypedValue, FieldError> {
    match (field.kind, raw) {
        (FieldKind::MultiSelect, RawValue::Many(values)) => Ok(TypedValue::Choices(values.clone())),
        (FieldKind::MultiSelect, RawValue::Text(value)) => {
            Ok(TypedValue::Choices(vec![value.clone()]))
        }
        (FieldKind::Enum, RawValue::Text(value)) => Ok(TypedValue::Choice(value.clone())),
        (_, RawValue::Text(value)) => Ok(TypedValue::Text(value.clone())),
        (kind, RawValue::Many(_)) => Err(type_mismatch(field, kind.expected())),
    }
}

fn apply_rule(field: &FieldSchema, rule: &Rule, value: TypedValue) -> Result<TypedValue, FieldError> {
    match rule {
        // Presence was checked before the fold
        Rule::Required => Ok(value),
        Rule::NumericType => match value {
            TypedValue::Text(ref s) => parse_number(s)
                .map(TypedValue::Number)
                .ok_or_else(|| type_mismatch(field, "number")),
            other => Ok(other),
        },
        Rule::DateType => match value {
            TypedValue::Text(ref s) => parse_date(s)
                .map(TypedValue::Date)
                .ok_or_else(|| type_mismatch(field, "date")),
            other => Ok(other),
        },
        Rule::Email => match value {
            TypedValue::Text(ref s) if !email_pattern().is_match(s.trim()) => {
                Err(FieldError::InvalidFormat {
                    label: field.label.clone(),
                })
            }
            other => Ok(other),
        },
        Rule::EnumMembership(allowed) => {
            let outsider = match &value {
                TypedValue::Text(s) | TypedValue::Choice(s) => {
                    (!allowed.contains(s)).then(|| s.clone())
                }
                TypedValue::Choices(items) => items.iter().find(|i| !allowed.contains(*i)).cloned(),
                _ => None,
            };
            match outsider {
                Some(bad) => Err(FieldError::InvalidEnumValue {
                    label: field.label.clone(),
                    value: bad,
                }),
                None => Ok(value),
            }
        }
        Rule::Cardinality { min, max } => {
            let count = match &value {
                TypedValue::Choices(items) => Some(items.len()),
                _ => None,
            };
            let Some(count) = count else {
                return Ok(value);
            };
            let bound = match (min, max) {
                (Some(min), _) if count < *min => Some(CardinalityBound::AtLeast(*min)),
                (_, Some(max)) if count > *max => Some(CardinalityBound::AtMost(*max)),
                _ => None,
            };
            match bound {
                Some(bound) => Err(FieldError::CardinalityOutOfRange {
                    label: field.label.clone(),
                    count,
                    bound,
                }),
                None => Ok(value),
            }
        }
    }
}

fn type_mismatch(field: &FieldSchema, expected: &'static str) -> FieldError {
    FieldError::TypeMismatch {
        label: field.label.clone(),
        expected,
    }
}

fn parse_number(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp
fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(input)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
