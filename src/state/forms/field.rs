//! Field edits: how an input control changes a raw value

use crate::schema::{FieldSchema, InputControl};
use crate::validation::RawValue;

/// Longest text a color control holds (`#rrggbb`)
const COLOR_LEN: usize = 7;

/// A single user edit on one field, produced from a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    /// Append a character (text-like controls)
    Insert(char),
    /// Remove the last character (text-like controls)
    Backspace,
    /// Next option of a select control (wraps through the placeholder)
    SelectNext,
    /// Previous option of a select control
    SelectPrev,
    /// Pick one option (radio, select)
    Pick(String),
    /// Check or uncheck one option (checkboxes)
    Toggle(String),
}

/// Compute the value a control holds after `edit`.
///
/// Edits that make no sense for the control leave the value unchanged.
pub fn apply_edit(field: &FieldSchema, current: Option<&RawValue>, edit: FieldEdit) -> RawValue {
    let text = current.and_then(RawValue::as_text).unwrap_or_default();

    match (field.control, edit) {
        (InputControl::Checkboxes, FieldEdit::Toggle(value)) => {
            // A lone string counts as a one-item selection
            let mut selected = match current.and_then(RawValue::as_many) {
                Some(items) => items.to_vec(),
                None if !text.trim().is_empty() => vec![text.to_string()],
                None => Vec::new(),
            };
            if let Some(pos) = selected.iter().position(|v| *v == value) {
                selected.remove(pos);
            } else {
                selected.push(value);
            }
            RawValue::many(selected)
        }
        (InputControl::Select | InputControl::Radio, FieldEdit::Pick(value)) => {
            RawValue::Text(value)
        }
        (InputControl::Select, FieldEdit::SelectNext) => RawValue::Text(cycle(field, text, 1)),
        (InputControl::Select, FieldEdit::SelectPrev) => RawValue::Text(cycle(field, text, -1)),
        (InputControl::Color, FieldEdit::Insert(c)) => {
            let mut next = text.to_string();
            let accepted = if next.is_empty() {
                c == '#' || c.is_ascii_hexdigit()
            } else {
                c.is_ascii_hexdigit()
            };
            if accepted && next.len() < COLOR_LEN {
                if next.is_empty() && c != '#' {
                    next.push('#');
                }
                next.push(c.to_ascii_lowercase());
            }
            RawValue::Text(next)
        }
        (control, FieldEdit::Insert(c)) if control.is_text_like() && !c.is_control() => {
            let mut next = text.to_string();
            next.push(c);
            RawValue::Text(next)
        }
        (control, FieldEdit::Backspace) if control.is_text_like() => {
            let mut next = text.to_string();
            next.pop();
            RawValue::Text(next)
        }
        (_, _) => current
            .cloned()
            .unwrap_or_else(|| RawValue::Text(String::new())),
    }
}

/// Step through `["", choice values...]`, wrapping at both ends
fn cycle(field: &FieldSchema, current: &str, step: isize) -> String {
    let options: Vec<&str> = std::iter::once("")
        .chain(field.choices.iter().map(|c| c.value.as_str()))
        .collect();
    let len = options.len() as isize;
    let index = options.iter().position(|o| *o == current).unwrap_or(0) as isize;
    let next = (index + step).rem_euclid(len) as usize;
    options[next].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{basic_form_schema, FormSchema};
    use pretty_assertions::assert_eq;

    fn schema() -> FormSchema {
        basic_form_schema().unwrap()
    }

    mod text {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_insert_and_backspace() {
            let schema = schema();
            let name = schema.field("name").unwrap();
            let value = apply_edit(name, None, FieldEdit::Insert('J'));
            let value = apply_edit(name, Some(&value), FieldEdit::Insert('o'));
            assert_eq!(value, RawValue::text("Jo"));
            let value = apply_edit(name, Some(&value), FieldEdit::Backspace);
            assert_eq!(value, RawValue::text("J"));
        }

        #[test]
        fn test_control_chars_ignored() {
            let schema = schema();
            let name = schema.field("name").unwrap();
            let value = apply_edit(name, Some(&RawValue::text("a")), FieldEdit::Insert('\t'));
            assert_eq!(value, RawValue::text("a"));
        }

        #[test]
        fn test_number_control_accepts_any_text() {
            let schema = schema();
            let age = schema.field("age").unwrap();
            let value = apply_edit(age, Some(&RawValue::text("2")), FieldEdit::Insert('x'));
            assert_eq!(value, RawValue::text("2x"));
        }
    }

    mod color {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_hex_digits_only() {
            let schema = schema();
            let color = schema.field("eyeColor").unwrap();
            let value = apply_edit(color, Some(&RawValue::text("#")), FieldEdit::Insert('g'));
            assert_eq!(value, RawValue::text("#"));
            let value = apply_edit(color, Some(&value), FieldEdit::Insert('A'));
            assert_eq!(value, RawValue::text("#a"));
        }

        #[test]
        fn test_hash_prefix_added() {
            let schema = schema();
            let color = schema.field("eyeColor").unwrap();
            let value = apply_edit(color, None, FieldEdit::Insert('f'));
            assert_eq!(value, RawValue::text("#f"));
        }

        #[test]
        fn test_length_capped() {
            let schema = schema();
            let color = schema.field("eyeColor").unwrap();
            let value = apply_edit(color, Some(&RawValue::text("#000000")), FieldEdit::Insert('1'));
            assert_eq!(value, RawValue::text("#000000"));
        }
    }

    mod choices {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_select_cycles_through_placeholder() {
            let schema = schema();
            let gender = schema.field("gender").unwrap();
            let value = apply_edit(gender, None, FieldEdit::SelectNext);
            assert_eq!(value, RawValue::text("male"));
            let value = apply_edit(gender, Some(&value), FieldEdit::SelectNext);
            assert_eq!(value, RawValue::text("female"));
            let value = apply_edit(gender, Some(&value), FieldEdit::SelectNext);
            assert_eq!(value, RawValue::text(""));
            let value = apply_edit(gender, Some(&value), FieldEdit::SelectPrev);
            assert_eq!(value, RawValue::text("female"));
        }

        #[test]
        fn test_radio_pick() {
            let schema = schema();
            let department = schema.field("department").unwrap();
            let value = apply_edit(department, None, FieldEdit::Pick("bba".to_string()));
            assert_eq!(value, RawValue::text("bba"));
        }

        #[test]
        fn test_radio_ignores_typing() {
            let schema = schema();
            let department = schema.field("department").unwrap();
            let current = RawValue::text("bsc");
            let value = apply_edit(department, Some(&current), FieldEdit::Insert('x'));
            assert_eq!(value, current);
        }

        #[test]
        fn test_checkbox_toggle() {
            let schema = schema();
            let skills = schema.field("skills").unwrap();
            let value = apply_edit(skills, None, FieldEdit::Toggle("html".to_string()));
            let value = apply_edit(skills, Some(&value), FieldEdit::Toggle("css".to_string()));
            assert_eq!(value, RawValue::many(["html", "css"]));
            let value = apply_edit(skills, Some(&value), FieldEdit::Toggle("html".to_string()));
            assert_eq!(value, RawValue::many(["css"]));
        }

        #[test]
        fn test_checkbox_toggle_keeps_single_string_selection() {
            let schema = schema();
            let skills = schema.field("skills").unwrap();
            let value = apply_edit(
                skills,
                Some(&RawValue::text("react")),
                FieldEdit::Toggle("html".to_string()),
            );
            assert_eq!(value, RawValue::many(["react", "html"]));
        }

        #[test]
        fn test_checkbox_toggle_can_uncheck_single_string_selection() {
            let schema = schema();
            let skills = schema.field("skills").unwrap();
            let value = apply_edit(
                skills,
                Some(&RawValue::text("react")),
                FieldEdit::Toggle("react".to_string()),
            );
            assert_eq!(value, RawValue::many(Vec::<String>::new()));
        }

        #[test]
        fn test_checkbox_toggle_ignores_blank_string() {
            let schema = schema();
            let skills = schema.field("skills").unwrap();
            let value = apply_edit(
                skills,
                Some(&RawValue::text(" ")),
                FieldEdit::Toggle("css".to_string()),
            );
            assert_eq!(value, RawValue::many(["css"]));
        }
    }
}
