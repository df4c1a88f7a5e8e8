//! The form validator component
//!
//! Owns the form's state, applies field changes and runs submit attempts
//! against the shared schema. Every submit attempt gets a new attempt id and
//! only the result of the latest attempt may update the displayed errors.

use super::field::{apply_edit, FieldEdit};
use super::form_state::{FormState, FormStatus};
use crate::schema::{FieldSchema, FormSchema};
use crate::submission::SubmissionSink;
use crate::validation::{
    self, FieldError, FieldErrors, RawValue, SchemaError, TypedRecord,
};
use std::collections::HashMap;
use std::sync::Arc;

/// What the renderer needs to draw one field
#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a> {
    pub schema: &'a FieldSchema,
    pub value: Option<&'a RawValue>,
    pub error: Option<&'a FieldError>,
}

/// Result of validating one submit attempt, not yet applied to the state
#[derive(Debug, Clone)]
pub struct SubmitRun {
    pub attempt: u64,
    pub result: Result<TypedRecord, FieldErrors>,
}

#[derive(Debug)]
pub struct FormValidator {
    schema: Arc<FormSchema>,
    state: FormState,
    validate_on_blur: bool,
}

impl FormValidator {
    /// Create a validator with explicit initial values.
    ///
    /// Initial values must name fields of the schema.
    pub fn new(
        schema: Arc<FormSchema>,
        initial_values: HashMap<String, RawValue>,
    ) -> Result<Self, SchemaError> {
        if let Some(unknown) = initial_values.keys().find(|k| schema.field(k).is_none()) {
            return Err(SchemaError::UnknownField(unknown.clone()));
        }
        Ok(Self {
            schema,
            state: FormState::with_values(initial_values),
            validate_on_blur: false,
        })
    }

    /// Enable per-field validation when focus leaves a field
    pub fn with_blur_validation(mut self, enabled: bool) -> Self {
        self.validate_on_blur = enabled;
        self
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn status(&self) -> FormStatus {
        self.state.status
    }

    pub fn attempt(&self) -> u64 {
        self.state.attempt
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.state.errors
    }

    pub fn value(&self, name: &str) -> Option<&RawValue> {
        self.state.values.get(name)
    }

    pub fn error(&self, name: &str) -> Option<&FieldError> {
        self.state.errors.get(name)
    }

    fn field(&self, name: &str) -> Result<&FieldSchema, SchemaError> {
        self.schema
            .field(name)
            .ok_or_else(|| SchemaError::UnknownField(name.to_string()))
    }

    /// Replace the raw value of one field. Does not validate.
    pub fn set_field_value(&mut self, name: &str, value: RawValue) -> Result<(), SchemaError> {
        self.field(name)?;
        self.state.values.insert(name.to_string(), value);
        Ok(())
    }

    /// Make a field absent again
    pub fn clear_field_value(&mut self, name: &str) -> Result<(), SchemaError> {
        self.field(name)?;
        self.state.values.remove(name);
        Ok(())
    }

    /// Apply an input-control edit to one field
    pub fn edit_field(&mut self, name: &str, edit: FieldEdit) -> Result<(), SchemaError> {
        let next = apply_edit(self.field(name)?, self.state.values.get(name), edit);
        self.set_field_value(name, next)
    }

    /// Validate the current values without touching the state
    pub fn validate(&self) -> Result<TypedRecord, FieldErrors> {
        validation::validate(&self.schema, &self.state.values)
    }

    /// Start a submit attempt: bump the attempt id and evaluate the values
    pub fn begin_submit(&mut self) -> SubmitRun {
        self.state.attempt += 1;
        self.state.status = FormStatus::Validating;
        SubmitRun {
            attempt: self.state.attempt,
            result: self.validate(),
        }
    }

    /// Apply a submit run. Runs from an older attempt are dropped and
    /// `None` is returned.
    pub fn finish_submit<S>(&mut self, run: SubmitRun, sink: &mut S) -> Option<FormStatus>
    where
        S: SubmissionSink + ?Sized,
    {
        if run.attempt != self.state.attempt {
            tracing::debug!(
                attempt = run.attempt,
                latest = self.state.attempt,
                "Dropping stale submit result"
            );
            return None;
        }

        match run.result {
            Ok(record) => {
                self.state.errors.clear();
                self.state.status = FormStatus::Valid;
                tracing::info!(attempt = run.attempt, fields = record.len(), "Form accepted");
                sink.on_valid(&record);
            }
            Err(errors) => {
                self.state.errors = errors;
                self.state.status = FormStatus::Invalid;
                tracing::debug!(
                    attempt = run.attempt,
                    invalid = self.state.errors.len(),
                    "Form rejected"
                );
                for (field, err) in self.state.errors.iter() {
                    match err {
                        FieldError::InvalidEnumValue { value, .. } => {
                            tracing::trace!(field, kind = err.kind(), value = %value, "{err}")
                        }
                        FieldError::CardinalityOutOfRange { count, .. } => {
                            tracing::trace!(field, kind = err.kind(), count, "{err}")
                        }
                        _ => tracing::trace!(field, kind = err.kind(), "{err}"),
                    }
                }
            }
        }
        Some(self.state.status)
    }

    /// Validate everything; hand the record to `sink` on success, keep the
    /// errors for display otherwise
    pub fn submit<S>(&mut self, sink: &mut S) -> FormStatus
    where
        S: SubmissionSink + ?Sized,
    {
        let run = self.begin_submit();
        self.finish_submit(run, sink).unwrap_or(self.state.status)
    }

    /// Revalidate one field when focus leaves it, if enabled
    pub fn blur_field(&mut self, name: &str) -> Result<(), SchemaError> {
        let field = self.field(name)?;
        if !self.validate_on_blur {
            return Ok(());
        }

        match validation::validate_field(field, self.state.values.get(name)) {
            Ok(_) => {
                self.state.errors.remove(name);
            }
            Err(err) => {
                self.state.errors.insert(name, err);
                let schema = Arc::clone(&self.schema);
                self.state
                    .errors
                    .sort_by_position(|n| schema.index_of(n).unwrap_or(usize::MAX));
            }
        }
        Ok(())
    }

    /// Per-field value and error, in declaration order
    pub fn field_views(&self) -> impl Iterator<Item = FieldView<'_>> {
        self.schema.fields().iter().map(|schema| FieldView {
            schema,
            value: self.value(&schema.name),
            error: self.error(&schema.name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::basic_form_schema;
    use crate::submission::{Acknowledgement, MockSubmissionSink};
    use crate::validation::TypedValue;
    use pretty_assertions::assert_eq;

    fn empty_validator() -> FormValidator {
        FormValidator::new(Arc::new(basic_form_schema().unwrap()), HashMap::new()).unwrap()
    }

    fn filled_validator() -> FormValidator {
        let mut validator = empty_validator();
        for (name, value) in [
            ("name", RawValue::text("Jane")),
            ("email", RawValue::text("jane@x.com")),
            ("age", RawValue::text("23")),
            ("date", RawValue::text("2024-01-01")),
            ("gender", RawValue::text("female")),
            ("department", RawValue::text("bsc")),
            ("skills", RawValue::many(["html", "css"])),
            ("eyeColor", RawValue::text("#000000")),
        ] {
            validator.set_field_value(name, value).unwrap();
        }
        validator
    }

    mod construction {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_rejects_unknown_initial_value() {
            let result = FormValidator::new(
                Arc::new(basic_form_schema().unwrap()),
                HashMap::from([("nickname".to_string(), RawValue::text("J"))]),
            );
            assert_eq!(
                result.unwrap_err(),
                SchemaError::UnknownField("nickname".to_string())
            );
        }

        #[test]
        fn test_starts_pristine_with_initial_values() {
            let validator = FormValidator::new(
                Arc::new(basic_form_schema().unwrap()),
                crate::schema::default_values(),
            )
            .unwrap();
            assert_eq!(validator.status(), FormStatus::Pristine);
            assert_eq!(validator.value("age"), Some(&RawValue::text("23")));
            assert!(validator.errors().is_empty());
        }
    }

    mod set_field_value {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_only_touches_named_field() {
            let mut validator = filled_validator();
            let before = validator.state().values.clone();
            validator
                .set_field_value("name", RawValue::text("Janet"))
                .unwrap();
            for (name, value) in &before {
                if name != "name" {
                    assert_eq!(validator.value(name), Some(value));
                }
            }
            assert_eq!(validator.value("name"), Some(&RawValue::text("Janet")));
        }

        #[test]
        fn test_does_not_validate() {
            let mut validator = empty_validator();
            validator.set_field_value("age", RawValue::text("abc")).unwrap();
            assert!(validator.errors().is_empty());
            assert_eq!(validator.status(), FormStatus::Pristine);
        }

        #[test]
        fn test_unknown_field() {
            let mut validator = empty_validator();
            assert_eq!(
                validator.set_field_value("colour", RawValue::text("red")),
                Err(SchemaError::UnknownField("colour".to_string()))
            );
        }

        #[test]
        fn test_clear_field_value_makes_it_absent() {
            let mut validator = filled_validator();
            validator.clear_field_value("skills").unwrap();
            assert!(validator.value("skills").is_none());
        }

        #[test]
        fn test_edit_field() {
            let mut validator = empty_validator();
            validator
                .edit_field("skills", FieldEdit::Toggle("react".to_string()))
                .unwrap();
            assert_eq!(validator.value("skills"), Some(&RawValue::many(["react"])));
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_submit_calls_sink_once() {
            let mut validator = filled_validator();
            let mut sink = MockSubmissionSink::new();
            sink.expect_on_valid()
                .withf(|record| {
                    record.get("age") == Some(&TypedValue::Number(23.0)) && record.len() == 8
                })
                .times(1)
                .return_const(());

            let status = validator.submit(&mut sink);

            assert_eq!(status, FormStatus::Valid);
            assert!(validator.errors().is_empty());
            assert_eq!(validator.attempt(), 1);
        }

        #[test]
        fn test_invalid_submit_stores_errors_without_calling_sink() {
            let mut validator = filled_validator();
            validator.set_field_value("age", RawValue::text("abc")).unwrap();
            let mut sink = MockSubmissionSink::new();
            sink.expect_on_valid().times(0);

            let status = validator.submit(&mut sink);

            assert_eq!(status, FormStatus::Invalid);
            assert_eq!(validator.errors().len(), 1);
            assert_eq!(
                validator.error("age").map(ToString::to_string),
                Some("Age must be a number".to_string())
            );
        }

        #[test]
        fn test_success_discards_previous_errors() {
            let mut validator = filled_validator();
            validator.set_field_value("gender", RawValue::text("")).unwrap();
            let mut ack = Acknowledgement::new();

            assert_eq!(validator.submit(&mut ack), FormStatus::Invalid);
            assert!(validator.error("gender").is_some());
            assert!(!ack.is_open());

            validator
                .set_field_value("gender", RawValue::text("male"))
                .unwrap();
            assert_eq!(validator.submit(&mut ack), FormStatus::Valid);
            assert!(validator.errors().is_empty());
            assert!(ack.is_open());
            assert_eq!(validator.attempt(), 2);
        }

        #[test]
        fn test_every_failing_field_has_a_message() {
            let mut validator = empty_validator();
            let mut ack = Acknowledgement::new();
            validator.submit(&mut ack);
            for field in validator.schema().fields() {
                assert!(validator.error(&field.name).is_some(), "{}", field.name);
            }
        }

        #[test]
        fn test_stale_run_is_dropped() {
            let mut validator = filled_validator();
            let mut ack = Acknowledgement::new();

            let stale = validator.begin_submit();
            validator.set_field_value("age", RawValue::text("abc")).unwrap();
            let latest = validator.begin_submit();

            assert_eq!(validator.finish_submit(stale, &mut ack), None);
            assert!(!ack.is_open());
            assert_eq!(validator.status(), FormStatus::Validating);

            assert_eq!(
                validator.finish_submit(latest, &mut ack),
                Some(FormStatus::Invalid)
            );
            assert!(validator.error("age").is_some());
        }

        #[test]
        fn test_validate_twice_is_identical() {
            let validator = filled_validator();
            assert_eq!(validator.validate(), validator.validate());
        }
    }

    mod blur {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_disabled_by_default() {
            let mut validator = empty_validator();
            validator.blur_field("name").unwrap();
            assert!(validator.errors().is_empty());
        }

        #[test]
        fn test_blur_touches_only_one_field() {
            let mut validator = empty_validator().with_blur_validation(true);
            validator.blur_field("email").unwrap();
            assert_eq!(validator.errors().len(), 1);
            assert_eq!(
                validator.error("email").map(ToString::to_string),
                Some("Email is a required field".to_string())
            );
        }

        #[test]
        fn test_blur_clears_fixed_field() {
            let mut validator = empty_validator().with_blur_validation(true);
            validator.blur_field("age").unwrap();
            assert!(validator.error("age").is_some());
            validator.set_field_value("age", RawValue::text("30")).unwrap();
            validator.blur_field("age").unwrap();
            assert!(validator.error("age").is_none());
        }

        #[test]
        fn test_blur_keeps_declaration_order() {
            let mut validator = empty_validator().with_blur_validation(true);
            validator.blur_field("date").unwrap();
            validator.blur_field("name").unwrap();
            assert_eq!(validator.errors().first_field(), Some("name"));
        }
    }

    #[test]
    fn test_field_views_follow_schema() {
        let mut validator = filled_validator();
        validator.set_field_value("age", RawValue::text("abc")).unwrap();
        let mut ack = Acknowledgement::new();
        validator.submit(&mut ack);

        let views: Vec<_> = validator.field_views().collect();
        assert_eq!(views.len(), 8);
        assert_eq!(views[2].schema.name, "age");
        assert_eq!(views[2].value, Some(&RawValue::text("abc")));
        assert!(views[2].error.is_some());
        assert!(views[0].error.is_none());
    }
}
