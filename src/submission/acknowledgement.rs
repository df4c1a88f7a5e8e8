//! Acknowledgement: presents an accepted record to the user

use super::traits::SubmissionSink;
use crate::validation::TypedRecord;

/// Holds the pretty-printed record until the user dismisses it
#[derive(Debug, Clone, Default)]
pub struct Acknowledgement {
    pending: Option<String>,
}

impl Acknowledgement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record JSON waiting to be shown, if any
    pub fn message(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn dismiss(&mut self) {
        self.pending = None;
    }
}

impl SubmissionSink for Acknowledgement {
    fn on_valid(&mut self, record: &TypedRecord) {
        match record.to_pretty_json() {
            Ok(json) => self.pending = Some(json),
            Err(err) => {
                tracing::warn!("Failed to render submitted record: {err}");
                self.pending = Some(format!("{record:?}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::TypedValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_closed() {
        let ack = Acknowledgement::new();
        assert!(!ack.is_open());
        assert!(ack.message().is_none());
    }

    #[test]
    fn test_on_valid_shows_pretty_json() {
        let mut record = TypedRecord::new();
        record.insert("name", TypedValue::Text("Jane".to_string()));
        record.insert("age", TypedValue::Number(23.0));

        let mut ack = Acknowledgement::new();
        ack.on_valid(&record);

        assert!(ack.is_open());
        assert_eq!(
            ack.message(),
            Some("{\n  \"name\": \"Jane\",\n  \"age\": 23\n}")
        );
    }

    #[test]
    fn test_dismiss() {
        let mut ack = Acknowledgement::new();
        ack.on_valid(&TypedRecord::new());
        ack.dismiss();
        assert!(!ack.is_open());
    }
}
