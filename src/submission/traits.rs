//! Trait abstraction for the submission boundary to enable mocking in tests

use crate::validation::TypedRecord;

/// Receives the typed record of every accepted submission
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    /// Called exactly once per accepted submit attempt
    fn on_valid(&mut self, record: &TypedRecord);
}
