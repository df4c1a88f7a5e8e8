//! Submission boundary: where accepted records go

mod acknowledgement;
mod traits;

pub use acknowledgement::Acknowledgement;
pub use traits::SubmissionSink;

#[cfg(test)]
pub use traits::MockSubmissionSink;
