// formgate-core/src/sinks/memory.rs
use super::SubmissionSink;
use crate::errors::FormGateError;
use crate::submission::SanitizedSubmission;

/// Keeps every dispatched submission in memory, in order.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    received: Vec<SanitizedSubmission>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> &[SanitizedSubmission] {
        &self.received
    }
}

impl SubmissionSink for MemorySink {
    fn dispatch(&mut self, submission: &SanitizedSubmission) -> Result<(), FormGateError> {
        self.received.push(submission.clone());
        Ok(())
    }
}
