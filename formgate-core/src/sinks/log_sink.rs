// formgate-core/src/sinks/log_sink.rs
use chrono::Utc;
use log::{info, log_enabled, Level};
use uuid::Uuid;

use super::SubmissionSink;
use crate::diagnostics::{loggable, submission_fingerprint};
use crate::errors::FormGateError;
use crate::submission::SanitizedSubmission;

/// Writes a diagnostic record of each submission to the log and acknowledges
/// it locally. Nothing is stored or forwarded.
///
/// The record is best effort and never fails the dispatch.
#[derive(Debug, Default)]
pub struct LogSink {
    dispatched: u64,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of submissions acknowledged so far.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }
}

impl SubmissionSink for LogSink {
    fn dispatch(&mut self, submission: &SanitizedSubmission) -> Result<(), FormGateError> {
        if log_enabled!(Level::Info) {
            info!("{}", diagnostic_record(&Uuid::new_v4(), submission));
        }
        self.dispatched += 1;
        Ok(())
    }
}

/// One log line per submission. Every field value goes through `loggable`.
fn diagnostic_record(record_id: &Uuid, submission: &SanitizedSubmission) -> String {
    format!(
        "Secure message received: id={} at={} fingerprint={} name='{}' email='{}' message='{}'",
        record_id,
        Utc::now().to_rfc3339(),
        submission_fingerprint(submission),
        loggable(&submission.name),
        loggable(&submission.email),
        loggable(&submission.message),
    )
}
