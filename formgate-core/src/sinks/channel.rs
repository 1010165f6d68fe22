// formgate-core/src/sinks/channel.rs
use log::warn;
use tokio::sync::mpsc::{self, error::TrySendError};

use super::SubmissionSink;
use crate::errors::FormGateError;
use crate::submission::SanitizedSubmission;

/// Hands submissions to a bounded tokio channel for asynchronous delivery.
///
/// Sending never waits: a full or closed channel fails the dispatch, and the
/// gatekeeper leaves the form fields in place.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::Sender<SanitizedSubmission>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::Sender<SanitizedSubmission>) -> Self {
        Self { tx }
    }

    /// Creates a sink together with the receiving end of its channel.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<SanitizedSubmission>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self::new(tx), rx)
    }
}

impl SubmissionSink for ChannelSink {
    fn dispatch(&mut self, submission: &SanitizedSubmission) -> Result<(), FormGateError> {
        self.tx.try_send(submission.clone()).map_err(|e| {
            let reason = match e {
                TrySendError::Full(_) => "delivery queue is full",
                TrySendError::Closed(_) => "delivery channel is closed",
            };
            warn!("Submission not dispatched: {}", reason);
            FormGateError::Dispatch(reason.to_string())
        })
    }
}
