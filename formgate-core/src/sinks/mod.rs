// formgate-core/src/sinks/mod.rs
//! Destinations for accepted, sanitized submissions.
//!
//! The `SubmissionSink` trait decouples the gatekeeper from wherever a
//! submission ends up. The built-in sinks log it, keep it in memory, or hand
//! it to a channel for another part of the program to deliver.
//!
//! License: MIT OR APACHE 2.0

pub mod channel;
pub mod log_sink;
pub mod memory;

use crate::errors::FormGateError;
use crate::submission::SanitizedSubmission;

pub use channel::ChannelSink;
pub use log_sink::LogSink;
pub use memory::MemorySink;

/// A destination for submissions that passed every gatekeeper check.
///
/// `dispatch` runs synchronously inside the gatekeeper's submit pass. An
/// error means the submission did not reach its destination; the gatekeeper
/// then keeps the form fields so nothing typed is lost.
pub trait SubmissionSink {
    fn dispatch(&mut self, submission: &SanitizedSubmission) -> Result<(), FormGateError>;
}

impl<S: SubmissionSink + ?Sized> SubmissionSink for Box<S> {
    fn dispatch(&mut self, submission: &SanitizedSubmission) -> Result<(), FormGateError> {
        (**self).dispatch(submission)
    }
}
