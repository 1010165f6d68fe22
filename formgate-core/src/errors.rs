//! errors.rs - Custom error types for the formgate-core library.
//!
//! Rejected submissions are not errors: they are reported as values through
//! `SubmissionOutcome`. This enum only covers the failures a caller has to
//! handle, such as a broken configuration or a sink that refused a submission.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types surfaced by the `formgate-core` library.
///
/// `#[non_exhaustive]` leaves room for new variants without breaking
/// downstream `match` statements.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FormGateError {
    #[error("Invalid gatekeeper configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to dispatch submission: {0}")]
    Dispatch(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
