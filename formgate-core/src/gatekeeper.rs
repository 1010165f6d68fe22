// formgate-core/src/gatekeeper.rs
//! Orchestration of one submission pass.
//!
//! Every submit event goes through the same steps, in order:
//!
//! 1. rate limiter, keyed by the form key,
//! 2. field validator on the trimmed values,
//! 3. sanitizer, per field,
//! 4. dispatch to the sink,
//! 5. reset of the form fields.
//!
//! The first three steps are also available as the pure function
//! [`evaluate`], which takes and returns the rate-limit state explicitly and
//! needs neither a sink nor a form.
//!
//! License: MIT OR APACHE 2.0

use chrono::Utc;
use log::{debug, info};
use serde::Serialize;

use crate::config::GatekeeperConfig;
use crate::errors::FormGateError;
use crate::limiter::{RateLimitState, SubmissionLimiter};
use crate::sanitizers::markup::sanitize_submission;
use crate::sinks::{LogSink, SubmissionSink};
use crate::submission::{ContactForm, RejectReason, SanitizedSubmission, SubmissionAttempt, ValidationResult};
use crate::validators::FieldValidator;

/// Shown to the user after a successful dispatch.
pub const ACKNOWLEDGEMENT: &str = "Thank you for your message! We will get back to you soon.";

/// Verdict of the checks that run before dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    RateLimited { retry_after_ms: u64 },
    Rejected(RejectReason),
    Accepted(SanitizedSubmission),
}

/// Terminal state of a gatekeeper pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum SubmissionOutcome {
    RateLimited { retry_after_ms: u64 },
    ValidationFailed { reason: RejectReason },
    Dispatched { submission: SanitizedSubmission },
}

impl SubmissionOutcome {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, SubmissionOutcome::Dispatched { .. })
    }

    /// The reason code for rejected outcomes.
    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            SubmissionOutcome::RateLimited { .. } => Some(RejectReason::RateLimited),
            SubmissionOutcome::ValidationFailed { reason } => Some(*reason),
            SubmissionOutcome::Dispatched { .. } => None,
        }
    }

    /// Text for the person who submitted the form.
    pub fn user_message(&self) -> &'static str {
        match self.reason() {
            Some(reason) => reason.user_message(),
            None => ACKNOWLEDGEMENT,
        }
    }
}

fn run_checks(
    limiter: &mut SubmissionLimiter,
    validator: &FieldValidator,
    key: &str,
    attempt: &SubmissionAttempt,
    now_ms: u64,
) -> Decision {
    if !limiter.check_and_record(key, now_ms) {
        return Decision::RateLimited {
            retry_after_ms: limiter.remaining_ms(key, now_ms),
        };
    }

    match validator.validate(attempt) {
        ValidationResult::Rejected(reason) => Decision::Rejected(reason),
        ValidationResult::Accepted(fields) => Decision::Accepted(sanitize_submission(&fields)),
    }
}

/// Runs rate limiting, validation and sanitization for one attempt.
///
/// `state` is consumed and returned updated. It only changes when the rate
/// limiter lets the attempt through, even if validation then fails.
pub fn evaluate(
    attempt: &SubmissionAttempt,
    state: RateLimitState,
    now_ms: u64,
    config: &GatekeeperConfig,
) -> (Decision, RateLimitState) {
    let mut limiter = SubmissionLimiter::with_state(config.min_delay_ms, state);
    let validator = FieldValidator::from_config(config);
    let decision = run_checks(&mut limiter, &validator, &config.form_key, attempt, now_ms);
    (decision, limiter.into_state())
}

/// Mediates all submissions of one form.
///
/// Owns its rate-limit state, so independent gatekeepers never share
/// cooldowns.
#[derive(Debug)]
pub struct Gatekeeper<S = LogSink> {
    config: GatekeeperConfig,
    limiter: SubmissionLimiter,
    validator: FieldValidator,
    sink: S,
}

impl<S: SubmissionSink> Gatekeeper<S> {
    pub fn new(config: GatekeeperConfig, sink: S) -> Self {
        Self::with_state(config, sink, RateLimitState::new())
    }

    /// Starts from an existing rate-limit state.
    pub fn with_state(config: GatekeeperConfig, sink: S, state: RateLimitState) -> Self {
        let limiter = SubmissionLimiter::with_state(config.min_delay_ms, state);
        let validator = FieldValidator::from_config(&config);
        Self {
            config,
            limiter,
            validator,
            sink,
        }
    }

    /// Handles one submit event for `form` at time `now_ms`.
    ///
    /// Rejections leave the form as typed. On dispatch the form is cleared.
    /// If the sink fails, the error is returned and the form keeps its
    /// contents; the rate-limit timestamp taken at the start stays recorded.
    pub fn submit(&mut self, form: &mut ContactForm, now_ms: u64) -> Result<SubmissionOutcome, FormGateError> {
        let attempt = form.attempt();
        let key = self.config.form_key.as_str();

        let submission = match run_checks(&mut self.limiter, &self.validator, key, &attempt, now_ms) {
            Decision::RateLimited { retry_after_ms } => {
                info!("Submission for '{}' rate limited, retry in {} ms.", key, retry_after_ms);
                return Ok(SubmissionOutcome::RateLimited { retry_after_ms });
            }
            Decision::Rejected(reason) => {
                info!("Submission for '{}' rejected: {}", key, reason);
                return Ok(SubmissionOutcome::ValidationFailed { reason });
            }
            Decision::Accepted(submission) => submission,
        };

        self.sink.dispatch(&submission)?;
        form.reset();
        debug!("Submission for '{}' dispatched, form reset.", key);

        Ok(SubmissionOutcome::Dispatched { submission })
    }

    pub fn rate_limit_state(&self) -> &RateLimitState {
        self.limiter.state()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// Current wall clock time in milliseconds since the epoch.
///
/// Times before the epoch clamp to 0.
pub fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}
