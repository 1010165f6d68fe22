// formgate-core/src/lib.rs
//! # FormGate Core Library
//!
//! `formgate-core` decides what happens to a contact form submission. A
//! [`Gatekeeper`] runs every submit event through a per-form rate limiter, a
//! field validator and a markup sanitizer, then hands accepted submissions to
//! a [`SubmissionSink`].
//!
//! The library has no UI binding. The same checks are exposed as the pure
//! function [`evaluate`], which takes the rate-limit state and the current
//! time as arguments and returns the updated state.
//!
//! ## Modules
//!
//! * `config`: `GatekeeperConfig`, the limits enforced on a form, loadable from YAML.
//! * `limiter`: `SubmissionLimiter` and its explicit `RateLimitState`.
//! * `validators`: per-field shape checks and the ordered `FieldValidator`.
//! * `sanitizers`: one-pass HTML escaping of accepted values.
//! * `gatekeeper`: orchestration of a submit pass and the pure `evaluate`.
//! * `sinks`: destinations for accepted submissions.
//! * `policies`: fragment link and script source decisions for the page.
//! * `diagnostics`: PII-aware helpers for logging submissions.
//!
//! ## Usage Example
//!
//! ```rust
//! use formgate_core::{ContactForm, Gatekeeper, GatekeeperConfig, MemorySink, SubmissionOutcome};
//!
//! let mut gate = Gatekeeper::new(GatekeeperConfig::default(), MemorySink::new());
//! let mut form = ContactForm::new("Anna Muster", "anna@example.com", "Hello there!");
//!
//! let outcome = gate.submit(&mut form, 1_000).unwrap();
//! assert!(outcome.is_dispatched());
//! assert!(form.is_empty());
//!
//! // A second submit within the cooldown is turned away.
//! let mut again = ContactForm::new("Anna Muster", "anna@example.com", "Hello again!");
//! let outcome = gate.submit(&mut again, 1_500).unwrap();
//! assert_eq!(outcome, SubmissionOutcome::RateLimited { retry_after_ms: 500 });
//! ```
//!
//! ## Error Handling
//!
//! Rejections are values (`SubmissionOutcome`). `FormGateError` is reserved
//! for failures such as an invalid config or a sink that could not deliver.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod gatekeeper;
pub mod limiter;
pub mod policies;
pub mod sanitizers;
pub mod sinks;
pub mod submission;
pub mod validators;

/// Re-exports the configuration type and its defaults.
pub use config::{GatekeeperConfig, DEFAULT_FORM_KEY, DEFAULT_MIN_DELAY_MS};

/// Re-exports the custom error type for clear error reporting.
pub use errors::FormGateError;

/// Re-exports the orchestration entry points.
pub use gatekeeper::{evaluate, now_millis, Decision, Gatekeeper, SubmissionOutcome, ACKNOWLEDGEMENT};

pub use limiter::{RateLimitState, SubmissionLimiter};

pub use policies::{is_allowed_script_src, is_valid_fragment_link, ScriptAllowlist};

pub use sanitizers::markup::{sanitize, sanitize_submission, sanitize_value};

/// Re-exports the sink trait and the built-in sinks.
pub use sinks::{ChannelSink, LogSink, MemorySink, SubmissionSink};

pub use submission::{ContactForm, RejectReason, SanitizedSubmission, SubmissionAttempt, ValidationResult};

pub use validators::{is_valid_email, is_valid_message, is_valid_name, validate, FieldValidator};
