//! Data structures that flow through one validation pass.
//!
//! A `SubmissionAttempt` is taken from the form at submit time and lives only
//! for the duration of that pass. `ContactForm` is the editable buffer the
//! attempt is read from; it is cleared only after a successful dispatch.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::validators::is_form_whitespace;

/// The three raw field values of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SubmissionAttempt {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl SubmissionAttempt {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Builds an attempt from a loosely typed JSON record.
    ///
    /// Missing keys and non-string values become empty fields, which the
    /// validator then reports as `missing-field`.
    pub fn from_json(record: &Value) -> Self {
        Self {
            name: field_text(record.get("name")),
            email: field_text(record.get("email")),
            message: field_text(record.get("message")),
        }
    }

    /// Copy with surrounding form whitespace stripped from every field.
    pub fn trimmed(&self) -> Self {
        Self::new(
            self.name.trim_matches(is_form_whitespace),
            self.email.trim_matches(is_form_whitespace),
            self.message.trim_matches(is_form_whitespace),
        )
    }
}

fn field_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Why a submission attempt was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectReason {
    RateLimited,
    MissingField,
    InvalidName,
    InvalidEmail,
    InvalidMessage,
}

impl RejectReason {
    /// Stable reason code, identical to the serialized form.
    pub fn code(self) -> &'static str {
        match self {
            RejectReason::RateLimited => "rate-limited",
            RejectReason::MissingField => "missing-field",
            RejectReason::InvalidName => "invalid-name",
            RejectReason::InvalidEmail => "invalid-email",
            RejectReason::InvalidMessage => "invalid-message",
        }
    }

    /// Fixed message shown to the person filling in the form.
    pub fn user_message(self) -> &'static str {
        match self {
            RejectReason::RateLimited => "Please wait a moment before submitting the form again.",
            RejectReason::MissingField => "Please fill in all fields.",
            RejectReason::InvalidName => "The name must be between 2 and 100 characters long.",
            RejectReason::InvalidEmail => "Please enter a valid email address.",
            RejectReason::InvalidMessage => "The message must be between 5 and 1000 characters long.",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Result of the field validator. There is no partial acceptance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// All fields passed; carries the trimmed values.
    Accepted(SubmissionAttempt),
    Rejected(RejectReason),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted(_))
    }
}

/// Field values after escaping, ready to be handed to a sink.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SanitizedSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// The user-editable field buffer of the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Snapshot of the current field values.
    pub fn attempt(&self) -> SubmissionAttempt {
        SubmissionAttempt::new(self.name.clone(), self.email.clone(), self.message.clone())
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_maps_non_strings_to_empty() {
        let record = json!({ "name": 42, "email": null, "message": "hello there" });
        let attempt = SubmissionAttempt::from_json(&record);
        assert_eq!(attempt.name, "");
        assert_eq!(attempt.email, "");
        assert_eq!(attempt.message, "hello there");
    }

    #[test]
    fn reason_codes_match_serialized_form() {
        for reason in [
            RejectReason::RateLimited,
            RejectReason::MissingField,
            RejectReason::InvalidName,
            RejectReason::InvalidEmail,
            RejectReason::InvalidMessage,
        ] {
            let serialized = serde_json::to_string(&reason).unwrap();
            assert_eq!(serialized, format!("\"{}\"", reason.code()));
        }
    }

    #[test]
    fn reset_clears_every_field() {
        let mut form = ContactForm::new("Anna", "anna@example.com", "Hi there");
        form.reset();
        assert!(form.is_empty());
    }
}
