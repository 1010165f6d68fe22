//! Helpers for writing submission data to logs without leaking it.
//!
//! Contact details are personal data. Unless `FORMGATE_ALLOW_DEBUG_PII=true`
//! is set, log lines carry a length hint instead of the value, plus a stable
//! fingerprint that lets two log lines be correlated.

use lazy_static::lazy_static;
use sha2::{Digest, Sha256};

use crate::submission::SanitizedSubmission;

lazy_static! {
    /// Read once: whether raw field values may appear in logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("FORMGATE_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let len = s.chars().count();
    if len <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", len)
    }
}

/// The value itself if PII logging is allowed, else its redacted form.
pub fn loggable(sensitive: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive.to_string()
    } else {
        redact_sensitive(sensitive)
    }
}

/// SHA-256 over the normalized fields, hex encoded.
///
/// Case and inner whitespace runs are normalized so that trivially different
/// resubmissions share a fingerprint.
pub fn submission_fingerprint(submission: &SanitizedSubmission) -> String {
    let mut hasher = Sha256::new();
    for field in [&submission.name, &submission.email, &submission.message] {
        let normalized = field
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        hasher.update(normalized.as_bytes());
        hasher.update(b"\x1f");
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> SanitizedSubmission {
        SanitizedSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_redact_sensitive_short_string() {
        assert_eq!(redact_sensitive("abc"), "[REDACTED]".to_string());
    }

    #[test]
    fn test_redact_sensitive_counts_chars() {
        assert_eq!(redact_sensitive("anna@example.com"), "[REDACTED: 16 chars]");
        assert_eq!(redact_sensitive("Jörg-Änne"), "[REDACTED: 9 chars]");
    }

    #[test]
    fn test_fingerprint_normalizes_case_and_spacing() {
        let a = submission("Anna  Muster", "Anna@Example.com", "Hello there!");
        let b = submission("anna muster", "anna@example.com ", "hello   there!");
        assert_eq!(submission_fingerprint(&a), submission_fingerprint(&b));
        assert_eq!(submission_fingerprint(&a).len(), 64);
    }

    #[test]
    fn test_fingerprint_separates_fields() {
        let a = submission("ab", "c", "defgh");
        let b = submission("a", "bc", "defgh");
        assert_ne!(submission_fingerprint(&a), submission_fingerprint(&b));
    }
}
