//! markup.rs - HTML-safe escaping of raw field values.
//!
//! License: MIT OR APACHE 2.0

use serde_json::Value;
use std::borrow::Cow;

use crate::submission::{SanitizedSubmission, SubmissionAttempt};

/// Escapes the characters that carry meaning in HTML text and attribute
/// contexts. Everything else passes through unchanged.
///
/// Returns the input borrowed when nothing needs escaping.
pub fn sanitize(raw: &str) -> Cow<'_, str> {
    let Some(first) = raw.find(needs_escape) else {
        return Cow::Borrowed(raw);
    };

    let mut out = String::with_capacity(raw.len() + 16);
    out.push_str(&raw[..first]);
    for c in raw[first..].chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

fn needs_escape(c: char) -> bool {
    matches!(c, '&' | '<' | '>' | '"' | '\'')
}

/// Sanitizes a loosely typed value. Anything that is not a string becomes an
/// empty string rather than an error.
pub fn sanitize_value(value: &Value) -> String {
    match value {
        Value::String(s) => sanitize(s).into_owned(),
        _ => String::new(),
    }
}

/// Escapes each field of an accepted attempt independently.
pub fn sanitize_submission(fields: &SubmissionAttempt) -> SanitizedSubmission {
    SanitizedSubmission {
        name: sanitize(&fields.name).into_owned(),
        email: sanitize(&fields.email).into_owned(),
        message: sanitize(&fields.message).into_owned(),
    }
}
