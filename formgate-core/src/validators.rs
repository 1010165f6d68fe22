// File: formgate-core/src/validators.rs
//! Shape checks for the contact form fields.
//!
//! Each field has a single predicate; `FieldValidator` runs them in a fixed
//! order and stops at the first failure. The email check is a deliberately
//! loose heuristic, not RFC 5322 validation, and must stay that way so that
//! the same addresses are accepted and refused as before.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::GatekeeperConfig;
use crate::submission::{RejectReason, SubmissionAttempt, ValidationResult};

// Letters, form whitespace, the German umlauts and eszett, hyphen and
// apostrophe. The whitespace class is spelled out to match
// `is_form_whitespace`; the regex crate's `\s` also covers U+0085.
// Length is checked separately so the bounds can come from the config.
static NAME_CHARSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}äöüÄÖÜß\-']+$",
    )
    .expect("name charset regex is valid")
});

/// Whitespace as browsers define it for form input: the ASCII controls
/// `\t \n \v \f \r`, space, no-break spaces, the Unicode space separators,
/// the line and paragraph separators and the byte order mark.
///
/// Unlike `char::is_whitespace`, U+0085 (next line) is not included and
/// U+FEFF is.
pub(crate) fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Field length in UTF-16 code units, the unit browsers report for input
/// values. Characters outside the BMP count twice.
pub(crate) fn field_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Checks a (trimmed) name against the allowed charset and length bounds.
///
/// # Arguments
///
/// * `name` - The name to check.
/// * `min`, `max` - Inclusive length bounds, counted in UTF-16 code units.
pub fn is_valid_name(name: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&field_len(name)) && NAME_CHARSET.is_match(name)
}

/// Checks an email address shape.
///
/// Accepts `local@domain.tld` where `local` has 1..=`local_max` code units,
/// `domain` has 1..=`domain_max` code units, neither contains whitespace or
/// `@`, and `tld` is at least two ASCII letters. `domain` may itself contain
/// dots; the split happens at the last one.
pub fn is_valid_email(email: &str, local_max: usize, domain_max: usize) -> bool {
    let mut parts = email.split('@');

    let (Some(local), Some(rest), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.contains(is_form_whitespace) || rest.contains(is_form_whitespace) {
        return false;
    }

    let local_len = field_len(local);
    if local_len == 0 || local_len > local_max {
        return false;
    }

    // Only the last dot can start the TLD: anything after an earlier dot
    // would include a later '.', which is not a letter.
    let Some((domain, tld)) = rest.rsplit_once('.') else {
        return false;
    };

    let domain_len = field_len(domain);
    if domain_len == 0 || domain_len > domain_max {
        return false;
    }

    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Checks the message length, counted in UTF-16 code units.
pub fn is_valid_message(message: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&field_len(message))
}

/// Runs the field checks in order: presence, name, email, message.
#[derive(Debug, Clone)]
pub struct FieldValidator {
    name_bounds: (usize, usize),
    message_bounds: (usize, usize),
    email_local_max: usize,
    email_domain_max: usize,
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::from_config(&GatekeeperConfig::default())
    }
}

impl FieldValidator {
    pub fn from_config(config: &GatekeeperConfig) -> Self {
        Self {
            name_bounds: (config.name_min, config.name_max),
            message_bounds: (config.message_min, config.message_max),
            email_local_max: config.email_local_max,
            email_domain_max: config.email_domain_max,
        }
    }

    /// Validates the trimmed fields of `attempt`.
    ///
    /// On success the trimmed values are returned unchanged; they are not
    /// sanitized here.
    pub fn validate(&self, attempt: &SubmissionAttempt) -> ValidationResult {
        let fields = attempt.trimmed();

        let reason = if fields.name.is_empty() || fields.email.is_empty() || fields.message.is_empty() {
            Some(RejectReason::MissingField)
        } else if !is_valid_name(&fields.name, self.name_bounds.0, self.name_bounds.1) {
            Some(RejectReason::InvalidName)
        } else if !is_valid_email(&fields.email, self.email_local_max, self.email_domain_max) {
            Some(RejectReason::InvalidEmail)
        } else if !is_valid_message(&fields.message, self.message_bounds.0, self.message_bounds.1) {
            Some(RejectReason::InvalidMessage)
        } else {
            None
        };

        match reason {
            Some(reason) => {
                debug!("Field validation failed: {}", reason);
                ValidationResult::Rejected(reason)
            }
            None => ValidationResult::Accepted(fields),
        }
    }
}

/// Validates `attempt` with the default bounds.
pub fn validate(attempt: &SubmissionAttempt) -> ValidationResult {
    FieldValidator::default().validate(attempt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(name: &str, email: &str, message: &str) -> SubmissionAttempt {
        SubmissionAttempt::new(name, email, message)
    }

    #[test]
    fn accented_name_with_hyphen_and_apostrophe_is_valid() {
        assert!(is_valid_name("Jörg-Ä'nne", 2, 100));
        assert!(is_valid_name("Anna Muster", 2, 100));
        assert!(is_valid_name("Weiß", 2, 100));
    }

    #[test]
    fn short_or_digit_names_are_invalid() {
        assert!(!is_valid_name("A", 2, 100));
        assert!(!is_valid_name("Bob123", 2, 100));
        assert!(!is_valid_name(&"a".repeat(101), 2, 100));
        assert!(is_valid_name(&"a".repeat(100), 2, 100));
        // Accents outside the German set are not in the charset.
        assert!(!is_valid_name("José", 2, 100));
    }

    #[test]
    fn email_heuristic() {
        assert!(is_valid_email("a@b.co", 64, 255));
        assert!(is_valid_email("first.last@mail.example.org", 64, 255));
        assert!(!is_valid_email("a@b", 64, 255));
        assert!(!is_valid_email("@b.co", 64, 255));
        assert!(!is_valid_email("a@.co", 64, 255));
        assert!(!is_valid_email("a@b.c", 64, 255));
        assert!(!is_valid_email("a@b.c0m", 64, 255));
        assert!(!is_valid_email("a b@c.de", 64, 255));
        assert!(!is_valid_email("a@b@c.de", 64, 255));
    }

    #[test]
    fn email_heuristic_quirks_are_kept() {
        // Structurally odd, but the shape check lets these through.
        assert!(is_valid_email("a@..co", 64, 255));
        assert!(is_valid_email("<x>@y.zz", 64, 255));
    }

    #[test]
    fn email_part_bounds() {
        let local_64 = format!("{}@b.co", "a".repeat(64));
        let local_65 = format!("{}@b.co", "a".repeat(65));
        assert!(is_valid_email(&local_64, 64, 255));
        assert!(!is_valid_email(&local_65, 64, 255));

        let domain_255 = format!("a@{}.co", "d".repeat(255));
        let domain_256 = format!("a@{}.co", "d".repeat(256));
        assert!(is_valid_email(&domain_255, 64, 255));
        assert!(!is_valid_email(&domain_256, 64, 255));
    }

    #[test]
    fn message_length_bounds() {
        assert!(is_valid_message("Hello", 5, 1000));
        assert!(!is_valid_message("Hell", 5, 1000));
        assert!(is_valid_message(&"m".repeat(1000), 5, 1000));
        assert!(!is_valid_message(&"m".repeat(1001), 5, 1000));
    }

    #[test]
    fn astral_characters_count_as_two_units() {
        // Three emoji are six code units: long enough.
        assert!(is_valid_message("😀😀😀", 5, 1000));
        assert!(!is_valid_message("😀😀", 5, 1000));
        assert!(is_valid_message(&"😀".repeat(500), 5, 1000));
        assert!(!is_valid_message(&"😀".repeat(600), 5, 1000));

        assert!(is_valid_email(&format!("{}@b.co", "😀".repeat(32)), 64, 255));
        assert!(!is_valid_email(&format!("{}@b.co", "😀".repeat(33)), 64, 255));
        assert!(!is_valid_email(&format!("a@{}.co", "𝔡".repeat(128)), 64, 255));

        // Umlauts stay single units.
        assert!(is_valid_name(&"ü".repeat(100), 2, 100));
    }

    #[test]
    fn form_whitespace_set() {
        for c in ['\t', '\u{0B}', ' ', '\u{A0}', '\u{2007}', '\u{3000}', '\u{FEFF}'] {
            assert!(is_form_whitespace(c), "{:?}", c);
        }
        for c in ['\u{85}', '\u{200B}', 'x'] {
            assert!(!is_form_whitespace(c), "{:?}", c);
        }
    }

    #[test]
    fn next_line_is_not_whitespace_in_fields() {
        // U+0085 is an ordinary character in an address, but not in a name.
        assert!(is_valid_email("a\u{85}b@c.de", 64, 255));
        assert!(!is_valid_name("Anna\u{85}Muster", 2, 100));
        // The byte order mark is whitespace.
        assert!(!is_valid_email("a\u{FEFF}b@c.de", 64, 255));
        assert!(is_valid_name("Anna\u{FEFF}Muster", 2, 100));
        assert!(is_valid_name("Anna\u{A0}Muster", 2, 100));
    }

    #[test]
    fn byte_order_mark_is_trimmed() {
        let result = validate(&attempt("\u{FEFF}Anna", "anna@example.com\u{FEFF}", "Hello there!"));
        assert_eq!(
            result,
            ValidationResult::Accepted(attempt("Anna", "anna@example.com", "Hello there!"))
        );
        // U+0085 survives trimming and is then not a name character.
        assert_eq!(
            validate(&attempt("Anna\u{85}", "anna@example.com", "Hello there!")),
            ValidationResult::Rejected(RejectReason::InvalidName)
        );
    }

    #[test]
    fn checks_run_in_order() {
        // Everything is wrong, but presence is reported first.
        assert_eq!(
            validate(&attempt("1", "", "x")),
            ValidationResult::Rejected(RejectReason::MissingField)
        );
        assert_eq!(
            validate(&attempt("1", "nope", "x")),
            ValidationResult::Rejected(RejectReason::InvalidName)
        );
        assert_eq!(
            validate(&attempt("Anna", "nope", "x")),
            ValidationResult::Rejected(RejectReason::InvalidEmail)
        );
        assert_eq!(
            validate(&attempt("Anna", "a@b.co", "x")),
            ValidationResult::Rejected(RejectReason::InvalidMessage)
        );
    }

    #[test]
    fn whitespace_only_field_is_missing() {
        assert_eq!(
            validate(&attempt("Anna", "a@b.co", "   \n\t")),
            ValidationResult::Rejected(RejectReason::MissingField)
        );
    }

    #[test]
    fn accepted_fields_are_trimmed() {
        let result = validate(&attempt("  Anna Muster ", " anna@example.com\n", " Hello there! "));
        assert_eq!(
            result,
            ValidationResult::Accepted(attempt("Anna Muster", "anna@example.com", "Hello there!"))
        );
    }

    #[test]
    fn message_bounds_apply_after_trimming() {
        // Five visible characters padded with spaces: valid.
        assert!(validate(&attempt("Anna", "a@b.co", "  abcde  ")).is_accepted());
        // Four visible characters padded to six: invalid.
        assert_eq!(
            validate(&attempt("Anna", "a@b.co", " abcd ")),
            ValidationResult::Rejected(RejectReason::InvalidMessage)
        );
    }
}
