// formgate-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use formgate_core::{validate, FieldValidator, GatekeeperConfig, RejectReason, SubmissionAttempt, ValidationResult};

fn write_config(yaml: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_from_file_partial_overrides() -> Result<()> {
    let file = write_config(
        r#"
form_key: newsletter-form
min_delay_ms: 2500
message_max: 200
"#,
    )?;
    let config = GatekeeperConfig::load_from_file(file.path())?;
    assert_eq!(config.form_key, "newsletter-form");
    assert_eq!(config.min_delay_ms, 2500);
    assert_eq!(config.message_max, 200);
    // Omitted fields keep their defaults.
    assert_eq!(config.name_min, 2);
    assert_eq!(config.email_domain_max, 255);
    assert_eq!(config.script_allowlist, vec!["localhost", "script.js"]);
    Ok(())
}

#[test]
fn test_load_from_file_rejects_inverted_bounds() -> Result<()> {
    let file = write_config("name_min: 50\nname_max: 10\n")?;
    let err = GatekeeperConfig::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("validation failed"));
    Ok(())
}

#[test]
fn test_load_from_file_rejects_bad_yaml() -> Result<()> {
    let file = write_config("min_delay_ms: [not, a, number]\n")?;
    assert!(GatekeeperConfig::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_load_or_default_with_explicit_path() -> Result<()> {
    let file = write_config("message_min: 1\n")?;
    let config = GatekeeperConfig::load_or_default(Some(file.path()))?;
    assert_eq!(config.message_min, 1);
    Ok(())
}

#[test]
fn test_configured_bounds_drive_validation() {
    let config = GatekeeperConfig {
        message_max: 10,
        ..Default::default()
    };
    let validator = FieldValidator::from_config(&config);
    let attempt = SubmissionAttempt::new("Anna", "a@b.co", "this is too long");
    assert_eq!(
        validator.validate(&attempt),
        ValidationResult::Rejected(RejectReason::InvalidMessage)
    );
    // The default bounds accept the same attempt.
    assert!(validate(&attempt).is_accepted());
}
