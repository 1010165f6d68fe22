//! Configuration management for `formgate-core`.
//!
//! Defines `GatekeeperConfig`, the set of limits the gatekeeper enforces on a
//! contact form: resubmission delay, field length bounds and the script source
//! allowlist. Configs are YAML; any field left out falls back to the built-in
//! defaults.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Rate-limit key used for the contact form.
pub const DEFAULT_FORM_KEY: &str = "contact-form";
/// Minimum time between two accepted submissions for the same key.
pub const DEFAULT_MIN_DELAY_MS: u64 = 1000;
pub const DEFAULT_NAME_MIN: usize = 2;
pub const DEFAULT_NAME_MAX: usize = 100;
pub const DEFAULT_MESSAGE_MIN: usize = 5;
pub const DEFAULT_MESSAGE_MAX: usize = 1000;
pub const DEFAULT_EMAIL_LOCAL_MAX: usize = 64;
pub const DEFAULT_EMAIL_DOMAIN_MAX: usize = 255;

/// File name looked up under the platform config directory.
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Limits and policies enforced by the gatekeeper.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GatekeeperConfig {
    /// Rate-limit key for the form this gatekeeper guards.
    pub form_key: String,
    /// Minimum delay between two accepted submissions, in milliseconds.
    pub min_delay_ms: u64,
    pub name_min: usize,
    pub name_max: usize,
    pub message_min: usize,
    pub message_max: usize,
    /// Upper bound for the part of an email address before the `@`.
    pub email_local_max: usize,
    /// Upper bound for the domain part, not counting the final `.tld`.
    pub email_domain_max: usize,
    /// Substrings that mark an external script source as trusted.
    pub script_allowlist: Vec<String>,
}

impl Default for GatekeeperConfig {
    fn default() -> Self {
        Self {
            form_key: DEFAULT_FORM_KEY.to_string(),
            min_delay_ms: DEFAULT_MIN_DELAY_MS,
            name_min: DEFAULT_NAME_MIN,
            name_max: DEFAULT_NAME_MAX,
            message_min: DEFAULT_MESSAGE_MIN,
            message_max: DEFAULT_MESSAGE_MAX,
            email_local_max: DEFAULT_EMAIL_LOCAL_MAX,
            email_domain_max: DEFAULT_EMAIL_DOMAIN_MAX,
            script_allowlist: vec!["localhost".to_string(), "script.js".to_string()],
        }
    }
}

impl GatekeeperConfig {
    /// Loads a gatekeeper configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading gatekeeper config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GatekeeperConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        debug!("Loaded gatekeeper config for form '{}'.", config.form_key);
        Ok(config)
    }

    /// Loads the configuration embedded in the crate.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default gatekeeper config from embedded string...");
        let default_yaml = include_str!("../config/default_config.yaml");
        let config: GatekeeperConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default config")?;
        Ok(config)
    }

    /// Location of the per-user config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("formgate").join(CONFIG_FILE_NAME))
    }

    /// Loads `path` if given, else the per-user file if it exists, else the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(p) = path {
            return Self::load_from_file(p);
        }
        match Self::default_path() {
            Some(p) if p.exists() => Self::load_from_file(&p),
            _ => Self::load_default(),
        }
    }

    /// Checks bound consistency. All problems are reported at once.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.form_key.trim().is_empty() {
            errors.push("`form_key` must not be empty.".to_string());
        }
        if self.name_min == 0 {
            errors.push("`name_min` must be at least 1.".to_string());
        }
        if self.name_min > self.name_max {
            errors.push(format!(
                "`name_min` ({}) exceeds `name_max` ({}).",
                self.name_min, self.name_max
            ));
        }
        if self.message_min == 0 {
            errors.push("`message_min` must be at least 1.".to_string());
        }
        if self.message_min > self.message_max {
            errors.push(format!(
                "`message_min` ({}) exceeds `message_max` ({}).",
                self.message_min, self.message_max
            ));
        }
        if self.email_local_max == 0 || self.email_domain_max == 0 {
            errors.push("Email part bounds must be at least 1.".to_string());
        }
        if self.min_delay_ms == 0 {
            warn!("`min_delay_ms` is 0; rate limiting is effectively disabled.");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!(
                "Gatekeeper config validation failed:\n{}",
                errors.join("\n")
            ))
        }
    }
}
