//! `formgate check-link` and `formgate check-script`.

use anyhow::Result;
use std::io::{self, Write};
use std::process::ExitCode;

use formgate_core::{is_valid_fragment_link, GatekeeperConfig, ScriptAllowlist};

use super::decision_exit_code;

fn report(allowed: bool) -> Result<ExitCode> {
    let verdict = if allowed { "allowed" } else { "blocked" };
    writeln!(io::stdout().lock(), "{}", verdict)?;
    Ok(decision_exit_code(allowed))
}

pub fn run_check_link(href: &str) -> Result<ExitCode> {
    report(is_valid_fragment_link(href))
}

pub fn run_check_script(src: &str, config: &GatekeeperConfig) -> Result<ExitCode> {
    report(ScriptAllowlist::from_config(config).is_allowed(src))
}
