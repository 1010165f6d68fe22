//! `formgate submit`: one submit event through a fresh gatekeeper.

use anyhow::{Context, Result};
use log::debug;
use std::io::{self, Write};
use std::process::ExitCode;

use formgate_core::{now_millis, ContactForm, Gatekeeper, GatekeeperConfig, LogSink};

use super::{decision_exit_code, info_msg, warn_msg};
use crate::cli::SubmitCommand;

pub fn run_submit(cmd: SubmitCommand, config: GatekeeperConfig, quiet: bool) -> Result<ExitCode> {
    let mut gate = Gatekeeper::new(config, LogSink::new());
    let mut form = ContactForm::new(cmd.name, cmd.email, cmd.message);
    let now_ms = cmd.at_ms.unwrap_or_else(now_millis);

    debug!("Submitting single event at {} ms.", now_ms);
    let outcome = gate.submit(&mut form, now_ms).context("Submission could not be dispatched")?;

    let json = serde_json::to_string(&outcome).context("Failed to serialize outcome")?;
    writeln!(io::stdout().lock(), "{}", json)?;

    if outcome.is_dispatched() {
        info_msg(outcome.user_message(), quiet);
    } else {
        warn_msg(outcome.user_message(), quiet);
    }

    Ok(decision_exit_code(outcome.is_dispatched()))
}
