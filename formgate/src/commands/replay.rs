//! `formgate replay`: a whole page session from JSON Lines.
//!
//! Every line is one submit event:
//!
//! ```json
//! {"name": "Anna Muster", "email": "anna@example.com", "message": "Hello there!", "at_ms": 1000}
//! ```
//!
//! All events go through the same gatekeeper, so the cooldown carries over
//! from one line to the next. `at_ms` is optional and defaults to the wall
//! clock. Field values that are not strings are treated as empty.

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Serialize;
use serde_json::{json, Value};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process::ExitCode;

use formgate_core::{
    now_millis, ContactForm, Gatekeeper, GatekeeperConfig, LogSink, SubmissionAttempt, SubmissionOutcome,
    SubmissionSink,
};

use super::info_msg;
use crate::cli::ReplayCommand;

/// One output line for an event that reached a terminal state.
#[derive(Serialize)]
struct EventReport<'a> {
    line: usize,
    #[serde(flatten)]
    outcome: &'a SubmissionOutcome,
    notice: &'a str,
}

/// Counts per terminal state over a replayed session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    pub dispatched: usize,
    pub rejected: usize,
    pub errors: usize,
}

pub fn run_replay(cmd: ReplayCommand, config: GatekeeperConfig, quiet: bool) -> Result<ExitCode> {
    let reader: Box<dyn BufRead> = match &cmd.input_file {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open input file: {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut gate = Gatekeeper::new(config, LogSink::new());
    let stdout = io::stdout();
    let summary = replay_session(reader, &mut stdout.lock(), &mut gate, now_millis)?;

    info_msg(
        format!(
            "Replayed session: {} dispatched, {} rejected, {} errors.",
            summary.dispatched, summary.rejected, summary.errors
        ),
        quiet,
    );
    Ok(ExitCode::SUCCESS)
}

/// Feeds every non-blank line of `reader` through `gate` and writes one JSON
/// line per event to `writer`.
///
/// A malformed line or a failed dispatch yields an `"error"` line; the session
/// continues with the next event.
pub fn replay_session<R, W, S, C>(
    mut reader: R,
    writer: &mut W,
    gate: &mut Gatekeeper<S>,
    mut clock: C,
) -> Result<ReplaySummary>
where
    R: BufRead,
    W: Write,
    S: SubmissionSink,
    C: FnMut() -> u64,
{
    let mut summary = ReplaySummary::default();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("Failed to read input line {}", line_no + 1))?;
        if read == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                summary.errors += 1;
                warn!("Skipping event on line {}: not valid UTF-8.", line_no);
                write_error(writer, line_no, &format!("line is not valid UTF-8: {}", e))?;
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let record: Value = match serde_json::from_str(line) {
            Ok(v @ Value::Object(_)) => v,
            Ok(_) => {
                summary.errors += 1;
                write_error(writer, line_no, "event must be a JSON object")?;
                continue;
            }
            Err(e) => {
                summary.errors += 1;
                warn!("Skipping malformed event on line {}: {}", line_no, e);
                write_error(writer, line_no, &e.to_string())?;
                continue;
            }
        };

        let at_ms = record.get("at_ms").and_then(Value::as_u64).unwrap_or_else(&mut clock);
        let attempt = SubmissionAttempt::from_json(&record);
        let mut form = ContactForm::new(attempt.name, attempt.email, attempt.message);
        debug!("Replaying line {} at {} ms.", line_no, at_ms);

        match gate.submit(&mut form, at_ms) {
            Ok(outcome) => {
                if outcome.is_dispatched() {
                    summary.dispatched += 1;
                } else {
                    summary.rejected += 1;
                }
                let report = EventReport {
                    line: line_no,
                    outcome: &outcome,
                    notice: outcome.user_message(),
                };
                serde_json::to_writer(&mut *writer, &report).context("Failed to serialize outcome")?;
                writeln!(writer)?;
            }
            Err(e) => {
                summary.errors += 1;
                write_error(writer, line_no, &e.to_string())?;
            }
        }
    }

    Ok(summary)
}

fn write_error<W: Write>(writer: &mut W, line_no: usize, error: &str) -> Result<()> {
    let value = json!({ "line": line_no, "status": "error", "error": error });
    writeln!(writer, "{}", value)?;
    Ok(())
}
