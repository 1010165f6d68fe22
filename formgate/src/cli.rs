//! Command-line interface definition for the `formgate` binary.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "formgate",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rate-limit, validate and sanitize contact form submissions",
    long_about = "FormGate runs contact form submissions through the same gatekeeper a web page would: a per-form cooldown, shape checks on name, email and message, and HTML escaping of accepted values. Outcomes are printed as JSON on stdout; human-readable notices go to stderr.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Path to a gatekeeper configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", global = true, help = "Path to a gatekeeper configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging for the formgate crates.
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `formgate` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submits a single form event.
    #[command(about = "Submit one contact form event and print its outcome.")]
    Submit(SubmitCommand),

    /// Replays a session of form events from JSON Lines.
    #[command(about = "Replay JSON Lines submission events through one gatekeeper session.")]
    Replay(ReplayCommand),

    /// Checks whether an in-page link may be followed.
    #[command(about = "Check whether a fragment link such as '#about' may be followed.")]
    CheckLink {
        #[arg(value_name = "HREF", allow_hyphen_values = true)]
        href: String,
    },

    /// Checks whether a script source is on the allowlist.
    #[command(about = "Check whether a script source would be kept on the page.")]
    CheckScript {
        #[arg(value_name = "SRC", allow_hyphen_values = true)]
        src: String,
    },
}

/// Arguments for the `submit` command.
#[derive(Parser, Debug)]
pub struct SubmitCommand {
    #[arg(long, value_name = "NAME", default_value = "", help = "Value of the name field.")]
    pub name: String,

    #[arg(long, value_name = "EMAIL", default_value = "", help = "Value of the email field.")]
    pub email: String,

    #[arg(long, value_name = "MESSAGE", default_value = "", allow_hyphen_values = true, help = "Value of the message field.")]
    pub message: String,

    /// Submission time in milliseconds since the epoch (defaults to now).
    #[arg(long = "at-ms", value_name = "MILLIS", help = "Submission time in ms since the epoch (defaults to now).")]
    pub at_ms: Option<u64>,
}

/// Arguments for the `replay` command.
#[derive(Parser, Debug)]
pub struct ReplayCommand {
    /// Path to a JSON Lines file (reads from stdin if not provided).
    #[arg(
        long = "input",
        short = 'i',
        alias = "input-file",
        value_name = "FILE",
        help = "Read events from a specified file instead of stdin."
    )]
    pub input_file: Option<PathBuf>,
}
