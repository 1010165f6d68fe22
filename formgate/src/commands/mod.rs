//! Implementations of the `formgate` subcommands.

pub mod policy;
pub mod replay;
pub mod submit;

use is_terminal::IsTerminal;
use std::io;
use std::process::ExitCode;

use crate::ui::output_format;

/// Exit status for a rejected submission or a blocked link/script.
pub const EXIT_REJECTED: u8 = 2;

/// Exit code for an allow/deny decision.
pub fn decision_exit_code(allowed: bool) -> ExitCode {
    if allowed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_REJECTED)
    }
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, quiet: bool) {
    if quiet {
        return;
    }
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, quiet: bool) {
    if quiet {
        return;
    }
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing error messages to stderr. Never suppressed.
pub fn error_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}
