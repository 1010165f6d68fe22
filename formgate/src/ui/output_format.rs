//! Human-readable notices on stderr.
//!
//! Colour is applied only when the target is a terminal; the caller decides.

use owo_colors::OwoColorize;
use std::io::{self, Write};

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.green())
    } else {
        writeln!(writer, "{}", msg)
    }
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.yellow())
    } else {
        writeln!(writer, "{}", msg)
    }
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Error:".red().bold(), msg.red())
    } else {
        writeln!(writer, "Error: {}", msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_without_color() {
        let mut buf = Vec::new();
        print_warn_message(&mut buf, "Please fill in all fields.", false).unwrap();
        print_error_message(&mut buf, "boom", false).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Please fill in all fields.\nError: boom\n"
        );
    }
}
