use owo_colors::OwoColorize;
use std::fmt::Display;
use std::io::{self, IsTerminal};

/// Prints a fatal error as a single `error: ...` line on stderr.
pub fn report_error(err: &impl Display) {
    if io::stderr().is_terminal() {
        eprintln!("{}: {}", "error".red().bold(), err);
    } else {
        eprintln!("error: {err}");
    }
}
