//! Colored notices on stderr
//!
//! stdout carries split output only, so every user-facing message goes to
//! stderr and never mixes with segments in a pipe.

use owo_colors::OwoColorize;

/// Yellow notice set off by blank lines
///
/// # Example
/// ```ignore
/// output::warn("Discarded unterminated trailing segment (21 bytes): \"measure q[2] -> c[2];\"");
/// ```
pub fn warn(message: &str) {
    eprintln!("\n{}\n", message.yellow());
}

/// Report a fatal error, including its context chain, in red
pub fn error(err: &anyhow::Error) {
    eprintln!("\n{}\n", format!("Error: {:#}", err).red());
}

/// Uncolored one-line notice
pub fn info(message: &str) {
    eprintln!("{}", message);
}
