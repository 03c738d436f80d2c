//! CLI argument parsing and command handling

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use crate::config::{self, SplitConfig};
use crate::models::ByteSplitOutcome;
use crate::output;
use crate::sample;
use crate::splitter::{split_bytes_with_remainder, split_with_remainder};

/// qsplit: split text into delimiter-terminated segments
#[derive(Parser, Debug)]
#[command(
    name = "qsplit",
    version,
    about = "Split text into delimiter-terminated segments",
    long_about = "Splits the input at every occurrence of a single delimiter character and \
                  prints each terminated segment on its own line. Text after the last \
                  delimiter has no terminator and is discarded.\n\n\
                  Run 'qsplit' with no input to split the built-in OpenQASM sample."
)]
pub struct Cli {
    /// Input file, or '-' for stdin (defaults to the built-in QASM sample)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Delimiter: one character, an escape (\n, \t, ...) or a name (lf, semicolon, ...)
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Output a JSON report instead of plain lines
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output (only with --json)
    #[arg(long)]
    pub pretty: bool,

    /// Path to a config.toml (default: .qsplit/config.toml, then ~/.qsplit/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (can be repeated for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();

        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        let config = config::load_config(self.config.as_deref(), &cwd)?;

        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        self.run(&config, &mut out)?;
        out.flush().context("Failed to flush stdout")?;
        Ok(())
    }

    /// Split the selected input and write the result to `out`
    ///
    /// Command-line flags take precedence over `config`.
    pub fn run<W: Write>(&self, config: &SplitConfig, out: &mut W) -> Result<()> {
        let delimiter = match &self.delimiter {
            Some(spec) => config::parse_delimiter(spec)
                .with_context(|| format!("Invalid --delimiter {:?}", spec))?,
            None => config.delimiter_char()?,
        };
        let as_json = self.json || config.json;
        let pretty = self.pretty || config.pretty;

        let text = self.read_input()?;
        log::info!("Splitting {} bytes on {:?}", text.len(), delimiter);

        let outcome = split_input(&text, delimiter)?;
        log::debug!(
            "Found {} segments, {} trailing bytes unterminated",
            outcome.segments.len(),
            outcome.remainder.len()
        );

        if let Some(notice) = truncation_notice(&outcome, config) {
            output::warn(&notice);
        }

        if as_json {
            let report = outcome.into_report(delimiter);
            let json = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            writeln!(out, "{}", json).context("Failed to write output")?;
        } else {
            if outcome.segments.is_empty() {
                output::info(&format!("No {:?} delimiter found; nothing to print", delimiter));
            }
            for line in &outcome.segments {
                out.write_all(line).context("Failed to write output")?;
                out.write_all(b"\n").context("Failed to write output")?;
            }
        }

        Ok(())
    }

    fn read_input(&self) -> Result<Vec<u8>> {
        match &self.input {
            None => {
                log::debug!("No input given, using built-in QASM sample");
                Ok(sample::sample().as_bytes().to_vec())
            }
            Some(path) if path.as_os_str() == "-" => {
                let mut text = Vec::new();
                io::stdin()
                    .read_to_end(&mut text)
                    .context("Failed to read stdin")?;
                Ok(text)
            }
            Some(path) => std::fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}

/// Split raw input bytes on `delimiter`
///
/// An ASCII delimiter splits at the byte level, so input in any single-byte
/// encoding works. A non-ASCII delimiter is only meaningful in UTF-8, so the
/// input must then be valid UTF-8.
pub fn split_input(text: &[u8], delimiter: char) -> Result<ByteSplitOutcome<'_>> {
    if delimiter.is_ascii() {
        return Ok(split_bytes_with_remainder(text, delimiter as u8));
    }

    let text = std::str::from_utf8(text).with_context(|| {
        format!(
            "Input is not valid UTF-8; the non-ASCII delimiter {:?} needs UTF-8 input",
            delimiter
        )
    })?;
    Ok(split_with_remainder(text, delimiter).into())
}

/// Message for a discarded trailing segment, if one should be shown
pub fn truncation_notice(outcome: &ByteSplitOutcome<'_>, config: &SplitConfig) -> Option<String> {
    if !outcome.is_truncated() || !config.warn_on_truncation {
        return None;
    }

    Some(format!(
        "Discarded unterminated trailing segment ({} bytes): {:?}",
        outcome.remainder.len(),
        preview(&String::from_utf8_lossy(outcome.remainder))
    ))
}

/// Shorten long text for inclusion in a one-line message
fn preview(text: &str) -> String {
    const MAX_CHARS: usize = 40;
    if text.chars().count() <= MAX_CHARS {
        text.to_string()
    } else {
        let head: String = text.chars().take(MAX_CHARS).collect();
        format!("{}...", head)
    }
}
