//! qsplit CLI entrypoint

use std::process::ExitCode;

use clap::Parser;

use qasm_split::cli::Cli;
use qasm_split::output;

fn main() -> ExitCode {
    match Cli::parse().execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e);
            ExitCode::FAILURE
        }
    }
}
