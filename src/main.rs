//! Switchboard: Minimal capability-based task dispatcher for specialized
//! coding agents.
//!
//! This is the main entry point for the `switchboard` CLI. It parses
//! arguments, dispatches to the appropriate command handler, and handles
//! errors with proper exit codes.

use std::process::ExitCode;
use switchboard::cli::Cli;
use switchboard::{commands, exit_codes};

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
