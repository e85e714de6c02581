//! Command implementations for switchboard.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod agents;
mod demo;
mod run;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Run(args) => run::cmd_run(args),
        Command::Demo(args) => demo::cmd_demo(args),
        Command::Agents(args) => agents::cmd_agents(args),
    }
}
