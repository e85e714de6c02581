//! CLI argument parsing for switchboard.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Switchboard: Minimal capability-based task dispatcher for specialized
/// coding agents.
///
/// A dispatcher routes each task to the first registered agent whose
/// interest predicate matches the task's type tag. Three agents are built
/// in: code skeletons, test skeletons, and a canned analysis report.
#[derive(Parser, Debug)]
#[command(name = "switchboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for switchboard.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Delegate a single task and print the outcome.
    ///
    /// The task is described either inline (--type plus --description) or
    /// by a task file with YAML frontmatter (--file). An unsupported task
    /// type is reported on stderr but still exits zero.
    Run(RunArgs),

    /// Run the scripted delegation walkthrough.
    ///
    /// Registers the three standard agents and delegates one example task
    /// of each family, plus one unsupported task.
    Demo(DemoArgs),

    /// List registered agents and their capabilities.
    Agents(AgentsArgs),
}

/// Arguments for the `run` command.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to a task file (YAML frontmatter + markdown description).
    #[arg(long, value_name = "PATH", conflicts_with_all = ["task_type", "description"])]
    pub file: Option<PathBuf>,

    /// Task type tag (e.g. function, class, test, analysis).
    #[arg(long = "type", value_name = "TAG")]
    pub task_type: Option<String>,

    /// Human-readable task description.
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Implementation language hint (informational only).
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// Difficulty hint (high, medium, low; informational only).
    #[arg(long, default_value = "medium")]
    pub difficulty: String,

    /// Print the outcome as pretty JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Append delegation events to this NDJSON file.
    #[arg(long, value_name = "PATH")]
    pub events: Option<PathBuf>,

    /// Configuration file (defaults to ./switchboard.yaml when present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `demo` command.
#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Append delegation events to this NDJSON file.
    #[arg(long, value_name = "PATH")]
    pub events: Option<PathBuf>,
}

/// Arguments for the `agents` command.
#[derive(Parser, Debug)]
pub struct AgentsArgs {
    /// Print the listing as JSON.
    #[arg(long)]
    pub json: bool,

    /// Configuration file (defaults to ./switchboard.yaml when present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_run_with_inline_task() {
        let cli = Cli::try_parse_from([
            "switchboard",
            "run",
            "--type",
            "function",
            "--description",
            "Add two numbers",
        ])
        .unwrap();

        let Command::Run(args) = cli.command else {
            panic!("Expected Run command");
        };
        assert_eq!(args.task_type.as_deref(), Some("function"));
        assert_eq!(args.description.as_deref(), Some("Add two numbers"));
        assert_eq!(args.difficulty, "medium");
        assert!(!args.json);
    }

    #[test]
    fn parse_run_with_file() {
        let cli = Cli::try_parse_from(["switchboard", "run", "--file", "task.md"]).unwrap();
        let Command::Run(args) = cli.command else {
            panic!("Expected Run command");
        };
        assert_eq!(args.file.as_deref(), Some(std::path::Path::new("task.md")));
    }

    #[test]
    fn run_file_conflicts_with_inline_task() {
        let result = Cli::try_parse_from([
            "switchboard",
            "run",
            "--file",
            "task.md",
            "--type",
            "function",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_agents_json_flag() {
        let cli = Cli::try_parse_from(["switchboard", "agents", "--json"]).unwrap();
        let Command::Agents(args) = cli.command else {
            panic!("Expected Agents command");
        };
        assert!(args.json);
    }

    #[test]
    fn parse_demo_defaults() {
        let cli = Cli::try_parse_from(["switchboard", "demo"]).unwrap();
        let Command::Demo(args) = cli.command else {
            panic!("Expected Demo command");
        };
        assert!(args.events.is_none());
    }
}
