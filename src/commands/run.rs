//! Implementation of the `switchboard run` command.
//!
//! Builds one task request from flags or a task file, delegates it, and
//! renders the outcome. An unsupported task type is a normal outcome, not a
//! process failure: the message goes to stderr and the exit code stays zero.

use crate::cli::RunArgs;
use crate::config::Config;
use crate::dispatch::standard_dispatcher;
use crate::error::{Result, SwitchboardError};
use crate::events::{Event, EventAction, append_event};
use crate::task::{AnalysisReport, TaskFile, TaskOutcome, TaskPayload, TaskRequest};
use serde_json::{Value, json};
use std::path::Path;

/// Execute the `switchboard run` command.
pub fn cmd_run(args: RunArgs) -> Result<()> {
    let config = Config::resolve(args.config.as_deref())?;
    let dispatcher = standard_dispatcher(&config)?;

    let task = build_request(&args)?;
    let outcome = dispatcher.delegate(&task);

    if let Some(path) = args.events.as_deref().or(config.events_log.as_deref()) {
        log_outcome(path, &task, &outcome)?;
    }

    if args.json {
        let rendered = serde_json::to_string_pretty(&outcome).map_err(|e| {
            SwitchboardError::UserError(format!("failed to serialize outcome: {}", e))
        })?;
        println!("{}", rendered);
        return Ok(());
    }

    print_outcome(&outcome);
    Ok(())
}

/// Build the task request described by the arguments.
///
/// Inline flags produce a request with an empty context; rich contexts are
/// expressed through a task file.
fn build_request(args: &RunArgs) -> Result<TaskRequest> {
    if let Some(path) = &args.file {
        return Ok(TaskFile::load(path)?.to_request());
    }

    let (Some(task_type), Some(description)) = (&args.task_type, &args.description) else {
        return Err(SwitchboardError::UserError(
            "either --file or both --type and --description are required".to_string(),
        ));
    };

    let mut task = TaskRequest::new(task_type.as_str(), description.as_str())
        .with_difficulty(args.difficulty.as_str());
    if let Some(language) = &args.language {
        task = task.with_language(language.as_str());
    }
    Ok(task)
}

/// Append one delegation event describing the outcome.
pub(super) fn log_outcome(path: &Path, task: &TaskRequest, outcome: &TaskOutcome) -> Result<()> {
    let action = match &outcome.metadata {
        None => EventAction::NoAgent,
        Some(meta) if meta.contains_key("error") => EventAction::AgentFailed,
        Some(_) => EventAction::Delegated,
    };

    let event = Event::new(action)
        .with_task_type(task.task_type.as_str())
        .with_details(json!({
            "success": outcome.success,
            "handled_by": outcome.metadata_value("handled_by"),
            "message": outcome.message,
        }));
    append_event(path, &event)
}

fn print_outcome(outcome: &TaskOutcome) {
    if !outcome.success {
        eprintln!("{}", outcome.message);
        return;
    }

    let handled_by = outcome
        .metadata_value("handled_by")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    println!("Handled by: {}", handled_by);
    println!("{}", outcome.message);

    match &outcome.result {
        Some(TaskPayload::Text(text)) => {
            println!();
            println!("{}", text);
        }
        Some(TaskPayload::Report(report)) => print_report(report),
        None => {}
    }
}

fn print_report(report: &AnalysisReport) {
    println!();
    println!("{}", report.summary);
    if let Some(count) = report.line_count {
        println!("Lines analyzed: {}", count);
    }
    if !report.issues.is_empty() {
        println!("Issues:");
        for issue in &report.issues {
            println!("  - {}", issue);
        }
    }
    if !report.suggestions.is_empty() {
        println!("Suggestions:");
        for suggestion in &report.suggestions {
            println!("  - {}", suggestion);
        }
    }
}
