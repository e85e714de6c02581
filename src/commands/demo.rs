//! Implementation of the `switchboard demo` command.
//!
//! A scripted walkthrough of the delegation workflow: register the three
//! standard agents, list them, then delegate one example task per family
//! plus one deliberately unsupported task.

use crate::cli::DemoArgs;
use crate::config::Config;
use crate::dispatch::{Dispatcher, standard_dispatcher};
use crate::error::Result;
use crate::events::{Event, EventAction, append_event};
use crate::task::{
    CodegenOptions, TaskContext, TaskOutcome, TaskRequest, TestgenOptions,
};
use serde_json::{Value, json};

const SAMPLE_CODE: &str = r#"def factorial(n):
    # TODO: Add input validation
    if n == 0:
        return 1
    return n * factorial(n - 1)

def another_long_function():
    # This function is getting quite long
    pass
    pass
    pass
    pass
    pass"#;

/// Execute the `switchboard demo` command.
pub fn cmd_demo(args: DemoArgs) -> Result<()> {
    let dispatcher = standard_dispatcher(&Config::default())?;

    println!("Switchboard Delegation Demo");
    println!("{}", "=".repeat(50));

    println!();
    println!("Registering coding agents...");
    println!("Registered {} agents", dispatcher.len());

    println!();
    println!("Available agents and capabilities:");
    for (name, capabilities) in dispatcher.list_registered() {
        println!("  - {}: {}", name, capabilities.join(", "));
    }

    if let Some(path) = &args.events {
        let event = Event::new(EventAction::Registered)
            .with_details(json!({"agents": dispatcher.len()}));
        append_event(path, &event)?;
    }

    println!();
    println!("{}", "=".repeat(50));
    println!("Task Delegation Examples");
    println!("{}", "=".repeat(50));

    let examples = [
        ("1) Code Generation Task", codegen_example()),
        ("2) Test Generation Task", testgen_example()),
        ("3) Code Analysis Task", analysis_example()),
        ("4) Unsupported Task", unsupported_example()),
    ];

    for (heading, task) in examples {
        println!();
        println!("{}", heading);
        println!("{}", "-".repeat(25));
        println!("Task: {}", task.description);

        let outcome = delegate_and_log(&dispatcher, &args, &task)?;
        print_example_outcome(&outcome);
    }

    println!();
    println!("{}", "=".repeat(50));
    println!("Delegation demo complete.");
    Ok(())
}

fn delegate_and_log(
    dispatcher: &Dispatcher,
    args: &DemoArgs,
    task: &TaskRequest,
) -> Result<TaskOutcome> {
    let outcome = dispatcher.delegate(task);
    if let Some(path) = &args.events {
        super::run::log_outcome(path, task, &outcome)?;
    }
    Ok(outcome)
}

fn print_example_outcome(outcome: &TaskOutcome) {
    if !outcome.success {
        println!("Expected failure: {}", outcome.message);
        return;
    }

    let handled_by = outcome
        .metadata_value("handled_by")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    println!("Success! Handled by: {}", handled_by);

    if let Some(framework) = outcome.metadata_value("test_framework") {
        println!("Test framework: {}", framework.as_str().unwrap_or("?"));
    }
    if let Some(count) = outcome.metadata_value("test_methods") {
        println!("Test methods generated: {}", count);
    }
    if let Some(count) = outcome.metadata_value("lines_analyzed") {
        println!("Lines analyzed: {}", count);
    }
    if let Some(count) = outcome.metadata_value("issues_found") {
        println!("Issues found: {}", count);
    }

    if let Some(text) = outcome.text() {
        println!("Rendered artifact:");
        println!("{}", "-".repeat(40));
        println!("{}", preview(text, 300));
        println!("{}", "-".repeat(40));
    }

    if let Some(report) = outcome.report() {
        println!();
        println!("Analysis results:");
        println!("{}", "-".repeat(40));
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
        println!("{}", "-".repeat(40));
    }
}

/// Truncate long artifacts for display, respecting char boundaries.
fn preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((pos, _)) => format!("{}...", &text[..pos]),
        None => text.to_string(),
    }
}

fn codegen_example() -> TaskRequest {
    TaskRequest::new("function", "Create a function to calculate factorial")
        .with_context(TaskContext::Codegen(CodegenOptions {
            name: Some("calculate_factorial".to_string()),
            parameters: vec!["n: int".to_string()],
            return_type: Some("int".to_string()),
        }))
        .with_language("python")
}

fn testgen_example() -> TaskRequest {
    TaskRequest::new("test", "Create unit tests for the factorial function")
        .with_context(TaskContext::Testgen(TestgenOptions {
            target: Some("calculate_factorial".to_string()),
            test_class: Some("TestFactorial".to_string()),
        }))
        .with_language("python")
}

fn analysis_example() -> TaskRequest {
    TaskRequest::new("analysis", "Analyze the factorial implementation for issues")
        .with_context(TaskContext::Analysis(crate::task::AnalysisOptions {
            code: SAMPLE_CODE.to_string(),
        }))
        .with_language("python")
}

fn unsupported_example() -> TaskRequest {
    TaskRequest::new("database_design", "Design a database schema").with_difficulty("hard")
}
