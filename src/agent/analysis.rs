//! Code analysis agent.
//!
//! Produces a canned, structured report rather than free text. The checks
//! are deliberately shallow marker scans, compiled once per agent from
//! configurable patterns; the defaults are plain literals, giving substring
//! semantics.

use super::{Agent, AgentError};
use crate::config::AnalysisConfig;
use crate::error::{Result, SwitchboardError};
use crate::task::{
    AnalysisOptions, AnalysisReport, TaskContext, TaskOutcome, TaskPayload, TaskRequest,
};
use regex::Regex;
use serde_json::json;

const ACCEPTED_TYPES: &[&str] = &["analysis", "review", "quality", "lint"];

/// Agent specialized in code analysis and review.
#[derive(Debug)]
pub struct CodeAnalysisAgent {
    todo: Regex,
    placeholder: Regex,
    long_function_threshold: usize,
}

impl CodeAnalysisAgent {
    /// Compile the marker patterns from config.
    ///
    /// Fails with a `ConfigError` if a pattern is not a valid regex, so a
    /// typo in `switchboard.yaml` surfaces at startup rather than during
    /// dispatch.
    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        Ok(Self {
            todo: compile_pattern("todo_pattern", &config.todo_pattern)?,
            placeholder: compile_pattern("placeholder_pattern", &config.placeholder_pattern)?,
            long_function_threshold: config.long_function_threshold,
        })
    }

    /// Run the fixed rule set over the given code.
    ///
    /// Rules are evaluated and appended in a fixed order; the empty-code
    /// rule short-circuits all others and omits the line count.
    fn analyze(&self, code: &str, description: &str) -> AnalysisReport {
        let mut report = AnalysisReport {
            description: description.to_string(),
            summary: "Code analysis results".to_string(),
            issues: Vec::new(),
            suggestions: Vec::new(),
            line_count: None,
        };

        if code.is_empty() {
            report
                .issues
                .push("No code provided for analysis".to_string());
            return report;
        }

        let line_count = code.split('\n').count();
        report.line_count = Some(line_count);

        if line_count > self.long_function_threshold {
            report
                .suggestions
                .push("Consider breaking down long functions".to_string());
        }

        if self.todo.is_match(code) {
            report
                .issues
                .push("TODO comments found - incomplete implementation".to_string());
        }

        if self.placeholder.is_match(code) {
            report
                .suggestions
                .push("Replace placeholder 'pass' statements with implementation".to_string());
        }

        report
    }
}

fn compile_pattern(field: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        SwitchboardError::ConfigError(format!(
            "invalid regex in analysis.{}: '{}' - {}",
            field, pattern, e
        ))
    })
}

impl Agent for CodeAnalysisAgent {
    fn name(&self) -> &str {
        "CodeAnalysisAgent"
    }

    fn capabilities(&self) -> Vec<String> {
        vec![
            "code_analysis".to_string(),
            "code_review".to_string(),
            "quality_check".to_string(),
        ]
    }

    fn interested_in(&self, task: &TaskRequest) -> bool {
        ACCEPTED_TYPES.contains(&task.task_type.as_str())
    }

    fn attempt(&self, task: &TaskRequest) -> std::result::Result<TaskOutcome, AgentError> {
        let opts = match &task.context {
            TaskContext::Analysis(opts) => opts.clone(),
            _ => AnalysisOptions::default(),
        };

        let report = self.analyze(&opts.code, &task.description);
        let lines_analyzed = report.line_count.unwrap_or(0);
        let issues_found = report.issues.len();

        Ok(TaskOutcome::success(
            TaskPayload::Report(report),
            "Code analysis completed successfully",
        )
        .with_metadata("lines_analyzed", json!(lines_analyzed))
        .with_metadata("issues_found", json!(issues_found)))
    }
}
