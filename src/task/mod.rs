//! Task model for switchboard.
//!
//! This module defines the two value types that cross the dispatch boundary:
//!
//! - [`TaskRequest`]: an immutable description of one unit of work
//! - [`TaskOutcome`]: the uniform result shape for every dispatch attempt
//!
//! A request's `context` is typed per task family rather than a free-form
//! key/value map: each family has an options struct with optional fields and
//! documented defaults, and agents fall back to those defaults when handed a
//! context of the wrong family (or no context at all).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

mod io;

pub use io::TaskFile;
pub use io::TaskFrontmatter;

/// A request describing one unit of work to delegate.
///
/// Once constructed, a request is never mutated by any component; agents and
/// the dispatcher only borrow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRequest {
    /// Type tag that selects which agents are interested (e.g. "function").
    pub task_type: String,

    /// Human-readable intent, interpolated into rendered artifacts.
    pub description: String,

    /// Named parameters for the task family, or `Empty`.
    #[serde(default)]
    pub context: TaskContext,

    /// Implementation language hint. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Difficulty hint (high, medium, low). Informational only.
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

pub(crate) fn default_difficulty() -> String {
    "medium".to_string()
}

impl TaskRequest {
    /// Create a request with an empty context and default difficulty.
    pub fn new(task_type: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            task_type: task_type.into(),
            description: description.into(),
            context: TaskContext::Empty,
            language: None,
            difficulty: default_difficulty(),
        }
    }

    /// Attach a context to this request.
    pub fn with_context(mut self, context: TaskContext) -> Self {
        self.context = context;
        self
    }

    /// Set the language hint.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the difficulty hint.
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }
}

/// Per-family task parameters.
///
/// Serialized externally tagged, so a task file reads naturally:
///
/// ```yaml
/// context:
///   codegen:
///     name: calculate_factorial
///     return_type: int
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskContext {
    /// No parameters; every agent falls back to its documented defaults.
    #[default]
    Empty,
    /// Parameters for the code generation family.
    Codegen(CodegenOptions),
    /// Parameters for the test generation family.
    Testgen(TestgenOptions),
    /// Parameters for the analysis family.
    Analysis(AnalysisOptions),
}

/// Options consumed by the code generation agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenOptions {
    /// Name of the generated function or class.
    /// Defaults to `generated_function` / `GeneratedClass`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Parameter declarations, emitted verbatim and joined with `", "`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<String>,

    /// Declared return type. Defaults to `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
}

/// Options consumed by the test generation agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestgenOptions {
    /// Function under test. Defaults to `function_to_test`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Name of the rendered test suite. Defaults to `TestFunction`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_class: Option<String>,
}

/// Options consumed by the analysis agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Source text to analyze. Defaults to empty.
    pub code: String,
}

/// The payload carried by a successful outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TaskPayload {
    /// Rendered source text (code or test skeletons).
    Text(String),
    /// Structured findings from the analysis agent.
    Report(AnalysisReport),
}

impl TaskPayload {
    /// The payload as rendered text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TaskPayload::Text(text) => Some(text),
            TaskPayload::Report(_) => None,
        }
    }

    /// The payload as an analysis report, if it is one.
    pub fn as_report(&self) -> Option<&AnalysisReport> {
        match self {
            TaskPayload::Text(_) => None,
            TaskPayload::Report(report) => Some(report),
        }
    }
}

/// Structured result of a code analysis task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Echo of the task description.
    pub description: String,

    /// Fixed summary line.
    pub summary: String,

    /// Findings that block or degrade the code, in scan order.
    pub issues: Vec<String>,

    /// Improvement suggestions, in scan order.
    pub suggestions: Vec<String>,

    /// Newline-delimited line count. Absent when no code was provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_count: Option<usize>,
}

/// The result of attempting one task.
///
/// Every dispatch attempt resolves to one of these: a success, a
/// no-agent-found failure, or an agent failure. There is no separate error
/// channel visible to callers of `delegate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskOutcome {
    /// Whether the attempt produced a usable result.
    pub success: bool,

    /// The rendered artifact; absent on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<TaskPayload>,

    /// Human-readable outcome description.
    pub message: String,

    /// Agent-specific statistics, extended by the dispatcher with
    /// `handled_by` (and `error` on an unrecovered agent failure).
    /// Absent when no agent was selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, Value>>,
}

impl TaskOutcome {
    /// A successful outcome carrying a payload.
    pub fn success(result: TaskPayload, message: impl Into<String>) -> Self {
        Self {
            success: true,
            result: Some(result),
            message: message.into(),
            metadata: None,
        }
    }

    /// A failed outcome with no payload and no metadata.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            message: message.into(),
            metadata: None,
        }
    }

    /// Add one metadata entry, creating the map if needed.
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value);
        self
    }

    /// Look up a metadata entry.
    pub fn metadata_value(&self, key: &str) -> Option<&Value> {
        self.metadata.as_ref().and_then(|meta| meta.get(key))
    }

    /// The payload as text, if present.
    pub fn text(&self) -> Option<&str> {
        self.result.as_ref().and_then(TaskPayload::as_text)
    }

    /// The payload as an analysis report, if present.
    pub fn report(&self) -> Option<&AnalysisReport> {
        self.result.as_ref().and_then(TaskPayload::as_report)
    }
}
