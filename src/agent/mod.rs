//! Coding agents and the capability contract they implement.
//!
//! An [`Agent`] is a named, registered unit that (a) predicates whether it is
//! interested in a given task and (b) attempts to render an outcome for it.
//! Three concrete agents are provided:
//!
//! - [`CodeGenerationAgent`]: function/class/snippet skeletons
//! - [`UnitTestGenerationAgent`]: pytest-style test suite skeletons
//! - [`CodeAnalysisAgent`]: a canned static-analysis report

mod analysis;
mod codegen;
pub mod template;
mod testgen;

pub use analysis::CodeAnalysisAgent;
pub use codegen::CodeGenerationAgent;
pub use testgen::UnitTestGenerationAgent;

use crate::task::{TaskOutcome, TaskRequest};
use template::TemplateError;
use thiserror::Error;

/// A failure that escaped an agent's own handling.
///
/// Agents are expected to convert their internal failures into
/// `success=false` outcomes; this error exists for defects that slip past
/// that boundary. The dispatcher absorbs it and converts it into a failed
/// outcome carrying `handled_by` and `error` metadata, so callers of
/// `delegate` never see it.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Template expansion failed while rendering an artifact.
    #[error("template rendering failed: {0}")]
    Template(#[from] TemplateError),

    /// Any other defect that escaped the agent.
    #[error("{0}")]
    Unrecovered(String),
}

/// The capability contract every agent implements.
///
/// Agents are constructed once at startup, registered with exactly one
/// dispatcher, and never mutated afterwards.
pub trait Agent {
    /// Unique identity within a dispatcher's registry; also the
    /// `handled_by` provenance value stamped onto outcomes.
    fn name(&self) -> &str;

    /// Descriptive capability labels. Purely informational: routing is
    /// decided by [`Agent::interested_in`], never by this list. Returns a
    /// defensive copy; callers may mutate it freely.
    fn capabilities(&self) -> Vec<String>;

    /// Pure predicate: true iff the request's `task_type` is one of this
    /// agent's fixed accepted type tags. No side effects.
    fn interested_in(&self, task: &TaskRequest) -> bool;

    /// Attempt the task.
    ///
    /// Internal failures must be caught here and returned as
    /// `Ok(TaskOutcome { success: false, .. })` with a descriptive message.
    /// `Err` is reserved for unrecovered defects.
    fn attempt(&self, task: &TaskRequest) -> Result<TaskOutcome, AgentError>;
}
