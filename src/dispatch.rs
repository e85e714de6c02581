//! Task dispatch and the agent registry.
//!
//! The [`Dispatcher`] owns its registry outright: agents are moved in at
//! registration and hold no back-reference. Routing is a linear scan in
//! registration order with first-match selection — no scoring, no priority,
//! no memory of prior calls.

use crate::agent::{Agent, CodeAnalysisAgent, CodeGenerationAgent, UnitTestGenerationAgent};
use crate::config::Config;
use crate::error::Result;
use crate::task::{TaskOutcome, TaskRequest};
use serde_json::json;

/// Routes task requests to the first interested registered agent.
///
/// ```
/// use switchboard::agent::CodeGenerationAgent;
/// use switchboard::dispatch::Dispatcher;
/// use switchboard::task::TaskRequest;
///
/// let mut dispatcher = Dispatcher::new();
/// dispatcher.register(Box::new(CodeGenerationAgent));
///
/// let outcome = dispatcher.delegate(&TaskRequest::new("snippet", "Print a greeting"));
/// assert!(outcome.success);
/// ```
#[derive(Default)]
pub struct Dispatcher {
    agents: Vec<Box<dyn Agent>>,
}

impl Dispatcher {
    /// Create a dispatcher with an empty registry.
    pub fn new() -> Self {
        Self { agents: Vec::new() }
    }

    /// Register an agent.
    ///
    /// Re-registering a name silently replaces the prior agent in place,
    /// keeping the original registration position.
    pub fn register(&mut self, agent: Box<dyn Agent>) {
        match self.agents.iter_mut().find(|a| a.name() == agent.name()) {
            Some(slot) => *slot = agent,
            None => self.agents.push(agent),
        }
    }

    /// Delegate a task to the first interested agent.
    ///
    /// Returns one of three outcome shapes, never an error:
    ///
    /// - no interested agent: `success=false`, no metadata
    /// - normal agent return: the agent's outcome with `handled_by` stamped
    ///   into its metadata, all other keys preserved
    /// - unrecovered agent failure: `success=false` with `handled_by` and
    ///   `error` metadata
    pub fn delegate(&self, task: &TaskRequest) -> TaskOutcome {
        let Some(agent) = self.agents.iter().find(|a| a.interested_in(task)) else {
            return TaskOutcome::failure(format!(
                "No agent found to handle task type: {}",
                task.task_type
            ));
        };

        match agent.attempt(task) {
            Ok(outcome) => outcome.with_metadata("handled_by", json!(agent.name())),
            Err(err) => TaskOutcome::failure(format!(
                "{} failed to execute task: {}",
                agent.name(),
                err
            ))
            .with_metadata("handled_by", json!(agent.name()))
            .with_metadata("error", json!(err.to_string())),
        }
    }

    /// Registration-ordered snapshot of agent names and capabilities.
    pub fn list_registered(&self) -> Vec<(String, Vec<String>)> {
        self.agents
            .iter()
            .map(|a| (a.name().to_string(), a.capabilities()))
            .collect()
    }

    /// Number of registered agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// True if no agents are registered.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

/// Build a dispatcher with the standard agents enabled by the config.
///
/// Registration order is fixed: code generation, test generation, analysis.
pub fn standard_dispatcher(config: &Config) -> Result<Dispatcher> {
    let mut dispatcher = Dispatcher::new();
    if config.agents.codegen {
        dispatcher.register(Box::new(CodeGenerationAgent));
    }
    if config.agents.testgen {
        dispatcher.register(Box::new(UnitTestGenerationAgent));
    }
    if config.agents.analysis {
        dispatcher.register(Box::new(CodeAnalysisAgent::from_config(&config.analysis)?));
    }
    Ok(dispatcher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentError;
    use crate::task::TaskPayload;

    /// Test double with a configurable name and accepted type.
    struct StubAgent {
        name: &'static str,
        accepts: &'static str,
        marker: &'static str,
    }

    impl Agent for StubAgent {
        fn name(&self) -> &str {
            self.name
        }

        fn capabilities(&self) -> Vec<String> {
            vec![format!("{}_capability", self.marker)]
        }

        fn interested_in(&self, task: &TaskRequest) -> bool {
            task.task_type == self.accepts
        }

        fn attempt(&self, _task: &TaskRequest) -> std::result::Result<TaskOutcome, AgentError> {
            Ok(TaskOutcome::success(
                TaskPayload::Text(self.marker.to_string()),
                "stub done",
            )
            .with_metadata("marker", json!(self.marker)))
        }
    }

    /// Test double whose defect escapes its own boundary.
    struct ExplodingAgent;

    impl Agent for ExplodingAgent {
        fn name(&self) -> &str {
            "ExplodingAgent"
        }

        fn capabilities(&self) -> Vec<String> {
            vec!["exploding".to_string()]
        }

        fn interested_in(&self, task: &TaskRequest) -> bool {
            task.task_type == "explode"
        }

        fn attempt(&self, _task: &TaskRequest) -> std::result::Result<TaskOutcome, AgentError> {
            Err(AgentError::Unrecovered("boom".to_string()))
        }
    }

    fn standard() -> Dispatcher {
        standard_dispatcher(&Config::default()).unwrap()
    }

    #[test]
    fn unmatched_task_type_returns_failure_without_metadata() {
        let outcome = standard().delegate(&TaskRequest::new("database_design", "Schema"));
        assert!(!outcome.success);
        assert!(outcome.result.is_none());
        assert_eq!(
            outcome.message,
            "No agent found to handle task type: database_design"
        );
        assert!(outcome.metadata.is_none());
    }

    #[test]
    fn delegate_stamps_handled_by_and_preserves_agent_metadata() {
        let outcome = standard().delegate(&TaskRequest::new("function", "Add"));
        assert!(outcome.success);
        assert_eq!(
            outcome.metadata_value("handled_by"),
            Some(&json!("CodeGenerationAgent"))
        );
        assert!(outcome.metadata_value("lines_generated").is_some());
    }

    #[test]
    fn each_standard_agent_receives_its_task_family() {
        let dispatcher = standard();
        for (task_type, expected) in [
            ("class", "CodeGenerationAgent"),
            ("unit_test", "UnitTestGenerationAgent"),
            ("lint", "CodeAnalysisAgent"),
        ] {
            let outcome = dispatcher.delegate(&TaskRequest::new(task_type, "d"));
            assert_eq!(
                outcome.metadata_value("handled_by"),
                Some(&json!(expected)),
                "{task_type}"
            );
        }
    }

    #[test]
    fn first_match_wins_in_registration_order() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(Box::new(StubAgent {
            name: "First",
            accepts: "shared",
            marker: "first",
        }));
        dispatcher.register(Box::new(StubAgent {
            name: "Second",
            accepts: "shared",
            marker: "second",
        }));

        let outcome = dispatcher.delegate(&TaskRequest::new("shared", "d"));
        assert_eq!(outcome.metadata_value("handled_by"), Some(&json!("First")));
        assert_eq!(outcome.text(), Some("first"));
    }

    #[test]
    fn reregistering_a_name_overwrites_in_place() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(Box::new(StubAgent {
            name: "Worker",
            accepts: "job",
            marker: "old",
        }));
        dispatcher.register(Box::new(StubAgent {
            name: "Other",
            accepts: "other_job",
            marker: "other",
        }));
        dispatcher.register(Box::new(StubAgent {
            name: "Worker",
            accepts: "job",
            marker: "new",
        }));

        assert_eq!(dispatcher.len(), 2);

        // The replacement serves all subsequent dispatches...
        let outcome = dispatcher.delegate(&TaskRequest::new("job", "d"));
        assert_eq!(outcome.text(), Some("new"));

        // ...and keeps the original registration position.
        let names: Vec<String> = dispatcher
            .list_registered()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["Worker".to_string(), "Other".to_string()]);
    }

    #[test]
    fn unrecovered_failure_becomes_outcome_with_error_metadata() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(Box::new(ExplodingAgent));

        let outcome = dispatcher.delegate(&TaskRequest::new("explode", "d"));
        assert!(!outcome.success);
        assert!(outcome.result.is_none());
        assert_eq!(outcome.message, "ExplodingAgent failed to execute task: boom");
        assert_eq!(
            outcome.metadata_value("handled_by"),
            Some(&json!("ExplodingAgent"))
        );
        assert_eq!(outcome.metadata_value("error"), Some(&json!("boom")));
    }

    #[test]
    fn list_registered_reflects_registration_order() {
        let listing = standard().list_registered();
        assert_eq!(listing.len(), 3);
        assert_eq!(listing[0].0, "CodeGenerationAgent");
        assert_eq!(listing[1].0, "UnitTestGenerationAgent");
        assert_eq!(listing[2].0, "CodeAnalysisAgent");
        assert_eq!(
            listing[0].1,
            vec!["code_generation", "function_creation", "class_creation"]
        );
    }

    #[test]
    fn capabilities_returns_a_defensive_copy() {
        let dispatcher = standard();
        let mut listing = dispatcher.list_registered();
        listing[0].1.clear();

        let fresh = dispatcher.list_registered();
        assert_eq!(fresh[0].1.len(), 3);
    }

    #[test]
    fn delegate_is_idempotent_for_identical_input() {
        let dispatcher = standard();
        let task = TaskRequest::new("test", "Cover the login flow");
        let first = dispatcher.delegate(&task);
        let second = dispatcher.delegate(&task);
        assert_eq!(first, second);
    }

    #[test]
    fn toggles_control_registration() {
        let mut config = Config::default();
        config.agents.testgen = false;
        let dispatcher = standard_dispatcher(&config).unwrap();
        assert_eq!(dispatcher.len(), 2);

        let outcome = dispatcher.delegate(&TaskRequest::new("test", "d"));
        assert!(!outcome.success);
        assert_eq!(outcome.message, "No agent found to handle task type: test");
    }
}
