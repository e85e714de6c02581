//! Delegation event logging.
//!
//! Append-only NDJSON records of what the CLI layer asked the dispatcher to
//! do and how it went. One JSON object per line:
//!
//! - `ts`: RFC3339 timestamp
//! - `action`: registered / delegated / no_agent / agent_failed
//! - `actor`: the invoking user (`user@HOST`)
//! - `task_type`: the routed type tag, where applicable
//! - `details`: freeform object with action-specific details
//!
//! The dispatch core never writes events; only the CLI commands append
//! here, and only when an events path is configured.

use crate::error::{Result, SwitchboardError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Agents registered with a dispatcher.
    Registered,
    /// A task was delegated and an agent returned an outcome.
    Delegated,
    /// No registered agent was interested in the task.
    NoAgent,
    /// The selected agent failed without recovering.
    AgentFailed,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Registered => write!(f, "registered"),
            EventAction::Delegated => write!(f, "delegated"),
            EventAction::NoAgent => write!(f, "no_agent"),
            EventAction::AgentFailed => write!(f, "agent_failed"),
        }
    }
}

/// An event record for the delegation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// The actor who performed the action (e.g. `user@HOST`).
    pub actor: String,

    /// The task type tag, for dispatch events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event stamped with the current time and actor.
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: actor_string(),
            task_type: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the task type for this event.
    pub fn with_task_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = Some(task_type.into());
        self
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }
}

/// Get the actor string for event metadata.
fn actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the log at `path` as a single JSON line.
///
/// The file and its parent directory are created if missing.
pub fn append_event(path: &Path, event: &Event) -> Result<()> {
    let json_line = serde_json::to_string(event).map_err(|e| {
        SwitchboardError::EventLogError(format!("failed to serialize event: {}", e))
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                SwitchboardError::EventLogError(format!(
                    "failed to create events directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            SwitchboardError::EventLogError(format!(
                "failed to open events file '{}': {}",
                path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        SwitchboardError::EventLogError(format!(
            "failed to write event to '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}
