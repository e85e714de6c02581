//! Task file parsing.
//!
//! A task can be described in a file with YAML frontmatter delimited by
//! `---` lines, followed by a markdown body that becomes the task
//! description:
//!
//! ```text
//! ---
//! task_type: function
//! language: python
//! context:
//!   codegen:
//!     name: calculate_factorial
//!     return_type: int
//! ---
//!
//! Create a function to calculate factorial.
//! ```
//!
//! Unknown frontmatter fields are preserved for forward compatibility. The
//! dispatch core never touches the filesystem; this parser exists for the
//! CLI layer only.

use super::{TaskContext, TaskRequest, default_difficulty};
use crate::error::{Result, SwitchboardError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A parsed task file with frontmatter and markdown body.
#[derive(Debug, Clone)]
pub struct TaskFile {
    /// The parsed frontmatter fields.
    pub frontmatter: TaskFrontmatter,
    /// The markdown body; trimmed, it becomes the task description.
    pub body: String,
}

/// Task frontmatter fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskFrontmatter {
    /// Type tag used for routing (e.g. "function", "test", "analysis").
    pub task_type: String,

    /// Per-family task parameters.
    #[serde(default, with = "serde_yaml::with::singleton_map")]
    pub context: TaskContext,

    /// Implementation language hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Difficulty hint (high, medium, low).
    #[serde(default = "default_difficulty")]
    pub difficulty: String,

    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Any fields not explicitly defined above.
    /// Using BTreeMap for deterministic serialization order.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl TaskFile {
    /// Parse a task file from its content string.
    ///
    /// Windows line endings are normalized to LF before parsing.
    pub fn parse(content: &str) -> Result<Self> {
        let normalized = content.replace("\r\n", "\n");

        let Some(rest) = normalized.strip_prefix("---\n") else {
            return Err(SwitchboardError::UserError(
                "task file must start with a '---' frontmatter line".to_string(),
            ));
        };

        let Some((frontmatter_yaml, tail)) = rest.split_once("\n---") else {
            return Err(SwitchboardError::UserError(
                "task file is missing the closing '---' frontmatter line".to_string(),
            ));
        };

        let frontmatter: TaskFrontmatter =
            serde_yaml::from_str(frontmatter_yaml).map_err(|e| {
                SwitchboardError::UserError(format!("failed to parse task frontmatter: {}", e))
            })?;

        // Drop the newline that terminates the closing delimiter line.
        let body = tail.strip_prefix('\n').unwrap_or(tail).to_string();

        Ok(Self { frontmatter, body })
    }

    /// Read and parse a task file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SwitchboardError::UserError(format!(
                "failed to read task file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&content)
    }

    /// Build the immutable request this file describes.
    ///
    /// The trimmed body becomes the description.
    pub fn to_request(&self) -> TaskRequest {
        TaskRequest {
            task_type: self.frontmatter.task_type.clone(),
            description: self.body.trim().to_string(),
            context: self.frontmatter.context.clone(),
            language: self.frontmatter.language.clone(),
            difficulty: self.frontmatter.difficulty.clone(),
        }
    }
}
