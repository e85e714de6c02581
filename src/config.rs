//! Configuration model for switchboard.
//!
//! Represents the optional `switchboard.yaml` file. It supports
//! forward-compatible YAML parsing (unknown fields are preserved), sensible
//! defaults for every field, and validation of the analysis marker patterns
//! at agent construction time.
//!
//! # File Format
//!
//! ```yaml
//! agents:
//!   codegen: true
//!   testgen: true
//!   analysis: true
//!
//! analysis:
//!   todo_pattern: "TODO"
//!   placeholder_pattern: "pass"
//!   long_function_threshold: 50
//!
//! events_log: .switchboard/events.ndjson
//! ```

use crate::error::{Result, SwitchboardError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default configuration file name, resolved relative to the working
/// directory when no explicit path is given.
pub const CONFIG_FILE: &str = "switchboard.yaml";

/// Top-level configuration, loaded from `switchboard.yaml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which agents to register at startup.
    pub agents: AgentToggles,

    /// Marker patterns and thresholds for the analysis agent.
    pub analysis: AnalysisConfig,

    /// Append delegation events to this NDJSON file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_log: Option<PathBuf>,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Per-agent registration toggles. Everything is on by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentToggles {
    /// Register the code generation agent.
    pub codegen: bool,
    /// Register the unit test generation agent.
    pub testgen: bool,
    /// Register the analysis agent.
    pub analysis: bool,
}

impl Default for AgentToggles {
    fn default() -> Self {
        Self {
            codegen: true,
            testgen: true,
            analysis: true,
        }
    }
}

/// Settings for the analysis agent's canned checks.
///
/// The patterns are regular expressions; the defaults are plain literals,
/// which gives substring matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Pattern flagging incomplete implementations.
    pub todo_pattern: String,

    /// Pattern flagging placeholder statements.
    pub placeholder_pattern: String,

    /// Line count above which a breakdown suggestion is emitted.
    pub long_function_threshold: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            todo_pattern: "TODO".to_string(),
            placeholder_pattern: "pass".to_string(),
            long_function_threshold: 50,
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    /// Returns `Err` if the file exists but cannot be parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            SwitchboardError::ConfigError(format!(
                "failed to read '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = serde_yaml::from_str(&content).map_err(|e| {
            SwitchboardError::ConfigError(format!(
                "failed to parse '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(Some(config))
    }

    /// Resolve the effective configuration for a command.
    ///
    /// An explicitly given path must exist; otherwise `switchboard.yaml` in
    /// the working directory is used if present, and defaults if not.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path)?.ok_or_else(|| {
                SwitchboardError::ConfigError(format!(
                    "config file '{}' not found",
                    path.display()
                ))
            }),
            None => Ok(Self::load(Path::new(CONFIG_FILE))?.unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_registers_all_agents() {
        let config = Config::default();
        assert!(config.agents.codegen);
        assert!(config.agents.testgen);
        assert!(config.agents.analysis);
        assert_eq!(config.analysis.todo_pattern, "TODO");
        assert_eq!(config.analysis.placeholder_pattern, "pass");
        assert_eq!(config.analysis.long_function_threshold, 50);
        assert!(config.events_log.is_none());
    }

    #[test]
    fn load_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        let loaded = Config::load(dir.path().join("absent.yaml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_parses_partial_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("switchboard.yaml");
        std::fs::write(
            &path,
            "agents:\n  analysis: false\nanalysis:\n  long_function_threshold: 10\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap().unwrap();
        assert!(config.agents.codegen);
        assert!(!config.agents.analysis);
        assert_eq!(config.analysis.long_function_threshold, 10);
        // Untouched sections keep their defaults.
        assert_eq!(config.analysis.todo_pattern, "TODO");
    }

    #[test]
    fn load_preserves_unknown_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("switchboard.yaml");
        std::fs::write(&path, "team: platform\n").unwrap();

        let config = Config::load(&path).unwrap().unwrap();
        assert_eq!(
            config.extra.get("team"),
            Some(&serde_yaml::Value::String("platform".to_string()))
        );
    }

    #[test]
    fn load_rejects_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("switchboard.yaml");
        std::fs::write(&path, "agents: [not, a, mapping\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn resolve_requires_explicit_path_to_exist() {
        let dir = TempDir::new().unwrap();
        let err = Config::resolve(Some(&dir.path().join("absent.yaml"))).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
