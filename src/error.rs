//! Error types for the switchboard CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error
//! messages. Note that a task the dispatcher cannot route is *not* an error:
//! it is reported as a failed `TaskOutcome` and the process still exits zero.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for switchboard operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum SwitchboardError {
    /// User provided invalid arguments or an unreadable/invalid task file.
    #[error("{0}")]
    UserError(String),

    /// Configuration file exists but could not be parsed or is invalid.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The events log could not be serialized or written.
    #[error("Event log failure: {0}")]
    EventLogError(String),
}

impl SwitchboardError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SwitchboardError::UserError(_) => exit_codes::USER_ERROR,
            SwitchboardError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            SwitchboardError::EventLogError(_) => exit_codes::EVENT_LOG_FAILURE,
        }
    }
}

/// Result type alias for switchboard operations.
pub type Result<T> = std::result::Result<T, SwitchboardError>;
