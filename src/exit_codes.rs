//! Exit code constants for the switchboard CLI.
//!
//! Unsupported task types are a normal, zero-exit outcome: `delegate`
//! reports them as a failed `TaskOutcome`, not a process failure. Non-zero
//! codes are reserved for startup and I/O errors outside the dispatch core.

/// Successful execution (including "no agent found" outcomes).
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an unreadable/invalid task file.
pub const USER_ERROR: i32 = 1;

/// Configuration failure: switchboard.yaml is invalid.
pub const CONFIG_FAILURE: i32 = 2;

/// Event log failure: the events file could not be written.
pub const EVENT_LOG_FAILURE: i32 = 3;
