//! Switchboard: Minimal capability-based task dispatcher for specialized
//! coding agents.
//!
//! A [`dispatch::Dispatcher`] owns a registry of named agents, each of which
//! advertises a set of capabilities and a fixed set of task type tags it is
//! interested in. An incoming [`task::TaskRequest`] is routed to the first
//! registered agent whose interest predicate matches, and that agent renders
//! a text or report artifact as a [`task::TaskOutcome`]:
//!
//! - Task descriptors are immutable values; outcomes carry success, payload,
//!   message, and provenance metadata stamped by the dispatcher
//! - Selection is first-match in registration order, with no scoring
//! - All failure modes are values; no error channel is visible to callers
//!   of `delegate`

pub mod agent;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod task;
