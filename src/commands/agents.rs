//! Implementation of the `switchboard agents` command.
//!
//! Prints each registered agent with its capability labels, in
//! registration order.

use crate::cli::AgentsArgs;
use crate::config::Config;
use crate::dispatch::standard_dispatcher;
use crate::error::{Result, SwitchboardError};
use serde_json::json;

/// Execute the `switchboard agents` command.
pub fn cmd_agents(args: AgentsArgs) -> Result<()> {
    let config = Config::resolve(args.config.as_deref())?;
    let dispatcher = standard_dispatcher(&config)?;
    let listing = dispatcher.list_registered();

    if args.json {
        let value: Vec<_> = listing
            .iter()
            .map(|(name, capabilities)| json!({"name": name, "capabilities": capabilities}))
            .collect();
        let rendered = serde_json::to_string_pretty(&value).map_err(|e| {
            SwitchboardError::UserError(format!("failed to serialize agent listing: {}", e))
        })?;
        println!("{}", rendered);
        return Ok(());
    }

    if listing.is_empty() {
        println!("No agents registered");
        return Ok(());
    }

    for (name, capabilities) in listing {
        println!("{}: {}", name, capabilities.join(", "));
    }
    Ok(())
}
