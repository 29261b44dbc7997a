//! List command implementation.

use crate::cli::commands::open_store;
use crate::config::StoreConfig;
use crate::error::Result;
use crate::format::format_event_line;

/// Execute the list command.
///
/// Prints every event ascending by id; an empty store is a defined outcome.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or a row cannot be
/// materialized.
pub fn execute(config: &StoreConfig, json: bool) -> Result<()> {
    let store = open_store(config)?;
    let events = store.find_all()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    if events.is_empty() {
        println!("No events.");
        return Ok(());
    }

    for event in &events {
        println!("{}", format_event_line(event));
    }
    println!("{} event(s)", events.len());
    Ok(())
}
