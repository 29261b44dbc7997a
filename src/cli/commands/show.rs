//! Show command implementation.

use crate::cli::commands::open_store;
use crate::config::StoreConfig;
use crate::error::Result;
use crate::format::format_event_details;

/// Execute the show command.
///
/// An absent id is a defined outcome, reported on stdout with a zero exit.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or the row cannot be
/// materialized.
pub fn execute(config: &StoreConfig, id: i64, json: bool) -> Result<()> {
    let store = open_store(config)?;

    match store.find_by_id(id)? {
        Some(event) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                println!("{}", format_event_details(&event));
            }
        }
        None => println!("No event found for id {id}"),
    }
    Ok(())
}
