//! Update command implementation.

use crate::cli::UpdateArgs;
use crate::cli::commands::{build_event, open_store};
use crate::config::StoreConfig;
use crate::error::Result;

/// Execute the update command.
///
/// Full replacement: all six attributes are required, keyed by id. A
/// non-matching id is a defined outcome, reported with a zero exit.
///
/// # Errors
///
/// Returns an error if validation fails, the database cannot be opened, or
/// the statement reports an anomalous row count.
pub fn execute(config: &StoreConfig, args: &UpdateArgs) -> Result<()> {
    let event = build_event(&args.fields)?;
    let store = open_store(config)?;

    if store.update(args.id, &event)? {
        println!("Updated event #{}", args.id);
    } else {
        println!("No event matched id {}", args.id);
    }
    Ok(())
}
