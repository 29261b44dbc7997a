//! Delete command implementation.

use crate::cli::commands::open_store;
use crate::config::StoreConfig;
use crate::error::Result;

/// Execute the delete command.
///
/// A non-matching id (including a repeated delete) is a defined outcome,
/// reported with a zero exit.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or the statement
/// reports an anomalous row count.
pub fn execute(config: &StoreConfig, id: i64) -> Result<()> {
    let store = open_store(config)?;

    if store.delete(id)? {
        println!("Deleted event #{id}");
    } else {
        println!("No event matched id {id}");
    }
    Ok(())
}
