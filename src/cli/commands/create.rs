//! Create command implementation.

use crate::cli::EventFieldArgs;
use crate::cli::commands::{build_event, open_store};
use crate::config::StoreConfig;
use crate::error::Result;

/// Execute the create command.
///
/// # Errors
///
/// Returns an error if validation fails, the database cannot be opened, or
/// the insert is rejected.
pub fn execute(config: &StoreConfig, args: &EventFieldArgs) -> Result<()> {
    let event = build_event(args)?;
    let store = open_store(config)?;

    let id = store.create(&event)?;
    println!("Created event #{id}");
    Ok(())
}
