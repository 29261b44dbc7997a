//! Init command implementation.

use crate::config::StoreConfig;
use crate::error::{Result, SynapseError};
use crate::storage::{ConnectionProvider, init_events_table};

/// Execute the init command.
///
/// Creates the database file (and parent directory) and applies the events
/// table schema.
///
/// # Errors
///
/// Returns `AlreadyInitialized` if a database exists and `force` is not set,
/// or an error if the database cannot be created.
pub fn execute(config: &StoreConfig, force: bool) -> Result<()> {
    let provider = ConnectionProvider::new(config.clone());

    if provider.exists() && !force {
        return Err(SynapseError::AlreadyInitialized {
            path: config.db_path().to_path_buf(),
        });
    }

    let con = provider.open_or_create()?;
    init_events_table(&con)?;
    drop(con);

    println!("Initialized event store at {}", config.db_path().display());
    Ok(())
}
