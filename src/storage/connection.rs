//! Per-call connection acquisition.
//!
//! Every store operation gets a brand-new connection from [`ConnectionProvider::open`]
//! and drops it before returning. No pooling, no retry, no shared handle:
//! release on every exit path falls out of ownership.

use rusqlite::{Connection, OpenFlags};
use std::fs;

use crate::config::StoreConfig;
use crate::error::{Result, SynapseError};

/// Opens connections against the configured database, one per call.
#[derive(Debug, Clone)]
pub struct ConnectionProvider {
    config: StoreConfig,
}

impl ConnectionProvider {
    /// Build a provider over fixed startup configuration.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// The configuration this provider was built with.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Open a new connection. Single attempt, no backoff.
    ///
    /// Does not create the database: opening a path with no database behind it
    /// is a connection error, the same class as an unreachable server.
    ///
    /// # Errors
    ///
    /// Returns `Connection` if the database is absent or the driver refuses
    /// the handle.
    pub fn open(&self) -> Result<Connection> {
        let path = self.config.db_path();
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let con = Connection::open_with_flags(path, flags)
            .map_err(|e| SynapseError::Connection(format!("{}: {e}", path.display())))?;
        tracing::debug!(db = %path.display(), "opened connection");
        Ok(con)
    }

    /// Open the database, creating file and parent directory if needed.
    /// Used only by the `init` workflow; normal operations go through
    /// [`open`](Self::open).
    ///
    /// # Errors
    ///
    /// Returns `Io` if the parent directory cannot be created, or
    /// `Connection` if the driver refuses the handle.
    pub fn open_or_create(&self) -> Result<Connection> {
        let path = self.config.db_path();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let con = Connection::open(path)
            .map_err(|e| SynapseError::Connection(format!("{}: {e}", path.display())))?;
        tracing::debug!(db = %path.display(), "opened connection (create allowed)");
        Ok(con)
    }

    /// Whether a database file exists at the configured path.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.config.db_path().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SynapseError;

    #[test]
    fn open_missing_database_is_connection_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::from_path(dir.path().join("absent.db"));
        let provider = ConnectionProvider::new(config);

        let err = provider.open().unwrap_err();
        assert!(matches!(err, SynapseError::Connection(_)), "got {err:?}");
    }

    #[test]
    fn open_or_create_then_open_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::from_path(dir.path().join("nested").join("events.db"));
        let provider = ConnectionProvider::new(config);

        drop(provider.open_or_create().unwrap());
        assert!(provider.exists());
        drop(provider.open().unwrap());
    }
}
