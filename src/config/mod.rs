//! Configuration for `synapse-events`.
//!
//! The database location is process-wide, init-once configuration: resolved a
//! single time at startup and never re-read. Rotating it requires a restart.
//! Precedence: `--db` flag > `SYNAPSE_DB` environment variable > default.

use std::path::{Path, PathBuf};

/// Default database location relative to the working directory.
pub const DEFAULT_DB_PATH: &str = ".synapse/events.db";

/// Fixed store configuration passed to the connection provider's constructor.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    db_path: PathBuf,
}

impl StoreConfig {
    /// Resolve the configuration once at startup.
    ///
    /// `flag` is the `--db` CLI override (clap also maps `SYNAPSE_DB` into it
    /// via the `env` feature, so precedence is handled before this call).
    #[must_use]
    pub fn resolve(flag: Option<PathBuf>) -> Self {
        Self {
            db_path: flag.unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
        }
    }

    /// Build a configuration pointing at an explicit database file.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: path.into(),
        }
    }

    /// Path of the database file.
    #[must_use]
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_flag() {
        let config = StoreConfig::resolve(Some(PathBuf::from("/tmp/custom.db")));
        assert_eq!(config.db_path(), Path::new("/tmp/custom.db"));
    }

    #[test]
    fn resolve_falls_back_to_default() {
        let config = StoreConfig::resolve(None);
        assert_eq!(config.db_path(), Path::new(DEFAULT_DB_PATH));
    }
}
