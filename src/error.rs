//! Error types for `synapse-events`.
//!
//! Two error classes matter to callers: connection errors (the database could
//! not be reached at all) and persistence errors (a statement ran but
//! something about its outcome is wrong). Absent lookups and zero-row
//! updates/deletes are NOT errors and are reported through `Option`/`bool`.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for synapse-events operations.
#[derive(Error, Debug)]
pub enum SynapseError {
    // === Connection Errors ===
    /// The database could not be opened: absent file, bad permissions, or the
    /// driver refused the handle. Never retried by this layer.
    #[error("Connection failed: {0}")]
    Connection(String),

    // === Persistence Errors ===
    /// A statement executed but the driver reported a fault or a constraint
    /// violation mid-operation.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// The insert was accepted but the store returned no generated key.
    /// Should not occur in normal operation.
    #[error("Insert accepted but no generated key was returned")]
    NoGeneratedKey,

    /// A keyed statement touched a row count other than 0 or 1. The id
    /// uniqueness invariant makes this impossible; surface it, never fold it
    /// into the boolean result.
    #[error("{operation} affected {count} rows for a single event id")]
    RowCountAnomaly {
        operation: &'static str,
        count: usize,
    },

    /// A stored row cannot be materialized into a fully populated Event.
    #[error("Corrupt row for event {id}: {column}: {reason}")]
    CorruptRow {
        id: i64,
        column: &'static str,
        reason: String,
    },

    // === Validation Errors ===
    /// Field validation failed at the form boundary.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Multiple validation errors occurred.
    #[error("Validation errors: {errors:?}")]
    ValidationErrors { errors: Vec<ValidationError> },

    // === Configuration Errors ===
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No event database at the resolved path.
    #[error("Event store not initialized at {0} (run 'sev init')")]
    NotInitialized(PathBuf),

    /// `init` found an existing database and `--force` was not given.
    #[error("Event store already initialized: {path}")]
    AlreadyInitialized { path: PathBuf },

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<rusqlite::Error> for SynapseError {
    fn from(err: rusqlite::Error) -> Self {
        use rusqlite::ErrorCode;

        match &err {
            rusqlite::Error::SqliteFailure(e, _) => match e.code {
                ErrorCode::CannotOpen | ErrorCode::NotADatabase | ErrorCode::PermissionDenied => {
                    Self::Connection(err.to_string())
                }
                _ => Self::Persistence(err.to_string()),
            },
            _ => Self::Persistence(err.to_string()),
        }
    }
}

/// A single field validation error.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl SynapseError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn from_validation_errors(errors: Vec<ValidationError>) -> Self {
        if errors.len() == 1 {
            let err = &errors[0];
            Self::Validation {
                field: err.field.clone(),
                reason: err.message.clone(),
            }
        } else {
            Self::ValidationErrors { errors }
        }
    }
}

/// Result type using `SynapseError`.
pub type Result<T> = std::result::Result<T, SynapseError>;
