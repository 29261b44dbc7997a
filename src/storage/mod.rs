//! `SQLite` storage layer for `synapse-events`.
//!
//! Two pieces, no shared state:
//!
//! - [`connection`] - per-call connection acquisition against the configured
//!   database (one fresh connection per operation, released by scope)
//! - [`events`] - CRUD over the events table (insert with key read-back,
//!   keyed lookup, ordered listing, full-row update, delete)

pub mod connection;
pub mod events;

pub use connection::ConnectionProvider;
pub use events::{EVENTS_TABLE_SCHEMA, EventStore, init_events_table};
