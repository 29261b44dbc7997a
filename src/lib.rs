//! `synapse-events` - Event records CRUD library
//!
//! This crate provides the core functionality for the `sev` CLI tool:
//! a single-entity persistence layer over `SQLite` with a thin
//! command-line driver.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface using clap
//! - [`model`] - Data types (Event, NewEvent)
//! - [`storage`] - `SQLite` persistence layer (connection provider + event store)
//! - [`config`] - Fixed startup configuration
//! - [`error`] - Error types and handling
//! - [`format`] - Output formatting (text, JSON)
//! - [`validation`] - Form-boundary field validation
//! - [`logging`] - Tracing subscriber setup

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod storage;
pub mod validation;

pub use error::{Result, SynapseError};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
