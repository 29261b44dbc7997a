//! Output formatting for `synapse-events`.
//!
//! Supports both human-readable text output and machine-parseable JSON
//! (`--json`). JSON output is the serde form of [`crate::model::Event`];
//! text rendering lives in [`text`].

mod text;

pub use text::{format_event_details, format_event_line, format_type_badge};
