//! `synapse-events` (sev) - Event records CRUD driver
//!
//! CRUD over a single events table in `SQLite`: one connection per
//! operation, no daemon, no background processes.

use synapse_events::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
