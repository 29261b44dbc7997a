//! Logging setup for `synapse-events`.
//!
//! Diagnostics go to stderr so stdout stays clean for command output.
//! `RUST_LOG` overrides the verbosity flags when set.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Verbosity: `--quiet` = errors only, default = warn, `-v` = info,
/// `-vv` = debug, `-vvv` = trace.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: u8, quiet: bool) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("synapse_events={level},sev={level}")));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}
