//! Command-line interface for `synapse-events`.
//!
//! This module provides the CLI parsing and command routing using clap.
//! The commands are thin callers: they validate input at the boundary,
//! invoke one store operation, and render the result.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::StoreConfig;
use crate::logging;

/// `synapse-events` (sev) - Event records CRUD driver.
#[derive(Parser, Debug)]
#[command(name = "sev")]
#[command(
    author,
    version,
    about = "Event records CRUD over SQLite",
    long_about = None
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Database file (fixed for the life of the process)
    #[arg(long, global = true, env = "SYNAPSE_DB", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the event database
    Init(InitArgs),

    /// Create a new event
    Create(EventFieldArgs),

    /// Show one event by id
    Show(IdArg),

    /// List all events, ascending by id
    List,

    /// Replace all fields of an event by id
    Update(UpdateArgs),

    /// Delete an event by id
    Delete(IdArg),

    /// Show version information
    Version,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Recreate even if a database already exists
    #[arg(long)]
    pub force: bool,
}

/// The six writable event attributes. Create and update both take all of
/// them; partial writes are not a thing.
#[derive(Args, Debug)]
pub struct EventFieldArgs {
    /// Event name (required non-empty)
    #[arg(short, long)]
    pub name: String,

    /// Event description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Event type (required non-empty)
    #[arg(short = 't', long = "type")]
    pub kind: String,

    /// Schedule, naive local time like 2025-11-09T14:30
    #[arg(short, long)]
    pub schedule: String,

    /// Prize money, exact decimal like 500.00
    #[arg(short, long)]
    pub prize: String,

    /// Venue id (external reference)
    #[arg(long)]
    pub venue: i64,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Event id
    pub id: i64,

    #[command(flatten)]
    pub fields: EventFieldArgs,
}

#[derive(Args, Debug)]
pub struct IdArg {
    /// Event id
    pub id: i64,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    // Read once at startup; fixed for the life of the process.
    let config = StoreConfig::resolve(cli.db.clone());

    match cli.command {
        Some(Commands::Init(args)) => commands::init::execute(&config, args.force)?,
        Some(Commands::Create(args)) => commands::create::execute(&config, &args)?,
        Some(Commands::Show(args)) => commands::show::execute(&config, args.id, cli.json)?,
        Some(Commands::List) => commands::list::execute(&config, cli.json)?,
        Some(Commands::Update(args)) => commands::update::execute(&config, &args)?,
        Some(Commands::Delete(args)) => commands::delete::execute(&config, args.id)?,
        Some(Commands::Version) => {
            println!("sev {}", env!("CARGO_PKG_VERSION"));
        }
        None => println!("sev - event records CRUD. Use --help for usage."),
    }

    Ok(())
}
