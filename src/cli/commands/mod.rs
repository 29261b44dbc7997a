//! Command implementations.

pub mod create;
pub mod delete;
pub mod init;
pub mod list;
pub mod show;
pub mod update;

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::cli::EventFieldArgs;
use crate::config::StoreConfig;
use crate::error::{Result, SynapseError};
use crate::model::{NewEvent, parse_schedule};
use crate::storage::{ConnectionProvider, EventStore};
use crate::validation::EventValidator;

/// Open the event store, requiring an initialized database.
pub(crate) fn open_store(config: &StoreConfig) -> Result<EventStore> {
    let provider = ConnectionProvider::new(config.clone());
    if !provider.exists() {
        return Err(SynapseError::NotInitialized(
            config.db_path().to_path_buf(),
        ));
    }
    Ok(EventStore::new(provider))
}

/// Parse and validate the six writable attributes from CLI flags.
pub(crate) fn build_event(args: &EventFieldArgs) -> Result<NewEvent> {
    let schedule = parse_schedule(&args.schedule)?;
    let prize_money = Decimal::from_str(&args.prize).map_err(|_| {
        SynapseError::validation(
            "prize_money",
            format!("must be a decimal amount, got '{}'", args.prize),
        )
    })?;

    let event = NewEvent {
        name: args.name.clone(),
        description: args.description.clone(),
        kind: args.kind.clone(),
        schedule,
        prize_money,
        venue_id: args.venue,
    };
    EventValidator::validate(&event).map_err(SynapseError::from_validation_errors)?;
    Ok(event)
}
