//! Event row storage: the CRUD layer over the `events` table.
//!
//! Each operation acquires its own connection from the provider, executes
//! exactly one statement, materializes the result, and releases the
//! connection by scope. Row → record conversion is an explicit step with its
//! own error branch so a corrupt row can never surface as a partially
//! populated event or masquerade as "not found".

use std::str::FromStr;

use rusqlite::{Connection, OptionalExtension, Row, params};
use rust_decimal::Decimal;

use crate::error::{Result, SynapseError};
use crate::model::{Event, NewEvent, SCHEDULE_FORMAT};
use crate::storage::connection::ConnectionProvider;

/// Schema for the events table.
pub const EVENTS_TABLE_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS events (
    event_id          INTEGER PRIMARY KEY AUTOINCREMENT,
    event_name        TEXT NOT NULL,
    event_description TEXT,
    event_type        TEXT NOT NULL,
    schedule          TEXT NOT NULL,
    prize_money       TEXT NOT NULL,
    venue_id          INTEGER NOT NULL
)";

/// Create the events table if it does not exist.
///
/// # Errors
///
/// Returns `Persistence` if the schema statement fails.
pub fn init_events_table(con: &Connection) -> Result<()> {
    con.execute(EVENTS_TABLE_SCHEMA, [])?;
    Ok(())
}

/// Raw column values as stored, before conversion into an [`Event`].
/// schedule and prize_money come back as `Option` so a NULL (schema drift,
/// hand-edited database) hits the corruption branch instead of a driver panic.
type RawRow = (
    i64,
    String,
    Option<String>,
    String,
    Option<String>,
    Option<String>,
    i64,
);

fn raw_row(row: &Row<'_>) -> rusqlite::Result<RawRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
    ))
}

/// Convert raw columns into a fully populated event.
///
/// # Errors
///
/// Returns `CorruptRow` if schedule or prize_money is NULL or unparseable.
fn event_from_row(raw: RawRow) -> Result<Event> {
    let (id, name, description, kind, schedule, prize_money, venue_id) = raw;

    let corrupt = |column: &'static str, reason: String| SynapseError::CorruptRow {
        id,
        column,
        reason,
    };

    let schedule = schedule.ok_or_else(|| corrupt("schedule", "unexpected NULL".into()))?;
    let schedule = chrono::NaiveDateTime::parse_from_str(&schedule, SCHEDULE_FORMAT)
        .map_err(|e| corrupt("schedule", format!("'{schedule}': {e}")))?;

    let prize_money = prize_money.ok_or_else(|| corrupt("prize_money", "unexpected NULL".into()))?;
    let prize_money = Decimal::from_str(&prize_money)
        .map_err(|e| corrupt("prize_money", format!("'{prize_money}': {e}")))?;

    Ok(Event {
        id,
        name,
        description,
        kind,
        schedule,
        prize_money,
        venue_id,
    })
}

/// CRUD access to the events table. Holds no connection; every call opens and
/// releases its own through the provider.
#[derive(Debug, Clone)]
pub struct EventStore {
    provider: ConnectionProvider,
}

impl EventStore {
    #[must_use]
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }

    /// Insert one event and return the store-generated id.
    ///
    /// # Errors
    ///
    /// Returns `Connection` if no connection can be obtained, `Persistence`
    /// on constraint violation, and `NoGeneratedKey` if the statement is
    /// accepted but yields no key (anomalous).
    pub fn create(&self, event: &NewEvent) -> Result<i64> {
        let con = self.provider.open()?;
        let mut stmt = con.prepare(
            "INSERT INTO events (event_name, event_description, event_type, schedule, prize_money, venue_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING event_id",
        )?;
        let id: Option<i64> = stmt
            .query_row(
                params![
                    event.name,
                    event.description,
                    event.kind,
                    event.schedule.format(SCHEDULE_FORMAT).to_string(),
                    event.prize_money.to_string(),
                    event.venue_id,
                ],
                |row| row.get(0),
            )
            .optional()?;

        let id = id.ok_or(SynapseError::NoGeneratedKey)?;
        tracing::debug!(id, name = %event.name, "created event");
        Ok(id)
    }

    /// Look up one event by exact id. `None` is a defined outcome, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `Connection`/`Persistence` on driver failure, `CorruptRow` if
    /// the row cannot be fully materialized.
    pub fn find_by_id(&self, id: i64) -> Result<Option<Event>> {
        let con = self.provider.open()?;
        let mut stmt = con.prepare(
            "SELECT event_id, event_name, event_description, event_type, schedule, prize_money, venue_id
             FROM events WHERE event_id = ?1",
        )?;
        let raw = stmt.query_row(params![id], raw_row).optional()?;
        raw.map(event_from_row).transpose()
    }

    /// Every event, ascending by id, fully materialized. Empty store yields
    /// an empty vec.
    ///
    /// # Errors
    ///
    /// Returns `Connection`/`Persistence` on driver failure, `CorruptRow` if
    /// any row cannot be fully materialized.
    pub fn find_all(&self) -> Result<Vec<Event>> {
        let con = self.provider.open()?;
        let mut stmt = con.prepare(
            "SELECT event_id, event_name, event_description, event_type, schedule, prize_money, venue_id
             FROM events ORDER BY event_id",
        )?;
        let rows = stmt.query_map([], raw_row)?;

        let mut events = Vec::new();
        for raw in rows {
            events.push(event_from_row(raw?)?);
        }
        Ok(events)
    }

    /// Replace all six attributes of the row matching `id`.
    ///
    /// Returns `true` iff exactly one row changed, `false` iff none matched.
    ///
    /// # Errors
    ///
    /// Returns `RowCountAnomaly` for any other count (the unique-id invariant
    /// makes it impossible; never fold it into the boolean).
    pub fn update(&self, id: i64, event: &NewEvent) -> Result<bool> {
        let con = self.provider.open()?;
        let count = con.execute(
            "UPDATE events
             SET event_name = ?1, event_description = ?2, event_type = ?3,
                 schedule = ?4, prize_money = ?5, venue_id = ?6
             WHERE event_id = ?7",
            params![
                event.name,
                event.description,
                event.kind,
                event.schedule.format(SCHEDULE_FORMAT).to_string(),
                event.prize_money.to_string(),
                event.venue_id,
                id,
            ],
        )?;
        match count {
            0 => Ok(false),
            1 => {
                tracing::debug!(id, "updated event");
                Ok(true)
            }
            count => Err(SynapseError::RowCountAnomaly {
                operation: "update",
                count,
            }),
        }
    }

    /// Remove the row matching `id`. Same contract as [`update`](Self::update):
    /// `true` for exactly one row, `false` for none, anomaly otherwise.
    /// Deleting an already-deleted id returns `false`, not an error.
    ///
    /// # Errors
    ///
    /// Returns `Connection`/`Persistence` on driver failure, `RowCountAnomaly`
    /// for a count other than 0 or 1.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let con = self.provider.open()?;
        let count = con.execute("DELETE FROM events WHERE event_id = ?1", params![id])?;
        match count {
            0 => Ok(false),
            1 => {
                tracing::debug!(id, "deleted event");
                Ok(true)
            }
            count => Err(SynapseError::RowCountAnomaly {
                operation: "delete",
                count,
            }),
        }
    }
}
