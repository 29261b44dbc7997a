//! Core data types for `synapse-events`.
//!
//! The `schedule` attribute is a naive local wall-clock time with no timezone
//! component; `prize_money` is an exact decimal, never a float.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Serde format for schedule timestamps (also the stored column format).
pub const SCHEDULE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A persisted event row. `id` is store-assigned and immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// The event's "type" attribute (`event_type` column).
    #[serde(rename = "type")]
    pub kind: String,
    pub schedule: NaiveDateTime,
    pub prize_money: Decimal,
    pub venue_id: i64,
}

/// The six non-id attributes supplied on every write. Partial records are
/// never persisted: create and update both take all six.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub schedule: NaiveDateTime,
    pub prize_money: Decimal,
    pub venue_id: i64,
}

impl Event {
    /// The writable attributes of this event, e.g. to feed back into `update`.
    #[must_use]
    pub fn fields(&self) -> NewEvent {
        NewEvent {
            name: self.name.clone(),
            description: self.description.clone(),
            kind: self.kind.clone(),
            schedule: self.schedule,
            prize_money: self.prize_money,
            venue_id: self.venue_id,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event{{id={}, name='{}', type='{}', schedule={}, prize={}, venue={}}}",
            self.id,
            self.name,
            self.kind,
            self.schedule.format(SCHEDULE_FORMAT),
            self.prize_money,
            self.venue_id
        )
    }
}

/// Parse a schedule string at the form boundary.
///
/// Accepts minute precision (`2025-11-09T14:30`) or full seconds
/// (`2025-11-09T14:30:00`), no timezone suffix.
///
/// # Errors
///
/// Returns `Validation` if the string matches neither format.
pub fn parse_schedule(s: &str) -> crate::error::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, SCHEDULE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|_| {
            crate::error::SynapseError::validation(
                "schedule",
                format!("must be like 2025-11-09T14:30, got '{s}'"),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_schedule_minute_precision() {
        let dt = parse_schedule("2025-11-09T14:30").unwrap();
        assert_eq!(dt.format(SCHEDULE_FORMAT).to_string(), "2025-11-09T14:30:00");
    }

    #[test]
    fn parse_schedule_with_seconds() {
        let dt = parse_schedule("2025-11-09T14:30:45").unwrap();
        assert_eq!(dt.format(SCHEDULE_FORMAT).to_string(), "2025-11-09T14:30:45");
    }

    #[test]
    fn parse_schedule_rejects_garbage() {
        assert!(parse_schedule("next tuesday").is_err());
        assert!(parse_schedule("2025-11-09 14:30+02:00").is_err());
    }
}
