//! Text formatting functions for `synapse-events`.
//!
//! Provides plain text (non-ANSI) formatting for terminal output:
//! - Type badges ([Workshop], [Conference], etc.)
//! - Single-line event summaries for `list`
//! - Detail blocks for `show`

use crate::model::{Event, SCHEDULE_FORMAT};

/// Format the event type as a bracketed badge.
#[must_use]
pub fn format_type_badge(kind: &str) -> String {
    format!("[{kind}]")
}

/// Format a single-line event summary.
///
/// Format: `#{id} [{type}] {name} @ {schedule} (prize {amount}, venue {id})`
#[must_use]
pub fn format_event_line(event: &Event) -> String {
    format!(
        "#{} {} {} @ {} (prize {}, venue {})",
        event.id,
        format_type_badge(&event.kind),
        event.name,
        event.schedule.format(SCHEDULE_FORMAT),
        event.prize_money,
        event.venue_id,
    )
}

/// Format a multi-line detail block for a single event.
#[must_use]
pub fn format_event_details(event: &Event) -> String {
    let mut out = String::new();
    out.push_str(&format!("Event #{}\n", event.id));
    out.push_str(&format!("  Name:     {}\n", event.name));
    out.push_str(&format!(
        "  Desc:     {}\n",
        event.description.as_deref().unwrap_or("-")
    ));
    out.push_str(&format!("  Type:     {}\n", event.kind));
    out.push_str(&format!(
        "  Schedule: {}\n",
        event.schedule.format(SCHEDULE_FORMAT)
    ));
    out.push_str(&format!("  Prize:    {}\n", event.prize_money));
    out.push_str(&format!("  Venue:    {}", event.venue_id));
    out
}
