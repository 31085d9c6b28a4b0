use std::fmt;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Domain Event Capability
// ============================================================================
//
// An event is an immutable fact about the domain. The dispatcher routes it by
// an explicit, stable identifier supplied by the event itself, never by the
// Rust type name.
//
// ============================================================================

/// Something that happened in the domain and can be routed to handlers.
pub trait DomainEvent: fmt::Debug + Send + Sync {
    /// Identifier handlers are registered against, e.g. `"CustomerCreatedEvent"`.
    fn event_type(&self) -> &'static str;

    /// Moment the triggering state change happened.
    fn data_time_occurred(&self) -> DateTime<Utc>;
}

// ============================================================================
// Event Serialization Helpers
// ============================================================================

/// Render an event payload as JSON (used for structured log lines).
pub fn serialize_event<E: Serialize + ?Sized>(event: &E) -> Result<String> {
    Ok(serde_json::to_string(event)?)
}
