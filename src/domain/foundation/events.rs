//! Event infrastructure for domain event publishing and handling.
//!
//! This module provides the core types and traits for change notification:
//! - `EventId` - Unique identifier for events
//! - `EventEnvelope` - Transport wrapper for domain events
//! - `DomainEvent` - Trait that all domain events implement
//! - `domain_event!` - Macro to simplify DomainEvent implementations

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

use super::Timestamp;

/// Trait that all domain events must implement.
///
/// Use the `domain_event!` macro to implement this trait with minimal
/// boilerplate. Types that also implement `Serialize` get `to_envelope()`
/// through [`SerializableDomainEvent`].
pub trait DomainEvent: Send + Sync {
    /// Returns the event type string (e.g., "poll.created.v1").
    fn event_type(&self) -> &'static str;

    /// Returns the schema version number.
    /// MUST match the version suffix in event_type.
    fn schema_version(&self) -> u32;

    /// Returns the ID of the aggregate that emitted this event.
    fn aggregate_id(&self) -> String;

    /// Returns the type of aggregate (e.g., "Poll").
    fn aggregate_type(&self) -> &'static str;

    /// Returns when the event occurred.
    fn occurred_at(&self) -> Timestamp;

    /// Returns the unique ID for this event instance.
    fn event_id(&self) -> EventId;
}

/// Extension trait that provides `to_envelope()` for serializable domain events.
pub trait SerializableDomainEvent: DomainEvent + Serialize {
    /// Converts this domain event into an `EventEnvelope`.
    fn to_envelope(&self) -> EventEnvelope {
        EventEnvelope::from_event(self)
    }
}

impl<T: DomainEvent + Serialize> SerializableDomainEvent for T {}

/// Macro to implement DomainEvent trait with minimal boilerplate.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct PollRemoved {
///     pub event_id: EventId,
///     pub poll_id: PollId,
///     pub removed_at: Timestamp,
/// }
///
/// domain_event!(
///     PollRemoved,
///     event_type = "poll.removed.v1",
///     schema_version = 1,
///     aggregate_id = poll_id,
///     aggregate_type = "Poll",
///     occurred_at = removed_at,
///     event_id = event_id
/// );
/// ```
#[macro_export]
macro_rules! domain_event {
    (
        $event_name:ident,
        event_type = $event_type:expr,
        schema_version = $schema_version:expr,
        aggregate_id = $agg_id_field:ident,
        aggregate_type = $agg_type:expr,
        occurred_at = $occurred_field:ident,
        event_id = $event_id_field:ident
    ) => {
        impl $crate::domain::foundation::DomainEvent for $event_name {
            fn event_type(&self) -> &'static str {
                $event_type
            }

            fn schema_version(&self) -> u32 {
                $schema_version
            }

            fn aggregate_id(&self) -> String {
                self.$agg_id_field.to_string()
            }

            fn aggregate_type(&self) -> &'static str {
                $agg_type
            }

            fn occurred_at(&self) -> $crate::domain::foundation::Timestamp {
                self.$occurred_field
            }

            fn event_id(&self) -> $crate::domain::foundation::EventId {
                self.$event_id_field.clone()
            }
        }
    };
}

pub use crate::domain_event;

/// Unique identifier for events.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates a new random EventId using UUID v4.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transport envelope for domain events.
///
/// Wraps event-specific data with what observers need for routing
/// (`event_type`), correlation (`aggregate_id`) and ordering (`occurred_at`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique ID for this event instance.
    pub event_id: EventId,

    /// Event type for routing (e.g., "poll.vote_cast.v1").
    pub event_type: String,

    /// Schema version number (extracted from event_type).
    pub schema_version: u32,

    /// ID of the aggregate that emitted this event.
    pub aggregate_id: String,

    /// Type of aggregate (e.g., "Poll").
    pub aggregate_type: String,

    /// When the event occurred.
    pub occurred_at: Timestamp,

    /// Event-specific payload as JSON.
    pub payload: JsonValue,
}

impl EventEnvelope {
    /// Extracts version number from event_type string.
    ///
    /// `"poll.created.v2"` yields 2; a missing suffix defaults to 1.
    pub(crate) fn extract_version(event_type: &str) -> u32 {
        event_type
            .rsplit_once(".v")
            .and_then(|(_, version_str)| version_str.parse::<u32>().ok())
            .unwrap_or(1)
    }

    /// Creates an envelope from a domain event with automatic serialization.
    pub fn from_event<T>(event: &T) -> Self
    where
        T: DomainEvent + Serialize + ?Sized,
    {
        let event_type = event.event_type().to_string();
        let schema_version = Self::extract_version(&event_type);

        Self {
            event_id: event.event_id(),
            event_type,
            schema_version,
            aggregate_id: event.aggregate_id(),
            aggregate_type: event.aggregate_type().to_string(),
            occurred_at: event.occurred_at(),
            payload: serde_json::to_value(event)
                .expect("Event serialization should never fail for well-formed events"),
        }
    }

    /// Deserialize payload to a specific event type.
    pub fn payload_as<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct SampleHappened {
        event_id: EventId,
        sample_id: String,
        note: String,
        happened_at: Timestamp,
    }

    domain_event!(
        SampleHappened,
        event_type = "sample.happened.v2",
        schema_version = 2,
        aggregate_id = sample_id,
        aggregate_type = "Sample",
        occurred_at = happened_at,
        event_id = event_id
    );

    fn sample() -> SampleHappened {
        SampleHappened {
            event_id: EventId("evt-1".to_string()),
            sample_id: "agg-9".to_string(),
            note: "hello".to_string(),
            happened_at: Timestamp::now(),
        }
    }

    #[test]
    fn event_id_generates_unique_values() {
        assert_ne!(EventId::new(), EventId::new());
    }

    #[test]
    fn event_id_serializes_as_bare_string() {
        let id = EventId("custom-id".to_string());
        assert_eq!(id.to_string(), "custom-id");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"custom-id\"");
    }

    #[test]
    fn extract_version_reads_suffix() {
        assert_eq!(EventEnvelope::extract_version("poll.created.v2"), 2);
        assert_eq!(EventEnvelope::extract_version("poll.created.v10"), 10);
        assert_eq!(EventEnvelope::extract_version("legacy.event"), 1);
    }

    #[test]
    fn macro_implements_domain_event() {
        let event = sample();
        assert_eq!(event.event_type(), "sample.happened.v2");
        assert_eq!(event.schema_version(), 2);
        assert_eq!(event.aggregate_id(), "agg-9");
        assert_eq!(event.aggregate_type(), "Sample");
        assert_eq!(event.event_id().to_string(), "evt-1");
    }

    #[test]
    fn to_envelope_copies_identity_and_payload() {
        let event = sample();
        let envelope = event.to_envelope();

        assert_eq!(envelope.event_id, event.event_id);
        assert_eq!(envelope.event_type, "sample.happened.v2");
        assert_eq!(envelope.schema_version, 2);
        assert_eq!(envelope.aggregate_id, "agg-9");
        assert_eq!(envelope.occurred_at, event.happened_at);
        assert_eq!(envelope.payload["note"], "hello");
    }

    #[test]
    fn payload_as_recovers_event() {
        let envelope = sample().to_envelope();
        let back: SampleHappened = envelope.payload_as().unwrap();
        assert_eq!(back.note, "hello");
        assert_eq!(back.sample_id, "agg-9");
    }
}
