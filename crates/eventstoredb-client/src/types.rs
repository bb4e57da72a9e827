//! Request and response types for the EventStoreDB HTTP API.
//!
//! These types mirror the server's JSON envelopes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Position of an event within its stream, assigned by the store on write.
pub type EventNumber = u64;

// ─────────────────────────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────────────────────────

/// An event as written to and read from a stream.
///
/// `D` is the payload and `M` the metadata. Both default to
/// [`serde_json::Value`] for events of arbitrary shape; use concrete types
/// when the shape is known.
///
/// Events compare equal when their identifiers match, regardless of payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event<D = serde_json::Value, M = serde_json::Value> {
    event_id: String,
    event_type: String,
    data: D,
    #[serde(default)]
    metadata: M,
}

impl<D, M> Event<D, M> {
    /// Create an event with a freshly generated identifier.
    pub fn new(event_type: impl Into<String>, data: D, metadata: M) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), event_type, data, metadata)
    }

    /// Create an event with a caller-chosen identifier.
    pub fn with_id(
        event_id: impl Into<String>,
        event_type: impl Into<String>,
        data: D,
        metadata: M,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            event_type: event_type.into(),
            data,
            metadata,
        }
    }

    /// Event identifier.
    pub fn id(&self) -> &str {
        &self.event_id
    }

    /// Event type label.
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Event payload.
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Event metadata.
    pub fn metadata(&self) -> &M {
        &self.metadata
    }

    /// Consume the event, returning its payload.
    pub fn into_data(self) -> D {
        self.data
    }
}

impl<D, M> PartialEq for Event<D, M> {
    fn eq(&self, other: &Self) -> bool {
        self.event_id == other.event_id
    }
}

impl<D, M> Eq for Event<D, M> {}

// ─────────────────────────────────────────────────────────────────────────────
// Info
// ─────────────────────────────────────────────────────────────────────────────

/// Server status returned by `/info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    /// Server version, e.g. `5.0.7.0`.
    #[serde(rename = "esVersion")]
    pub es_version: String,
    /// Node state, e.g. `master`.
    pub state: String,
    /// Projection mode, e.g. `All`.
    #[serde(rename = "projectionsMode")]
    pub projections_mode: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Parse the trailing path segment of a stream URI as an event number.
///
/// Accepts absolute URIs and bare paths; query strings and fragments are
/// ignored.
pub(crate) fn parse_event_number(uri: &str) -> Result<EventNumber> {
    let path = uri.split(['?', '#']).next().unwrap_or_default();
    let segment = path.rsplit('/').next().unwrap_or_default();
    segment
        .parse()
        .map_err(|source| Error::InvalidEventNumber {
            value: segment.to_string(),
            source,
        })
}
