//! Streams API: reading stream feeds and events, appending events.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::atom::Feed;
use crate::client::{EventStoreClient, JSON, location_event_number};
use crate::error::{Error, Result};
use crate::types::{Event, EventNumber};

/// Media type of an event batch on the append endpoint.
pub const EVENTS_MEDIA_TYPE: &str = "application/vnd.eventstore.events+json";

const ES_EVENT_TYPE: HeaderName = HeaderName::from_static("es-eventtype");
const ES_EVENT_ID: HeaderName = HeaderName::from_static("es-eventid");

/// Streams API client.
pub struct StreamsApi {
    client: EventStoreClient,
}

impl StreamsApi {
    pub(crate) fn new(client: EventStoreClient) -> Self {
        Self { client }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reading
    // ─────────────────────────────────────────────────────────────────────────

    /// Fetch the feed at the head of a stream.
    ///
    /// Use [`Feed::event_number`] with
    /// [`Relation::Alternate`](crate::atom::Relation::Alternate) to find the
    /// latest event number, then [`read`](Self::read) it.
    pub async fn head(&self, stream: &str) -> Result<Feed> {
        let stream = stream_name(stream)?;
        self.client.get(&["streams", stream, "head"]).await
    }

    /// Fetch a single event by its number in the stream.
    pub async fn read<D, M>(&self, stream: &str, number: EventNumber) -> Result<Event<D, M>>
    where
        D: DeserializeOwned,
        M: DeserializeOwned + Default,
    {
        let stream = stream_name(stream)?;
        let number = number.to_string();
        self.client.get(&["streams", stream, number.as_str()]).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Writing
    // ─────────────────────────────────────────────────────────────────────────

    /// Append an event to a stream, returning its assigned event number.
    ///
    /// The event is sent as a one-element batch. Duplicate appends of the same
    /// event id are resolved by the server.
    pub async fn append<D, M>(&self, event: &Event<D, M>, stream: &str) -> Result<EventNumber>
    where
        D: Serialize,
        M: Serialize,
    {
        let stream = stream_name(stream)?;
        let response = self
            .client
            .post(
                &["streams", stream],
                std::slice::from_ref(event),
                EVENTS_MEDIA_TYPE,
                HeaderMap::new(),
            )
            .await?;
        let number = location_event_number(&response)?;

        tracing::debug!(
            stream = %stream,
            event_id = %event.id(),
            event_number = number,
            "Appended event"
        );
        Ok(number)
    }

    /// Append an event using the header-based variant of the API.
    ///
    /// The stream is named after the event type, the body carries only the
    /// event data, and the id and type travel in `ES-EventId` and
    /// `ES-EventType` headers.
    pub async fn append_with_headers<D, M>(&self, event: &Event<D, M>) -> Result<EventNumber>
    where
        D: Serialize,
    {
        let stream = stream_name(event.event_type())?;
        let mut headers = HeaderMap::new();
        headers.insert(ES_EVENT_TYPE, header_value(event.event_type())?);
        headers.insert(ES_EVENT_ID, header_value(event.id())?);

        let response = self
            .client
            .post(&["streams", stream], event.data(), JSON, headers)
            .await?;
        let number = location_event_number(&response)?;

        tracing::debug!(
            stream = %stream,
            event_id = %event.id(),
            event_number = number,
            "Appended event"
        );
        Ok(number)
    }
}

/// Reject names the URL parser would collapse into another path.
fn stream_name(stream: &str) -> Result<&str> {
    match stream {
        "" | "." | ".." => Err(Error::InvalidStreamName(stream.to_string())),
        _ => Ok(stream),
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| Error::Config(format!("{value:?} is not a valid header value")))
}
