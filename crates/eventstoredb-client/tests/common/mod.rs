//! Common test utilities for integration tests.

#![allow(dead_code)]

use eventstoredb_client::{Event, EventStoreClient};
use serde::{Deserialize, Serialize};
use wiremock::MockServer;

/// Payload used across the stream tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestEventData {
    pub foo: String,
    pub bar: i64,
    pub qux: bool,
}

impl TestEventData {
    pub fn sample() -> Self {
        Self {
            foo: "Xyzzy".to_string(),
            bar: 909,
            qux: false,
        }
    }
}

/// A `test-event` event carrying the sample payload and no metadata.
pub fn test_event() -> Event<TestEventData, Option<serde_json::Value>> {
    Event::new("test-event", TestEventData::sample(), None)
}

/// Start a mock server and a client pointed at it with default credentials.
pub async fn setup() -> (MockServer, EventStoreClient) {
    let server = MockServer::start().await;
    let client = EventStoreClient::builder()
        .base_url(server.uri())
        .build()
        .expect("client should build");
    (server, client)
}

/// Head feed as served for a stream whose newest event is number 32.
pub const FEED_HEAD: &str = r#"{
    "title": "32@test-event",
    "id": "http://localhost:2113/streams/test-event/32",
    "updated": "2020-06-25T21:10:31.662912Z",
    "author": { "name": "EventStore" },
    "summary": "test-event",
    "content": {
        "eventStreamId": "test-event",
        "eventNumber": 32,
        "eventType": "test-event",
        "eventId": "97a77ce0-ea0a-4697-a096-fa418adcf68a",
        "data": { "foo": "Xyzzy", "bar": 909, "qux": false },
        "metadata": ""
    },
    "links": [
        { "uri": "http://localhost:2113/streams/test-event/32", "relation": "edit" },
        { "uri": "http://localhost:2113/streams/test-event/32", "relation": "alternate" }
    ]
}"#;
