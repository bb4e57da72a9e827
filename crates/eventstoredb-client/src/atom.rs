//! Atom feed documents used for stream navigation.
//!
//! EventStoreDB exposes every stream as an Atom feed rendered to JSON. The
//! feed's links are how a client finds its way around: `alternate` points at
//! the newest event, `next`/`previous` page through history, and so on.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{EventNumber, parse_event_number};

/// Relation of a navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// The feed or entry itself.
    #[serde(rename = "self")]
    SelfLink,
    /// First page of the feed.
    First,
    /// Last page of the feed.
    Last,
    /// Next (older) page.
    Next,
    /// Previous (newer) page.
    Previous,
    /// Stream metadata.
    Metadata,
    /// Target for modifying the resource.
    Edit,
    /// Readable view of an event.
    Alternate,
}

impl Relation {
    /// Wire label of this relation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::SelfLink => "self",
            Relation::First => "first",
            Relation::Last => "last",
            Relation::Next => "next",
            Relation::Previous => "previous",
            Relation::Metadata => "metadata",
            Relation::Edit => "edit",
            Relation::Alternate => "alternate",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A link in a feed or entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Link target.
    pub uri: String,
    /// What the link points at.
    pub relation: Relation,
}

/// Author of a feed or entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Author name, usually `EventStore`.
    pub name: String,
}

/// Stream feed snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Feed {
    /// Feed title.
    pub title: String,
    /// Feed URI.
    pub id: String,
    /// Last update time.
    pub updated: Option<DateTime<Utc>>,
    /// Name of the stream.
    pub stream_id: String,
    /// Feed author.
    pub author: Author,
    /// Whether this page includes the newest event.
    pub head_of_stream: bool,
    /// URI of this page.
    pub self_url: String,
    /// Cache validation tag.
    #[serde(rename = "eTag")]
    pub etag: String,
    /// Navigation links, in server order.
    pub links: Vec<Link>,
    /// Entries, in server order.
    pub entries: Vec<Entry>,
}

/// A single entry of a feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    /// Entry title, e.g. `32@orders`.
    pub title: String,
    /// Entry URI.
    pub id: String,
    /// Time the event was written.
    pub updated: Option<DateTime<Utc>>,
    /// Entry author.
    pub author: Author,
    /// Event type.
    pub summary: String,
    /// Links to the event.
    pub links: Vec<Link>,
}

impl Feed {
    /// URI of the first link with the given relation.
    pub fn link(&self, relation: Relation) -> Result<&str> {
        find_link(&self.links, relation)
    }

    /// URI of the newest event in the stream.
    pub fn alternate_link(&self) -> Result<&str> {
        self.link(Relation::Alternate)
    }

    /// Event number the given link points at.
    ///
    /// With [`Relation::Alternate`] on a head feed this is the stream's
    /// latest event number, ready to pass to
    /// [`StreamsApi::read`](crate::api::StreamsApi::read).
    pub fn event_number(&self, relation: Relation) -> Result<EventNumber> {
        parse_event_number(self.link(relation)?)
    }
}

impl Entry {
    /// URI of the first link with the given relation.
    pub fn link(&self, relation: Relation) -> Result<&str> {
        find_link(&self.links, relation)
    }

    /// Event number the given link points at.
    pub fn event_number(&self, relation: Relation) -> Result<EventNumber> {
        parse_event_number(self.link(relation)?)
    }
}

fn find_link(links: &[Link], relation: Relation) -> Result<&str> {
    links
        .iter()
        .find(|link| link.relation == relation)
        .map(|link| link.uri.as_str())
        .ok_or(Error::LinkNotFound(relation))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_feed() -> Feed {
        Feed {
            title: "test-feed".to_string(),
            links: vec![
                Link {
                    uri: "http://localhost:2113/streams/test-event/32".to_string(),
                    relation: Relation::Edit,
                },
                Link {
                    uri: "http://localhost:2113/streams/test-event/32".to_string(),
                    relation: Relation::Alternate,
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_alternate_link() {
        let feed = test_feed();
        assert_eq!(
            feed.alternate_link().unwrap(),
            "http://localhost:2113/streams/test-event/32"
        );
        assert_eq!(feed.event_number(Relation::Alternate).unwrap(), 32);
    }

    #[test]
    fn test_missing_link() {
        let feed = test_feed();
        let err = feed.link(Relation::Next).unwrap_err();
        assert!(matches!(err, Error::LinkNotFound(Relation::Next)));
    }

    #[test]
    fn test_first_match_wins() {
        let mut feed = test_feed();
        feed.links.push(Link {
            uri: "http://localhost:2113/streams/test-event/7".to_string(),
            relation: Relation::Alternate,
        });
        assert_eq!(feed.event_number(Relation::Alternate).unwrap(), 32);
    }

    #[test]
    fn test_relation_wire_labels() {
        let json = serde_json::to_string(&Relation::SelfLink).unwrap();
        assert_eq!(json, r#""self""#);
        let rel: Relation = serde_json::from_str(r#""previous""#).unwrap();
        assert_eq!(rel, Relation::Previous);
        assert_eq!(Relation::Metadata.to_string(), "metadata");
    }

    #[test]
    fn test_deserialize_feed() {
        let json = r#"{
            "title": "Event stream 'test-event'",
            "id": "http://localhost:2113/streams/test-event",
            "updated": "2020-06-25T21:10:31.662912Z",
            "streamId": "test-event",
            "author": { "name": "EventStore" },
            "headOfStream": true,
            "selfUrl": "http://localhost:2113/streams/test-event",
            "eTag": "32;-1296467268",
            "links": [
                { "uri": "http://localhost:2113/streams/test-event", "relation": "self" },
                { "uri": "http://localhost:2113/streams/test-event/head/backward/20", "relation": "first" },
                { "uri": "http://localhost:2113/streams/test-event/12/backward/20", "relation": "next" }
            ],
            "entries": [
                {
                    "title": "32@test-event",
                    "id": "http://localhost:2113/streams/test-event/32",
                    "updated": "2020-06-25T21:10:31.662912Z",
                    "author": { "name": "EventStore" },
                    "summary": "test-event",
                    "links": [
                        { "uri": "http://localhost:2113/streams/test-event/32", "relation": "edit" },
                        { "uri": "http://localhost:2113/streams/test-event/32", "relation": "alternate" }
                    ]
                }
            ]
        }"#;

        let feed: Feed = serde_json::from_str(json).unwrap();
        assert_eq!(feed.stream_id, "test-event");
        assert_eq!(feed.author.name, "EventStore");
        assert!(feed.head_of_stream);
        assert_eq!(feed.etag, "32;-1296467268");
        assert_eq!(feed.links.len(), 3);
        assert!(feed.updated.is_some());
        assert_eq!(feed.entries.len(), 1);

        let entry = &feed.entries[0];
        assert_eq!(entry.summary, "test-event");
        assert_eq!(entry.event_number(Relation::Alternate).unwrap(), 32);
    }
}
