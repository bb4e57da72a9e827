//! HTTP client SDK for the EventStoreDB event store.
//!
//! This crate provides a typed client for a running EventStoreDB node's HTTP
//! API: server info, Atom stream feeds, reading single events and appending
//! events to a stream.
//!
//! # Example
//!
//! ```no_run
//! use eventstoredb_client::{Event, EventStoreClient, Relation, Result};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! struct Deposited {
//!     account: String,
//!     amount: u64,
//! }
//!
//! # async fn example() -> Result<()> {
//! // Create a client
//! let client = EventStoreClient::builder()
//!     .base_url("http://localhost:2113")
//!     .basic_auth("admin", "changeit")
//!     .build()?;
//!
//! // Append an event
//! let event = Event::new(
//!     "deposited",
//!     Deposited { account: "acc-1".into(), amount: 100 },
//!     serde_json::Value::Null,
//! );
//! let number = client.streams().append(&event, "account-acc-1").await?;
//! println!("Written as event {}", number);
//!
//! // Find the newest event and read it back
//! let head = client.streams().head("account-acc-1").await?;
//! let latest = head.event_number(Relation::Alternate)?;
//! let read: Event<Deposited> = client.streams().read("account-acc-1", latest).await?;
//! println!("{} deposited {}", read.data().account, read.data().amount);
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Info**: Server version, state and projection mode
//! - **Streams**: Head feed, read by event number, append

pub mod api;
pub mod atom;
pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use atom::{Author, Entry, Feed, Link, Relation};
pub use client::{ClientBuilder, EventStoreClient};
pub use config::{BasicAuth, ClientConfig};
pub use error::{Error, Result};
pub use types::*;
