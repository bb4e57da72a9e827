//! Server info API.

use crate::client::EventStoreClient;
use crate::error::Result;
use crate::types::Info;

/// Server info API client.
pub struct InfoApi {
    client: EventStoreClient,
}

impl InfoApi {
    pub(crate) fn new(client: EventStoreClient) -> Self {
        Self { client }
    }

    /// Fetch the server's version, state and projection mode.
    pub async fn get(&self) -> Result<Info> {
        self.client.get(&["info"]).await
    }

    /// Simple connectivity check - returns true if the server answers `/info`.
    pub async fn is_reachable(&self) -> bool {
        self.get().await.is_ok()
    }
}
