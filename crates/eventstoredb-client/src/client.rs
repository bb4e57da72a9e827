//! Main client implementation.

use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, LOCATION};
use reqwest::{Method, RequestBuilder, Response};
use url::Url;

use crate::api::{InfoApi, StreamsApi};
use crate::config::{BasicAuth, ClientConfig};
use crate::error::{Error, Result};
use crate::types::{EventNumber, parse_event_number};

/// Media type for plain JSON bodies.
pub(crate) const JSON: &str = "application/json";

/// EventStoreDB HTTP API client.
///
/// Cloning is cheap; clones share the connection pool and configuration.
///
/// # Example
///
/// ```no_run
/// use eventstoredb_client::EventStoreClient;
///
/// # async fn example() -> eventstoredb_client::Result<()> {
/// let client = EventStoreClient::builder()
///     .base_url("http://localhost:2113")
///     .basic_auth("admin", "changeit")
///     .build()?;
///
/// let info = client.info().get().await?;
/// println!("EventStoreDB {}", info.es_version);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct EventStoreClient {
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client.
    pub(crate) http: reqwest::Client,
    /// Base URL for API requests, always ending in `/`.
    pub(crate) base_url: Url,
    /// Credentials attached to every request.
    pub(crate) basic_auth: Option<BasicAuth>,
    /// `User-Agent` attached to every request.
    pub(crate) user_agent: HeaderValue,
}

impl EventStoreClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client for a local development node with default credentials.
    pub fn localhost() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a client from a config.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        ClientBuilder::from_config(config).build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the server info API.
    pub fn info(&self) -> InfoApi {
        InfoApi::new(self.clone())
    }

    /// Access the streams API (reading and appending events).
    pub fn streams(&self) -> StreamsApi {
        StreamsApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL from path segments below the base URL.
    ///
    /// Segments are percent-encoded, so stream names may contain `/` or `?`.
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("{} cannot be a base URL", self.inner.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Start a request with content negotiation and credentials applied.
    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.url(segments)?;
        tracing::debug!(method = %method, url = %url, "EventStoreDB request");

        let mut request = self
            .inner
            .http
            .request(method, url)
            .header(ACCEPT, JSON)
            .header(reqwest::header::USER_AGENT, self.inner.user_agent.clone());
        if let Some(auth) = &self.inner.basic_auth {
            request = request.basic_auth(&auth.username, Some(&auth.password));
        }
        Ok(request)
    }

    /// Make a GET request and decode the JSON body.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let response = self.send(self.request(Method::GET, segments)?).await?;
        decode(response).await
    }

    /// Make a POST request with a JSON body and return the raw response.
    ///
    /// `content_type` overrides the body's media type.
    pub(crate) async fn post<B>(
        &self,
        segments: &[&str],
        body: &B,
        content_type: &str,
        headers: HeaderMap,
    ) -> Result<Response>
    where
        B: serde::Serialize + ?Sized,
    {
        let body = serde_json::to_vec(body)?;
        let request = self
            .request(Method::POST, segments)?
            .headers(headers)
            .header(CONTENT_TYPE, content_type)
            .body(body);
        self.send(request).await
    }

    /// Execute a request, mapping failure statuses to errors.
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() || status.is_redirection() {
            return Ok(response);
        }

        tracing::debug!(status = %status, url = %response.url(), "EventStoreDB request failed");
        if status == reqwest::StatusCode::UNAUTHORIZED {
            Err(Error::Unauthorized)
        } else {
            Err(Error::Api {
                status: status.as_u16(),
                message: status.to_string(),
            })
        }
    }
}

/// Decode a buffered JSON body.
async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Extract the event number from a write response's `Location` header.
///
/// Relative locations are resolved against the request URL. A header that
/// cannot be read as a URL counts as missing.
pub(crate) fn location_event_number(response: &Response) -> Result<EventNumber> {
    let location = response
        .headers()
        .get(LOCATION)
        .ok_or(Error::MissingLocation)?
        .to_str()
        .map_err(|_| Error::MissingLocation)?;
    let location = response
        .url()
        .join(location)
        .map_err(|_| Error::MissingLocation)?;
    parse_event_number(location.path())
}

/// Builder for creating an EventStoreClient.
#[derive(Debug)]
pub struct ClientBuilder {
    config: ClientConfig,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self::from_config(ClientConfig::default())
    }

    /// Create a builder seeded from a config.
    pub fn from_config(config: ClientConfig) -> Self {
        Self { config, http: None }
    }

    /// Set the base URL for the server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set basic auth credentials.
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.config.basic_auth = Some(BasicAuth::new(username, password));
        self
    }

    /// Send requests without credentials.
    pub fn without_auth(mut self) -> Self {
        self.config.basic_auth = None;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(agent.into());
        self
    }

    /// Use a preconfigured HTTP client (proxies, TLS roots, timeouts).
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<EventStoreClient> {
        // Parse and normalize base URL
        let mut base_url = Url::parse(&self.config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!("{base_url} cannot be a base URL")));
        }
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let user_agent = self
            .config
            .user_agent
            .unwrap_or_else(|| format!("eventstoredb-client/{}", env!("CARGO_PKG_VERSION")));
        let user_agent = HeaderValue::from_str(&user_agent)
            .map_err(|_| Error::Config("Invalid user agent".to_string()))?;

        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder().build()?,
        };

        Ok(EventStoreClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                basic_auth: self.config.basic_auth,
                user_agent,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
