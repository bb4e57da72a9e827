//! Client configuration.

use serde::{Deserialize, Serialize};

/// Default address of a local EventStoreDB node.
pub const DEFAULT_BASE_URL: &str = "http://localhost:2113";

/// Default admin user of a fresh EventStoreDB install.
pub const DEFAULT_USERNAME: &str = "admin";

/// Default admin password of a fresh EventStoreDB install.
pub const DEFAULT_PASSWORD: &str = "changeit";

/// HTTP basic auth credentials.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAuth {
    /// User name.
    pub username: String,
    /// Password.
    pub password: String,
}

impl BasicAuth {
    /// Create credentials from a user name and password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for BasicAuth {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Connection settings for an [`EventStoreClient`](crate::EventStoreClient).
///
/// The defaults point at a local development node with the stock admin
/// credentials. Override both for anything else.
///
/// Can be embedded in an application config file:
///
/// ```toml
/// [eventstore]
/// base_url = "https://es.internal:2113"
///
/// [eventstore.basic_auth]
/// username = "writer"
/// password = "s3cret"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base address of the node's HTTP API.
    pub base_url: String,
    /// Credentials sent on every request. `None` disables basic auth.
    pub basic_auth: Option<BasicAuth>,
    /// Custom `User-Agent`.
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            basic_auth: Some(BasicAuth::default()),
            user_agent: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:2113");
        let auth = config.basic_auth.unwrap();
        assert_eq!(auth.username, "admin");
        assert_eq!(auth.password, "changeit");
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url":"http://es:2113"}"#).unwrap();
        assert_eq!(config.base_url, "http://es:2113");
        assert_eq!(config.basic_auth, Some(BasicAuth::default()));
    }

    #[test]
    fn test_null_auth_disables_credentials() {
        let config: ClientConfig = serde_json::from_str(r#"{"basic_auth":null}"#).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.basic_auth.is_none());
    }

    #[test]
    fn test_debug_redacts_password() {
        let auth = BasicAuth::new("ops", "hunter2");
        let debug = format!("{:?}", auth);
        assert!(debug.contains("ops"));
        assert!(!debug.contains("hunter2"));
    }
}
