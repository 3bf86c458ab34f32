//! Client configuration.

use serde::{Deserialize, Serialize};

/// Identifiers and credentials a client is constructed with.
///
/// Every field is optional. Which ones are needed depends on the operation:
/// pings use `code` and (optionally) `auth_key`, while the management API
/// requires `monitor_api_key` and, for single-monitor operations, `code`.
///
/// # Example
///
/// ```rust
/// use cronitor_types::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_code("d3x0c1")
///     .with_auth_key("12345");
///
/// assert_eq!(config.code.as_deref(), Some("d3x0c1"));
/// assert!(config.monitor_api_key.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Monitor code targeted by pings and single-monitor API calls.
    #[serde(default)]
    pub code: Option<String>,

    /// Ping authentication key, sent as the `auth_key` query parameter.
    #[serde(default)]
    pub auth_key: Option<String>,

    /// Management API key.
    #[serde(default)]
    pub monitor_api_key: Option<String>,
}

impl ClientConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the monitor code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the ping authentication key.
    pub fn with_auth_key(mut self, auth_key: impl Into<String>) -> Self {
        self.auth_key = Some(auth_key.into());
        self
    }

    /// Set the management API key.
    pub fn with_monitor_api_key(mut self, key: impl Into<String>) -> Self {
        self.monitor_api_key = Some(key.into());
        self
    }
}
