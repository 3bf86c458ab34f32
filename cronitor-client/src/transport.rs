//! HTTP transport abstraction.
//!
//! The client only builds requests; sending them is delegated to a
//! [`Transport`]. [`HttpTransport`] is the default, reqwest-backed
//! implementation. Tests and embedders can supply their own.

use std::borrow::Cow;
use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
pub use reqwest::Method;
use serde_json::Value;
use tracing::{debug, warn};

use crate::Error;

/// A single outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    /// Absolute URL including any query string.
    pub url: String,
    /// JSON body, if any.
    pub body: Option<Value>,
    /// Management API key; sent as HTTP Basic auth by [`HttpTransport`].
    pub api_key: Option<String>,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
            api_key: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

/// A successful (2xx) response.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Parsed body. `Null` when empty, a JSON string when the body is plain text.
    pub data: Value,
    /// The URL the request was actually sent to.
    pub url: String,
}

/// Sends requests built by the client.
///
/// Implementations send exactly one request per call and must not retry.
/// A non-2xx answer is reported as [`Error::Status`] carrying the server's
/// status and body unchanged.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    /// Send a request and wait for the response.
    async fn send(&self, request: Request) -> Result<Response, Error>;
}

/// Default transport backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with reqwest's default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport with a request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> Result<Response, Error> {
        debug!(method = %request.method, url = %redact(&request.url), "Sending request");

        let mut builder = self.client.request(request.method, &request.url);
        if let Some(key) = &request.api_key {
            builder = builder.basic_auth(key, None::<&str>);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let url = response.url().to_string();
        let text = response.text().await?;
        let data = parse_body(text);

        if !status.is_success() {
            warn!(status = status.as_u16(), url = %redact(&url), "Request failed");
            return Err(Error::Status {
                status: status.as_u16(),
                data,
                url,
            });
        }

        Ok(Response {
            status: status.as_u16(),
            data,
            url,
        })
    }
}

fn parse_body(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

/// Mask the `auth_key` query value so it never reaches the logs.
pub(crate) fn redact(url: &str) -> Cow<'_, str> {
    const KEY: &str = "auth_key=";

    let Some(start) = url.find(KEY).map(|i| i + KEY.len()) else {
        return Cow::Borrowed(url);
    };
    let end = url[start..].find('&').map_or(url.len(), |i| start + i);

    let mut redacted = String::with_capacity(url.len());
    redacted.push_str(&url[..start]);
    redacted.push_str("***");
    redacted.push_str(&url[end..]);
    Cow::Owned(redacted)
}
