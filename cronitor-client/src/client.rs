//! The Cronitor client.

use std::sync::Arc;
use std::time::Duration;

use cronitor_types::{
    ClientConfig, Monitor, MonitorList, MonitorPayload, PingEvent, API_HOST, MONITORS_PATH,
    PING_HOST,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::transport::{HttpTransport, Method, Request, Response, Transport};
use crate::{Error, Operation};

/// Client for the Cronitor ping and monitor management APIs.
///
/// A client is an immutable value: cloning it is cheap and every call is
/// independent. Each call sends at most one request and never retries.
///
/// # Example
///
/// ```rust,no_run
/// use cronitor_client::{Client, ClientConfig};
///
/// # tokio_test::block_on(async {
/// let client = Client::new(ClientConfig::new().with_code("d3x0c1"));
///
/// client.run(None).await?;
/// // ... do the work ...
/// client.complete(Some("processed 42 rows")).await?;
/// # Ok::<(), cronitor_client::Error>(())
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    ping_endpoint: String,
    api_endpoint: String,
}

impl Client {
    /// Create a client with the default endpoints and HTTP transport.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            transport: Arc::new(HttpTransport::new()),
            ping_endpoint: PING_HOST.to_string(),
            api_endpoint: API_HOST.to_string(),
        }
    }

    /// Create a new builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client from `CRONITOR_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::new(crate::config::load()?))
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Report that the job started.
    pub async fn run(&self, message: Option<&str>) -> Result<Response, Error> {
        self.ping(PingEvent::Run, message).await
    }

    /// Report that the job finished successfully.
    pub async fn complete(&self, message: Option<&str>) -> Result<Response, Error> {
        self.ping(PingEvent::Complete, message).await
    }

    /// Report that the job failed.
    pub async fn fail(&self, message: Option<&str>) -> Result<Response, Error> {
        self.ping(PingEvent::Fail, message).await
    }

    /// Pause alerting for `minutes` minutes.
    pub async fn pause(&self, minutes: u32) -> Result<Response, Error> {
        self.ping(PingEvent::pause(minutes), None).await
    }

    /// Resume alerting.
    pub async fn unpause(&self) -> Result<Response, Error> {
        self.ping(PingEvent::unpause(), None).await
    }

    /// Send any ping event.
    ///
    /// Pause events carry no message; one passed with them is dropped.
    pub async fn ping(&self, event: PingEvent, message: Option<&str>) -> Result<Response, Error> {
        let url = self.ping_url(event, message);
        self.transport.send(Request::get(url)).await
    }

    /// Build the ping URL for an event.
    ///
    /// A missing code is not checked and yields a path with an empty segment.
    pub fn ping_url(&self, event: PingEvent, message: Option<&str>) -> String {
        let code = self.config.code.as_deref().unwrap_or_default();
        let mut url = format!(
            "{}/{}/{}",
            self.ping_endpoint,
            urlencoding::encode(code),
            event.path()
        );

        let mut params = vec![];
        if let Some(message) = message.filter(|_| event.accepts_message()) {
            params.push(format!("msg={}", urlencoding::encode(message)));
        }
        if let Some(auth_key) = &self.config.auth_key {
            params.push(format!("auth_key={}", urlencoding::encode(auth_key)));
        }

        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.join("&"));
        }
        url
    }

    /// Create a monitor. Returns the monitor with its server-assigned code.
    pub async fn create(&self, payload: &MonitorPayload) -> Result<Monitor, Error> {
        let api_key = self.require_api_key(Operation::Create)?;

        let request = Request::new(Method::POST, self.monitors_url())
            .api_key(api_key)
            .body(serde_json::to_value(payload)?);

        decode(self.transport.send(request).await?)
    }

    /// List monitors (first page).
    pub async fn all(&self) -> Result<MonitorList, Error> {
        self.list(None).await
    }

    /// List a specific page of monitors.
    pub async fn all_page(&self, page: u32) -> Result<MonitorList, Error> {
        self.list(Some(page)).await
    }

    async fn list(&self, page: Option<u32>) -> Result<MonitorList, Error> {
        let api_key = self.require_api_key(Operation::List)?;

        let mut url = self.monitors_url();
        if let Some(page) = page {
            url.push_str(&format!("?page={}", page));
        }

        let request = Request::get(url).api_key(api_key);
        decode(self.transport.send(request).await?)
    }

    /// Fetch the configured monitor.
    pub async fn get(&self) -> Result<Monitor, Error> {
        let (api_key, code) = self.require_api_key_and_code(Operation::Get)?;

        let request = Request::get(self.monitor_url(code)).api_key(api_key);
        decode(self.transport.send(request).await?)
    }

    /// Replace the configured monitor's definition.
    pub async fn update(&self, payload: &MonitorPayload) -> Result<Monitor, Error> {
        let (api_key, code) = self.require_api_key_and_code(Operation::Update)?;

        let request = Request::new(Method::PUT, self.monitor_url(code))
            .api_key(api_key)
            .body(serde_json::to_value(payload)?);

        decode(self.transport.send(request).await?)
    }

    /// Delete the configured monitor. The server answers 204 with no body.
    pub async fn delete(&self) -> Result<Response, Error> {
        let (api_key, code) = self.require_api_key_and_code(Operation::Delete)?;

        let request = Request::new(Method::DELETE, self.monitor_url(code)).api_key(api_key);
        self.transport.send(request).await
    }

    fn monitors_url(&self) -> String {
        format!("{}{}", self.api_endpoint, MONITORS_PATH)
    }

    fn monitor_url(&self, code: &str) -> String {
        format!("{}{}/{}", self.api_endpoint, MONITORS_PATH, urlencoding::encode(code))
    }

    fn require_api_key(&self, operation: Operation) -> Result<&str, Error> {
        self.config.monitor_api_key.as_deref().ok_or_else(|| {
            debug!(%operation, "Missing monitor API key");
            Error::MissingApiKey(operation)
        })
    }

    // The key is checked first so a client missing both reports the key.
    fn require_api_key_and_code(&self, operation: Operation) -> Result<(&str, &str), Error> {
        let api_key = self.require_api_key(operation)?;
        let code = self.config.code.as_deref().ok_or_else(|| {
            debug!(%operation, "Missing monitor code");
            Error::MissingCode(operation)
        })?;
        Ok((api_key, code))
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    match T::deserialize(&response.data) {
        Ok(value) => Ok(value),
        Err(e) => Err(Error::Parse {
            message: e.to_string(),
            data: response.data,
        }),
    }
}

/// Builder for `Client`.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    ping_endpoint: Option<String>,
    api_endpoint: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    /// Replace the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the monitor code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.config.code = Some(code.into());
        self
    }

    /// Set the ping authentication key.
    pub fn auth_key(mut self, auth_key: impl Into<String>) -> Self {
        self.config.auth_key = Some(auth_key.into());
        self
    }

    /// Set the management API key.
    pub fn monitor_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.monitor_api_key = Some(key.into());
        self
    }

    /// Set the ping host (default: "https://cronitor.link").
    pub fn ping_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.ping_endpoint = Some(endpoint.into());
        self
    }

    /// Set the management API host (default: "https://cronitor.io").
    pub fn api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = Some(endpoint.into());
        self
    }

    /// Set the request timeout of the default transport.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a custom transport.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client, Error> {
        let transport: Arc<dyn Transport> = match (self.transport, self.timeout) {
            (Some(transport), _) => transport,
            (None, Some(timeout)) => Arc::new(HttpTransport::with_timeout(timeout)?),
            (None, None) => Arc::new(HttpTransport::new()),
        };

        Ok(Client {
            config: self.config,
            transport,
            ping_endpoint: trim_endpoint(self.ping_endpoint, PING_HOST),
            api_endpoint: trim_endpoint(self.api_endpoint, API_HOST),
        })
    }
}

fn trim_endpoint(endpoint: Option<String>, default: &str) -> String {
    endpoint
        .map(|e| e.trim_end_matches('/').to_string())
        .unwrap_or_else(|| default.to_string())
}
