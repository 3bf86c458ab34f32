//! # cronitor-client
//!
//! Async client for the two Cronitor HTTP surfaces:
//!
//! - **Ping API** (`cronitor.link`): report `run`, `complete` and `fail`
//!   events for a job, and pause or unpause its alerts
//! - **Monitor API** (`cronitor.io/v3/monitors`): create, list, fetch,
//!   update and delete monitors
//!
//! The client only builds requests and checks credentials. Sending is
//! delegated to a [`Transport`]; the default [`HttpTransport`] uses reqwest.
//! Every call sends at most one request and hands back the outcome as-is:
//! there is no retry or backoff.
//!
//! ## Credentials
//!
//! | Operation | Requires |
//! |---|---|
//! | `run` / `complete` / `fail` / `pause` / `unpause` | `code` (`auth_key` optional) |
//! | `create` / `all` | `monitor_api_key` |
//! | `get` / `update` / `delete` | `monitor_api_key`, then `code` |
//!
//! A missing credential fails the call with [`Error::MissingApiKey`] or
//! [`Error::MissingCode`] before anything is sent.
//!
//! ## Quick Start (pings)
//!
//! ```rust,no_run
//! use cronitor_client::{Client, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(
//!         ClientConfig::new()
//!             .with_code("d3x0c1")
//!             .with_auth_key("12345"),
//!     );
//!
//!     client.run(None).await?;
//!     // ... the job runs ...
//!     client.complete(Some("done")).await?;
//!
//!     // Silence alerts for an hour of maintenance
//!     client.pause(60).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Managing monitors
//!
//! ```rust,no_run
//! use cronitor_client::{Client, MonitorPayload, Notifications, Rule};
//!
//! # tokio_test::block_on(async {
//! let client = Client::builder().monitor_api_key("1337hax0r").build()?;
//!
//! let payload = MonitorPayload::builder()
//!     .name("nightly-backup")
//!     .notifications(Notifications::default().email("ops@example.com"))
//!     .rule(Rule::new("not_run_in", 1).time_unit("days"))
//!     .build();
//!
//! let monitor = client.create(&payload).await?;
//! println!("Created {}", monitor.code);
//!
//! for monitor in client.all().await? {
//!     println!("{} {:?}", monitor.code, monitor.name());
//! }
//! # Ok::<(), cronitor_client::Error>(())
//! # });
//! ```
//!
//! ## Configuration
//!
//! [`Client::from_env`] reads `CRONITOR_CODE`, `CRONITOR_AUTH_KEY` and
//! `CRONITOR_MONITOR_API_KEY`. See the [`config`] module for file-based
//! loading.

pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use client::{Client, ClientBuilder};
pub use error::{Error, Operation};
pub use transport::{HttpTransport, Method, Request, Response, Transport};

// Re-export types for convenience
pub use cronitor_types::{
    ClientConfig, Monitor, MonitorList, MonitorPayload, MonitorPayloadBuilder, Notifications,
    PauseDuration, PingEvent, Rule,
};
