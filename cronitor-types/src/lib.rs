//! # cronitor-types
//!
//! Core types shared by the Cronitor client. This crate defines the data
//! exchanged with the two Cronitor HTTP surfaces: the ping (telemetry) host
//! and the monitor management API.
//!
//! ## Overview
//!
//! - [`ClientConfig`]: the three optional credentials/identifiers a client is built from
//! - [`PingEvent`] and [`PauseDuration`]: telemetry events reported against a monitor code
//! - [`MonitorPayload`]: an opaque monitor definition passed verbatim to the API
//! - [`Monitor`] and [`MonitorList`]: monitor documents returned by the API
//!
//! ## Example
//!
//! ```rust
//! use cronitor_types::{MonitorPayload, Notifications, PingEvent, Rule};
//!
//! let payload = MonitorPayload::builder()
//!     .name("nightly-backup")
//!     .notifications(Notifications::default().email("ops@example.com"))
//!     .rule(Rule::new("not_run_in", 1).time_unit("hours"))
//!     .build();
//!
//! assert_eq!(payload.name(), Some("nightly-backup"));
//! assert_eq!(PingEvent::pause(5).path(), "pause/5");
//! ```

mod config;
mod monitor;
mod ping;

pub use config::*;
pub use monitor::*;
pub use ping::*;

/// Base URL of the ping (telemetry) host.
pub const PING_HOST: &str = "https://cronitor.link";

/// Base URL of the monitor management API host.
pub const API_HOST: &str = "https://cronitor.io";

/// Path prefix of the monitor management API.
pub const MONITORS_PATH: &str = "/v3/monitors";
