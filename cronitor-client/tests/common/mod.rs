//! Shared helpers for integration tests.

#![allow(dead_code)]

use cronitor_client::{Client, ClientConfig, MonitorPayload, Notifications, Rule};
use tracing_subscriber::EnvFilter;

pub const CODE: &str = "d3x0c1";
pub const AUTH_KEY: &str = "12345";
pub const API_KEY: &str = "1337hax0r";

/// `Basic base64("1337hax0r:")`
pub const API_KEY_HEADER: &str = "Basic MTMzN2hheDByOg==";

/// Install a test-friendly subscriber once; set `RUST_LOG=debug` to see requests.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Client pointed at a mock server for both hosts.
pub fn client(server: &mockito::ServerGuard, config: ClientConfig) -> Client {
    init_tracing();
    Client::builder()
        .config(config)
        .ping_endpoint(server.url())
        .api_endpoint(server.url())
        .build()
        .unwrap()
}

pub fn new_monitor_payload() -> MonitorPayload {
    MonitorPayload::builder()
        .name("Testing_Cronitor_Client")
        .notifications(Notifications::default().email("support@example.com"))
        .rule(Rule::new("not_run_in", 1).time_unit("minutes"))
        .rule(Rule::new("ran_longer_than", 1).time_unit("minutes"))
        .note("Created by cronitor.io rust client")
        .build()
}

/// The payload as the server echoes it back, with an assigned code.
pub fn monitor_json(code: &str) -> serde_json::Value {
    let mut value = serde_json::to_value(new_monitor_payload()).unwrap();
    value["code"] = serde_json::Value::from(code);
    value
}
