//! Loading [`ClientConfig`] from the environment and config files.
//!
//! Environment variables use the `CRONITOR_` prefix:
//!
//! | Variable | Field |
//! |---|---|
//! | `CRONITOR_CODE` | `code` |
//! | `CRONITOR_AUTH_KEY` | `auth_key` |
//! | `CRONITOR_MONITOR_API_KEY` | `monitor_api_key` |
//!
//! When a file is given, environment variables take precedence over it.

use std::path::Path;

use config::{Config, Environment, File};
use cronitor_types::ClientConfig;
use tracing::debug;

use crate::Error;

/// Prefix for environment variables.
pub const ENV_PREFIX: &str = "CRONITOR";

/// Environment source with the `CRONITOR_` prefix.
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
}

/// Load configuration from `CRONITOR_*` environment variables.
pub fn load() -> Result<ClientConfig, Error> {
    load_from(environment())
}

/// Load configuration from a file, overridden by `CRONITOR_*` variables.
///
/// The format is inferred from the extension (toml, yaml, json, ...).
pub fn load_with_file(path: &Path) -> Result<ClientConfig, Error> {
    let config = Config::builder()
        .add_source(File::from(path))
        .add_source(environment())
        .build()?;

    debug!(path = %path.display(), "Loaded client configuration");
    Ok(config.try_deserialize()?)
}

/// Load configuration from a custom environment source.
pub fn load_from(env: Environment) -> Result<ClientConfig, Error> {
    let config = Config::builder().add_source(env).build()?;
    Ok(config.try_deserialize()?)
}
