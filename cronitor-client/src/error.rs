//! Error types for the client.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Management API operations, used to word precondition errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    List,
    Get,
    Update,
    Delete,
}

impl Operation {
    /// The phrase completing "You must provide ... to".
    pub fn action(&self) -> &'static str {
        match self {
            Operation::Create => "create a monitor",
            Operation::List => "retrieve monitors",
            Operation::Get => "retrieve a monitor",
            Operation::Update => "update a monitor",
            Operation::Delete => "delete a monitor",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action())
    }
}

/// Errors returned by client operations.
///
/// Precondition errors are raised locally before any request is sent. Every
/// other variant comes from the transport, and `Status` carries the server's
/// response untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// The client has no monitor API key.
    #[error("You must provide a monitorApiKey to {0}.")]
    MissingApiKey(Operation),

    /// The client has no monitor code.
    #[error("You must provide a monitor code to {0}.")]
    MissingCode(Operation),

    /// The server answered with a non-2xx status.
    #[error("Server returned status {status} for {}", crate::transport::redact(.url))]
    Status {
        status: u16,
        data: Value,
        url: String,
    },

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Connection failed.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Timeout waiting for response.
    #[error("Request timed out")]
    Timeout,

    /// A successful response did not have the expected shape.
    #[error("Failed to parse response: {message}")]
    Parse { message: String, data: Value },

    /// The request body could not be encoded.
    #[error("Failed to serialize request: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error was raised before any request was sent.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::MissingApiKey(_) | Error::MissingCode(_))
    }

    /// HTTP status of a server error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body of a server error (e.g. a validation payload) or of a
    /// successful response that could not be parsed.
    pub fn data(&self) -> Option<&Value> {
        match self {
            Error::Status { data, .. } | Error::Parse { data, .. } => Some(data),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // the URL may carry the ping auth_key
        let err = err.without_url();
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_connect() {
            Error::Connection(err.to_string())
        } else {
            Error::Http(err.to_string())
        }
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_precondition_messages() {
        let cases = [
            (
                Error::MissingApiKey(Operation::Create),
                "You must provide a monitorApiKey to create a monitor.",
            ),
            (
                Error::MissingApiKey(Operation::List),
                "You must provide a monitorApiKey to retrieve monitors.",
            ),
            (
                Error::MissingApiKey(Operation::Get),
                "You must provide a monitorApiKey to retrieve a monitor.",
            ),
            (
                Error::MissingApiKey(Operation::Update),
                "You must provide a monitorApiKey to update a monitor.",
            ),
            (
                Error::MissingCode(Operation::Update),
                "You must provide a monitor code to update a monitor.",
            ),
            (
                Error::MissingApiKey(Operation::Delete),
                "You must provide a monitorApiKey to delete a monitor.",
            ),
            (
                Error::MissingCode(Operation::Delete),
                "You must provide a monitor code to delete a monitor.",
            ),
        ];

        for (err, expected) in cases {
            assert!(err.is_precondition());
            assert_eq!(err.status(), None);
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_status_accessors() {
        let err = Error::Status {
            status: 400,
            data: json!({"name": ["Name is required"]}),
            url: "https://cronitor.io/v3/monitors".to_string(),
        };

        assert!(!err.is_precondition());
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.data(), Some(&json!({"name": ["Name is required"]})));
    }

    #[test]
    fn test_transport_errors_have_no_status() {
        assert_eq!(Error::Timeout.status(), None);
        assert!(Error::Connection("refused".into()).data().is_none());
    }
}
