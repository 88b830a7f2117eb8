//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure reaching a caller is an [`ApiError`] whose `Display` is the
//! best human-readable message available: server-supplied text first,
//! transport text otherwise. Views render it as-is.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

use crate::storage::StorageError;

/// Failure before any response was received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("timeout of {0}ms exceeded")]
    Timeout(u64),

    #[error("{0}")]
    Network(String),

    #[error("invalid request: {0}")]
    Request(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Credentials rejected, or the session token is no longer accepted.
    #[error("{message}")]
    Auth { status: u16, message: String },

    #[error("{message}")]
    NotFound { message: String },

    /// Any other non-2xx response.
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("session storage failed: {0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Classify a non-2xx response.
    #[must_use]
    pub fn from_response(status: u16, body: &Value) -> Self {
        let message = response_message(status, body);
        match status {
            401 | 403 => Self::Auth { status, message },
            404 => Self::NotFound { message },
            _ => Self::Server { status, message },
        }
    }

    /// HTTP status of the failed response, if one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { status, .. } | Self::Server { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            Self::Transport(_) | Self::Storage(_) => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Pick the message a user should see for a failed response.
///
/// Prefers the body's `message`, then `error`, then a generic status line.
#[must_use]
pub fn response_message(status: u16, body: &Value) -> String {
    ["message", "error"]
        .iter()
        .find_map(|field| body.get(*field).and_then(Value::as_str))
        .filter(|text| !text.trim().is_empty())
        .map_or_else(|| format!("request failed with status {status}"), str::to_owned)
}
