//! Fetch outcome type.

use reqwest::header::HeaderMap;
use serde::Serialize;

use crate::classify::is_error_status;
use crate::config::NETWORK_ERROR_STATUS;
use crate::error_handling::NetworkErrorKind;

/// Result of a single GET in a bulk fetch.
///
/// A server that answered, whatever the status, is a `Response`. A request
/// that never produced a response is a `NetworkError`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FetchOutcome {
    /// The server answered (after following redirects)
    Response {
        /// Final HTTP status code
        status: u16,
        /// Final response headers
        #[serde(skip)]
        headers: HeaderMap,
    },
    /// No response was received
    NetworkError {
        /// Failure category
        kind: NetworkErrorKind,
        /// Error message from the HTTP client
        cause: String,
    },
}

impl FetchOutcome {
    /// The real HTTP status, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchOutcome::Response { status, .. } => Some(*status),
            FetchOutcome::NetworkError { .. } => None,
        }
    }

    /// Status code projection: network errors count as `NETWORK_ERROR_STATUS` (500).
    pub fn status_code(&self) -> u16 {
        self.status().unwrap_or(NETWORK_ERROR_STATUS)
    }

    /// True for network errors and for 4xx/5xx responses.
    pub fn is_error(&self) -> bool {
        is_error_status(self.status_code())
    }

    /// True when no response was received.
    pub fn is_network_error(&self) -> bool {
        matches!(self, FetchOutcome::NetworkError { .. })
    }
}

impl std::fmt::Display for FetchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchOutcome::Response { status, .. } => write!(f, "{}", status),
            FetchOutcome::NetworkError { kind, .. } => write!(f, "{}", kind),
        }
    }
}
