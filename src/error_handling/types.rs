//! Error type definitions.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for loading identifier mapping files.
///
/// Any of these aborts the run; there is no partial recovery.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("Failed to read mapping file {}: {source}", .path.display())]
    Io {
        /// Path of the file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid category-to-identifiers mapping.
    #[error("Failed to parse mapping file {}: {source}", .path.display())]
    Parse {
        /// Path of the file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// Categories of request failure (no HTTP response was received).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkErrorKind {
    /// The request could not be built (bad URL, bad header)
    Builder,
    /// Redirect policy violated (loop or too many hops)
    Redirect,
    /// Request or connect timed out
    Timeout,
    /// TCP/TLS connection could not be established
    Connect,
    /// Error while sending the request
    Request,
    /// Error reading the response body
    Body,
    /// Error decoding the response
    Decode,
    /// Anything else
    Other,
}

impl std::fmt::Display for NetworkErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl NetworkErrorKind {
    /// Returns a human-readable string representation of the error kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkErrorKind::Builder => "HTTP request builder error",
            NetworkErrorKind::Redirect => "HTTP request redirect error",
            NetworkErrorKind::Timeout => "HTTP request timeout error",
            NetworkErrorKind::Connect => "HTTP request connect error",
            NetworkErrorKind::Request => "HTTP request error",
            NetworkErrorKind::Body => "HTTP request body error",
            NetworkErrorKind::Decode => "HTTP request decode error",
            NetworkErrorKind::Other => "HTTP request other error",
        }
    }
}
