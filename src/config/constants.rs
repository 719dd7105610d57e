//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including timeouts, negotiated media types, and report messages.

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default maximum number of in-flight requests for bulk fetches.
///
/// Zero means unbounded: every URL in a batch is requested at once.
pub const DEFAULT_MAX_CONCURRENCY: usize = 0;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("iri_check/", env!("CARGO_PKG_VERSION"));

// Redirect handling
/// Maximum number of redirect hops the bulk fetch client follows
pub const MAX_REDIRECT_HOPS: usize = 10;

// Content negotiation
/// Accept header value used for RDF-negotiated fetches
pub const RDF_ACCEPT: &str = "text/turtle";

// Failure classification
/// Lowest HTTP status code treated as a failure (client errors)
pub const ERROR_STATUS_MIN: u16 = 400;
/// Highest HTTP status code treated as a failure (server errors)
pub const ERROR_STATUS_MAX: u16 = 599;
/// Status code reported for URLs that could not be reached at all.
///
/// Only used when an outcome is projected onto a bare status code; the
/// outcome itself keeps the network error distinct from a real 500.
pub const NETWORK_ERROR_STATUS: u16 = 500;

// Report messages
/// Message recorded when the redirect target differs from the expected IRI
pub const INVALID_REDIRECT_MESSAGE: &str = "IRI redirection invalid";
/// Prefix of the message recorded when the redirect request itself failed
pub const REQUEST_FAILED_MESSAGE: &str = "IRI request failed";
