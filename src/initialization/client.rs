//! HTTP client initialization.
//!
//! Two clients are used: one that follows redirects for the failure checks,
//! and one with redirects disabled so the redirect check can read `Location`.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, MAX_REDIRECT_HOPS};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used by the bulk fetcher.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from config
/// - Timeout from config
/// - Redirect following enabled (up to `MAX_REDIRECT_HOPS` hops)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails
/// (for example, a User-Agent that is not a valid header value).
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes the HTTP client used by the redirect validator.
///
/// Redirects are disabled so the first response (and its `Location` header)
/// is returned to the caller as-is.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails
/// (for example, a User-Agent that is not a valid header value).
pub fn init_redirect_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
