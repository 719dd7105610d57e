//! Failure classifiers built on the bulk fetcher.
//!
//! A URL fails when its final status (after following redirects) is a
//! client or server error. Network errors count as failures too.

use log::info;
use serde::Serialize;

use crate::config::{ERROR_STATUS_MAX, ERROR_STATUS_MIN};
use crate::fetch::{fetch_many, rdf_headers, FetchOutcome};

/// True for status codes in 400..=599.
pub fn is_error_status(status: u16) -> bool {
    (ERROR_STATUS_MIN..=ERROR_STATUS_MAX).contains(&status)
}

/// A URL that failed the plain fetch, the RDF fetch, or both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LdFailure {
    /// The URL that was fetched
    pub url: String,
    /// Outcome with no extra headers
    pub plain: FetchOutcome,
    /// Outcome with `Accept: text/turtle`
    pub rdf: FetchOutcome,
}

/// Keeps the `(url, status)` pairs whose outcome is an error.
///
/// Network errors are reported with status 500.
pub fn error_statuses(results: Vec<(String, FetchOutcome)>) -> Vec<(String, u16)> {
    results
        .into_iter()
        .filter(|(_, outcome)| outcome.is_error())
        .map(|(url, outcome)| (url, outcome.status_code()))
        .collect()
}

/// Pairs plain and RDF outcomes by position and keeps URLs where either failed.
///
/// Both slices must come from fetching the same URL list.
pub fn combine_ld_results(
    plain: Vec<(String, FetchOutcome)>,
    rdf: Vec<(String, FetchOutcome)>,
) -> Vec<LdFailure> {
    plain
        .into_iter()
        .zip(rdf)
        .filter(|((_, p), (_, r))| p.is_error() || r.is_error())
        .map(|((url, plain), (_, rdf))| LdFailure { url, plain, rdf })
        .collect()
}

/// URLs whose plain GET ends in an error status.
pub async fn http_failures(
    client: &reqwest::Client,
    urls: &[String],
    max_concurrency: usize,
) -> Vec<(String, u16)> {
    let failures = error_statuses(fetch_many(client, urls, None, max_concurrency).await);
    info!("{} of {} URLs failed plain GET", failures.len(), urls.len());
    failures
}

/// URLs whose `Accept: text/turtle` GET ends in an error status.
pub async fn http_rdf_failures(
    client: &reqwest::Client,
    urls: &[String],
    max_concurrency: usize,
) -> Vec<(String, u16)> {
    let headers = rdf_headers();
    let failures =
        error_statuses(fetch_many(client, urls, Some(&headers), max_concurrency).await);
    info!("{} of {} URLs failed RDF GET", failures.len(), urls.len());
    failures
}

/// URLs failing the plain GET, the RDF GET, or both.
///
/// The two batches run one after the other, not interleaved.
pub async fn ld_failures(
    client: &reqwest::Client,
    urls: &[String],
    max_concurrency: usize,
) -> Vec<LdFailure> {
    let plain = fetch_many(client, urls, None, max_concurrency).await;
    let headers = rdf_headers();
    let rdf = fetch_many(client, urls, Some(&headers), max_concurrency).await;
    let failures = combine_ld_results(plain, rdf);
    info!(
        "{} of {} URLs failed plain or RDF GET",
        failures.len(),
        urls.len()
    );
    failures
}
