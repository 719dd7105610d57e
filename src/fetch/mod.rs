//! Bulk fetching.
//!
//! Every URL in a batch is requested concurrently and the caller waits for
//! the whole batch. Each URL gets exactly one outcome, returned in input
//! order. There are no retries.

mod outcome;
mod request;

use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;
use log::{debug, info, warn};
use reqwest::header::HeaderMap;

use crate::error_handling::categorize_reqwest_error;
use crate::initialization::init_semaphore;

pub use outcome::FetchOutcome;
pub use request::{build_header_map, rdf_headers};

/// Issues a single GET and converts the result into a `FetchOutcome`.
///
/// Only the status and headers are captured; the body is not read.
pub async fn fetch_one(
    client: &reqwest::Client,
    url: &str,
    headers: Option<&HeaderMap>,
) -> FetchOutcome {
    let mut builder = client.get(url);
    if let Some(headers) = headers {
        builder = builder.headers(headers.clone());
    }

    match builder.send().await {
        Ok(resp) => {
            let status = resp.status().as_u16();
            debug!("GET {} -> {} ({})", url, status, resp.url());
            FetchOutcome::Response {
                status,
                headers: resp.headers().clone(),
            }
        }
        Err(e) => {
            let kind = categorize_reqwest_error(&e);
            warn!("GET {} failed: {} ({})", url, kind, e);
            FetchOutcome::NetworkError {
                kind,
                cause: e.to_string(),
            }
        }
    }
}

/// Fetches every URL concurrently and pairs each with its outcome.
///
/// # Arguments
///
/// * `client` - HTTP client (redirects followed)
/// * `urls` - URLs to fetch; duplicates are fetched once per occurrence
/// * `headers` - Headers sent with every request
/// * `max_concurrency` - Maximum in-flight requests (0 = unbounded)
///
/// # Returns
///
/// One `(url, outcome)` pair per input URL, in input order.
pub async fn fetch_many(
    client: &reqwest::Client,
    urls: &[String],
    headers: Option<&HeaderMap>,
    max_concurrency: usize,
) -> Vec<(String, FetchOutcome)> {
    let start_time = Instant::now();
    let semaphore = init_semaphore(max_concurrency);
    info!(
        "Fetching {} URL{} (max concurrency: {})",
        urls.len(),
        if urls.len() == 1 { "" } else { "s" },
        if max_concurrency == 0 {
            "unbounded".to_string()
        } else {
            max_concurrency.to_string()
        }
    );

    let tasks = urls.iter().map(|url| {
        let semaphore = Arc::clone(&semaphore);
        async move {
            // The semaphore is never closed, so acquire only fails if it is
            let _permit = semaphore.acquire().await;
            let outcome = fetch_one(client, url, headers).await;
            (url.clone(), outcome)
        }
    });
    let results = join_all(tasks).await;

    log_batch_summary(start_time, &results);
    results
}

fn log_batch_summary(start_time: Instant, results: &[(String, FetchOutcome)]) {
    let network_errors = results.iter().filter(|(_, o)| o.is_network_error()).count();
    let error_statuses = results
        .iter()
        .filter(|(_, o)| o.is_error() && !o.is_network_error())
        .count();
    info!(
        "Fetched {} URLs in {:.2} seconds ({} error statuses, {} network errors)",
        results.len(),
        start_time.elapsed().as_secs_f64(),
        error_statuses,
        network_errors
    );
}
