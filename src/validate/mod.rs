//! Redirect validation.
//!
//! Each identifier is requested once with redirects disabled and the
//! `Location` header of the response is compared to the expected IRI by
//! exact string equality. No normalization is applied: a trailing slash or
//! a differently-cased scheme is a mismatch.

use log::{debug, info, warn};
use reqwest::header::LOCATION;
use serde::Serialize;

use crate::config::{INVALID_REDIRECT_MESSAGE, REQUEST_FAILED_MESSAGE};
use crate::domain::{DomainMapping, IdentifierTest, RequestHeaders};
use crate::error_handling::{categorize_reqwest_error, NetworkErrorKind};
use crate::fetch::build_header_map;

/// How a redirect check ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RedirectOutcome {
    /// `Location` equals the expected IRI
    Matched,
    /// A response arrived but `Location` differs or is missing
    Mismatched {
        /// Status of the (unfollowed) response
        status: u16,
    },
    /// No response was received
    NetworkError {
        /// Failure category
        error: NetworkErrorKind,
        /// Error message from the HTTP client
        cause: String,
    },
}

/// Result of checking one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Label of the identifier test
    pub label: String,
    /// True only for `RedirectOutcome::Matched`
    pub success: bool,
    /// Empty on success
    pub message: String,
    /// IRI that was requested
    pub from_iri: String,
    /// Expected `Location`
    pub expected_result: String,
    /// `Location` value that was returned, if any
    pub actual_result: Option<String>,
    /// Headers sent with the request
    pub request_headers: Option<RequestHeaders>,
    /// How the check ended
    pub outcome: RedirectOutcome,
}

/// Checks that `from_iri` redirects to exactly `to_iri`.
///
/// `client` must have redirects disabled (see `init_redirect_client`),
/// otherwise the final response is inspected instead of the redirect.
///
/// Network failures produce a failed result rather than an error, so one
/// unreachable identifier never stops a batch.
pub async fn validate_redirect(
    client: &reqwest::Client,
    label: &str,
    from_iri: &str,
    from_headers: Option<&RequestHeaders>,
    to_iri: &str,
) -> ValidationResult {
    let mut builder = client.get(from_iri);
    if let Some(headers) = from_headers {
        builder = builder.headers(build_header_map(headers));
    }

    let (outcome, actual_result) = match builder.send().await {
        Ok(resp) => {
            let location = resp
                .headers()
                .get(LOCATION)
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());
            let status = resp.status().as_u16();
            debug!("GET {} -> {} Location: {:?}", from_iri, status, location);
            let outcome = if location.as_deref() == Some(to_iri) {
                RedirectOutcome::Matched
            } else {
                RedirectOutcome::Mismatched { status }
            };
            (outcome, location)
        }
        Err(e) => {
            let error = categorize_reqwest_error(&e);
            warn!("GET {} failed: {} ({})", from_iri, error, e);
            (
                RedirectOutcome::NetworkError {
                    error,
                    cause: e.to_string(),
                },
                None,
            )
        }
    };

    let message = match &outcome {
        RedirectOutcome::Matched => String::new(),
        RedirectOutcome::Mismatched { .. } => INVALID_REDIRECT_MESSAGE.to_string(),
        RedirectOutcome::NetworkError { cause, .. } => {
            format!("{}: {}", REQUEST_FAILED_MESSAGE, cause)
        }
    };

    ValidationResult {
        label: label.to_string(),
        success: outcome == RedirectOutcome::Matched,
        message,
        from_iri: from_iri.to_string(),
        expected_result: to_iri.to_string(),
        actual_result,
        request_headers: from_headers.cloned(),
        outcome,
    }
}

/// Checks one identifier test record.
pub async fn validate_test(client: &reqwest::Client, test: &IdentifierTest) -> ValidationResult {
    validate_redirect(
        client,
        &test.label,
        &test.from_iri,
        test.from_headers.as_ref(),
        &test.to_iri,
    )
    .await
}

/// Checks every identifier in the mapping, one at a time.
///
/// Returns exactly one result per test, in `DomainMapping::iter_tests` order.
pub async fn validate_all(
    client: &reqwest::Client,
    mapping: &DomainMapping,
) -> Vec<ValidationResult> {
    let start_time = std::time::Instant::now();
    let total = mapping.len();
    info!(
        "Validating {} redirect{}",
        total,
        if total == 1 { "" } else { "s" }
    );

    let mut results = Vec::with_capacity(total);
    for (category, test) in mapping.iter_tests() {
        let result = validate_test(client, test).await;
        if !result.success {
            warn!(
                "[{}] \"{}\" expected {} got {}",
                category,
                result.label,
                result.expected_result,
                result.actual_result.as_deref().unwrap_or("nothing")
            );
        }
        results.push(result);
    }

    let failed = results.iter().filter(|r| !r.success).count();
    info!(
        "Validated {} redirects in {:.2} seconds ({} failed)",
        results.len(),
        start_time.elapsed().as_secs_f64(),
        failed
    );
    results
}
