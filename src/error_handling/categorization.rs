//! Request error categorization.

use super::types::NetworkErrorKind;

/// Categorizes a `reqwest::Error` into a `NetworkErrorKind`.
///
/// Used by both the redirect validator and the bulk fetcher so that the two
/// paths report network failures with the same vocabulary.
///
/// Timeouts are checked before connect errors: a connect timeout sets both
/// flags and is more useful reported as a timeout.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> NetworkErrorKind {
    if error.is_builder() {
        NetworkErrorKind::Builder
    } else if error.is_redirect() {
        NetworkErrorKind::Redirect
    } else if error.is_timeout() {
        NetworkErrorKind::Timeout
    } else if error.is_connect() {
        NetworkErrorKind::Connect
    } else if error.is_request() {
        NetworkErrorKind::Request
    } else if error.is_body() {
        NetworkErrorKind::Body
    } else if error.is_decode() {
        NetworkErrorKind::Decode
    } else {
        NetworkErrorKind::Other
    }
}
