//! Request header construction.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};

use crate::config::RDF_ACCEPT;
use crate::domain::RequestHeaders;

/// Converts an identifier test's headers into a `HeaderMap`.
///
/// Entries whose name or value is not a valid HTTP header are skipped with a
/// warning, so one bad entry doesn't prevent the request from being made.
pub fn build_header_map(headers: &RequestHeaders) -> HeaderMap {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = match HeaderName::from_bytes(name.as_bytes()) {
            Ok(n) => n,
            Err(e) => {
                log::warn!("Skipping invalid header name {:?}: {}", name, e);
                continue;
            }
        };
        let header_value = match HeaderValue::from_str(value) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("Skipping invalid value for header {}: {}", name, e);
                continue;
            }
        };
        map.insert(header_name, header_value);
    }
    map
}

/// Headers for an RDF-negotiated request (`Accept: text/turtle`).
pub fn rdf_headers() -> HeaderMap {
    let mut map = HeaderMap::new();
    map.insert(ACCEPT, HeaderValue::from_static(RDF_ACCEPT));
    map
}
