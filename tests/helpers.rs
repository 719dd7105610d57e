// Shared test helpers for mapping files and HTTP clients.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::io::Write;

use iri_check::initialization::{init_client, init_redirect_client};
use iri_check::Config;
use tempfile::NamedTempFile;

/// Writes a mapping document to a temporary file.
#[allow(dead_code)] // Used by other test files
pub fn write_mapping(json: &serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    write!(file, "{}", json).expect("Failed to write mapping");
    file.flush().expect("Failed to flush file");
    file
}

/// Config with a short timeout for tests.
#[allow(dead_code)] // Used by other test files
pub fn test_config() -> Config {
    Config {
        timeout_seconds: 5,
        user_agent: "iri_check_test/1.0".to_string(),
        ..Default::default()
    }
}

/// Client with redirects disabled, as used by the redirect check.
#[allow(dead_code)] // Used by other test files
pub fn redirect_client() -> reqwest::Client {
    init_redirect_client(&test_config())
        .expect("Failed to build client")
        .as_ref()
        .clone()
}

/// Client that follows redirects, as used by the failure checks.
#[allow(dead_code)] // Used by other test files
pub fn following_client() -> reqwest::Client {
    init_client(&test_config())
        .expect("Failed to build client")
        .as_ref()
        .clone()
}

/// URL on a local port that nothing is listening on.
#[allow(dead_code)] // Used by other test files
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{}/", addr)
}
