//! Integration tests for bulk fetching and the failure classifiers.

mod helpers;

use std::time::{Duration, Instant};

use iri_check::fetch::rdf_headers;
use iri_check::{fetch_many, http_failures, http_rdf_failures, ld_failures, FetchOutcome};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use helpers::{closed_port_url, following_client};

async fn mount_status(server: &MockServer, at: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Server where `/html` fails RDF negotiation, `/rdf` fails plain GET,
/// `/both` is fine and `/gone` fails both.
async fn negotiation_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/html"))
        .and(header("accept", "text/turtle"))
        .respond_with(ResponseTemplate::new(406))
        .with_priority(1)
        .mount(&server)
        .await;
    mount_status(&server, "/html", 200).await;
    Mock::given(method("GET"))
        .and(path("/rdf"))
        .and(header("accept", "text/turtle"))
        .respond_with(ResponseTemplate::new(200))
        .with_priority(1)
        .mount(&server)
        .await;
    mount_status(&server, "/rdf", 415).await;
    mount_status(&server, "/both", 200).await;
    mount_status(&server, "/gone", 410).await;
    server
}

#[tokio::test]
async fn test_fetch_many_pairs_each_url_with_its_outcome() {
    let server = MockServer::start().await;
    mount_status(&server, "/ok", 200).await;
    mount_status(&server, "/missing", 404).await;
    mount_status(&server, "/broken", 503).await;
    let down = closed_port_url();
    let urls = vec![
        format!("{}/broken", server.uri()),
        format!("{}/ok", server.uri()),
        down.clone(),
        format!("{}/missing", server.uri()),
    ];

    let results = fetch_many(&following_client(), &urls, None, 0).await;

    assert_eq!(results.len(), urls.len());
    let returned_urls: Vec<_> = results.iter().map(|(u, _)| u.clone()).collect();
    assert_eq!(returned_urls, urls);
    assert_eq!(results[0].1.status(), Some(503));
    assert_eq!(results[1].1.status(), Some(200));
    assert!(results[2].1.is_network_error());
    assert_eq!(results[2].1.status_code(), 500);
    assert_eq!(results[3].1.status(), Some(404));
}

#[tokio::test]
async fn test_fetch_many_pairing_survives_completion_order() {
    // The first URL finishes last
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(404).set_delay(Duration::from_millis(300)))
        .mount(&server)
        .await;
    mount_status(&server, "/fast", 200).await;
    let urls = vec![
        format!("{}/slow", server.uri()),
        format!("{}/fast", server.uri()),
    ];

    let results = fetch_many(&following_client(), &urls, None, 0).await;

    assert_eq!(results[0].0, urls[0]);
    assert_eq!(results[0].1.status(), Some(404));
    assert_eq!(results[1].0, urls[1]);
    assert_eq!(results[1].1.status(), Some(200));
}

#[tokio::test]
async fn test_fetch_many_follows_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/id"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("Location", format!("{}/doc", server.uri())),
        )
        .mount(&server)
        .await;
    mount_status(&server, "/doc", 200).await;
    let urls = vec![format!("{}/id", server.uri())];

    let results = fetch_many(&following_client(), &urls, None, 0).await;

    assert_eq!(results[0].1.status(), Some(200));
}

#[tokio::test]
async fn test_fetch_many_sends_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ttl"))
        .and(header("accept", "text/turtle"))
        .respond_with(ResponseTemplate::new(200).insert_header("Content-Type", "text/turtle"))
        .mount(&server)
        .await;
    let urls = vec![format!("{}/ttl", server.uri())];
    let headers = rdf_headers();

    let results = fetch_many(&following_client(), &urls, Some(&headers), 0).await;

    match &results[0].1 {
        FetchOutcome::Response { status, headers } => {
            assert_eq!(*status, 200);
            assert_eq!(
                headers.get("content-type").and_then(|v| v.to_str().ok()),
                Some("text/turtle")
            );
        }
        other => panic!("Expected a response, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_many_bounded_concurrency_serializes_requests() {
    let delay = Duration::from_millis(200);
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(delay))
        .mount(&server)
        .await;
    let urls: Vec<_> = (0..4).map(|i| format!("{}/{}", server.uri(), i)).collect();

    let start = Instant::now();
    let results = fetch_many(&following_client(), &urls, None, 1).await;
    let elapsed = start.elapsed();

    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|(_, o)| o.status() == Some(200)));
    assert!(
        elapsed >= delay * 4,
        "One permit should run requests one at a time, took {:?}",
        elapsed
    );
}

#[tokio::test]
async fn test_fetch_many_unbounded_runs_concurrently() {
    let delay = Duration::from_millis(300);
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(delay))
        .mount(&server)
        .await;
    let urls: Vec<_> = (0..4).map(|i| format!("{}/{}", server.uri(), i)).collect();

    let start = Instant::now();
    let results = fetch_many(&following_client(), &urls, None, 0).await;
    let elapsed = start.elapsed();

    assert_eq!(results.len(), 4);
    assert!(
        elapsed < delay * 4,
        "Unbounded batch should overlap requests, took {:?}",
        elapsed
    );
}

#[tokio::test]
async fn test_http_failures_reports_only_error_statuses() {
    let server = MockServer::start().await;
    mount_status(&server, "/good", 200).await;
    mount_status(&server, "/404", 404).await;
    let good = format!("{}/good", server.uri());
    let missing = format!("{}/404", server.uri());

    let failures = http_failures(&following_client(), &[good, missing.clone()], 0).await;

    assert_eq!(failures, vec![(missing, 404)]);
}

#[tokio::test]
async fn test_http_failures_unreachable_is_500() {
    let down = closed_port_url();
    let failures = http_failures(&following_client(), &[down.clone()], 0).await;
    assert_eq!(failures, vec![(down, 500)]);
}

#[tokio::test]
async fn test_http_rdf_failures_uses_turtle() {
    let server = negotiation_server().await;
    let urls: Vec<_> = ["/html", "/rdf", "/both"]
        .iter()
        .map(|p| format!("{}{}", server.uri(), p))
        .collect();

    let plain = http_failures(&following_client(), &urls, 0).await;
    let rdf = http_rdf_failures(&following_client(), &urls, 0).await;

    assert_eq!(plain, vec![(urls[1].clone(), 415)]);
    assert_eq!(rdf, vec![(urls[0].clone(), 406)]);
}

#[tokio::test]
async fn test_ld_failures_reports_either_failure() {
    let server = negotiation_server().await;
    let urls: Vec<_> = ["/html", "/rdf", "/both", "/gone"]
        .iter()
        .map(|p| format!("{}{}", server.uri(), p))
        .collect();

    let failures = ld_failures(&following_client(), &urls, 2).await;

    let summary: Vec<_> = failures
        .iter()
        .map(|f| (f.url.clone(), f.plain.status(), f.rdf.status()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (urls[0].clone(), Some(200), Some(406)),
            (urls[1].clone(), Some(415), Some(200)),
            (urls[3].clone(), Some(410), Some(410)),
        ]
    );
}

#[tokio::test]
async fn test_ld_failures_none_when_all_succeed() {
    let server = MockServer::start().await;
    mount_status(&server, "/ok", 200).await;
    let urls = vec![format!("{}/ok", server.uri())];

    let failures = ld_failures(&following_client(), &urls, 0).await;

    assert!(failures.is_empty());
}
