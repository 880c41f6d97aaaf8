//! Integration tests for the fetcher
//!
//! These tests use wiremock to serve redirect chains and check that the
//! cookie header and hop limits behave as expected.

use shorts_scout::config::FetchConfig;
use shorts_scout::fetch::{build_http_client, fetch_html, fetch_page};
use shorts_scout::ScoutError;
use std::time::Duration;
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn plain_http_client(timeout_secs: u64) -> reqwest::Client {
    let config = FetchConfig {
        https_only: false,
        timeout_secs,
        ..FetchConfig::default()
    };
    build_http_client(&config).expect("Failed to build client")
}

fn redirect_to(status: u16, location: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).insert_header("location", location)
}

#[tokio::test]
async fn test_redirect_chain_keeps_cookie_on_every_hop() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let cookie = "sid=abc123; pref=dark";

    Mock::given(method("GET"))
        .and(path("/start"))
        .and(header("cookie", cookie))
        .respond_with(redirect_to(301, &format!("{}/hop", base_url)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/hop"))
        .and(header("cookie", cookie))
        .respond_with(redirect_to(301, &format!("{}/final", base_url)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/final"))
        .and(header("cookie", cookie))
        .respond_with(ResponseTemplate::new(200).set_body_string("final body"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = plain_http_client(5);
    let page = fetch_page(&client, &format!("{}/start", base_url), Some(cookie), 10)
        .await
        .expect("Fetch failed");

    assert_eq!(page.body, "final body");
    assert_eq!(page.status_code, 200);
    assert_eq!(page.redirects.len(), 2);
    assert_eq!(page.final_url.path(), "/final");
}

#[tokio::test]
async fn test_relative_location_is_resolved() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(redirect_to(302, "/?persist_gl=1"))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("home"))
        .mount(&mock_server)
        .await;

    let client = plain_http_client(5);
    let body = fetch_html(&client, &format!("{}/", mock_server.uri()), None, 10)
        .await
        .expect("Fetch failed");

    assert_eq!(body, "home");
}

#[tokio::test]
async fn test_browser_headers_sent_without_cookie() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header_exists("cookie"))
        .respond_with(ResponseTemplate::new(200).set_body_string("cookie sent"))
        .expect(0)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(header_exists("user-agent"))
        .and(header_exists("accept"))
        .and(header_exists("accept-language"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = plain_http_client(5);
    // An empty cookie string means no Cookie header at all
    let page = fetch_page(&client, &mock_server.uri(), Some(""), 10)
        .await
        .expect("Fetch failed");
    assert_eq!(page.body, "ok");
}

#[tokio::test]
async fn test_redirect_limit() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    for (from, to) in [("/r1", "/r2"), ("/r2", "/r3"), ("/r3", "/r4")] {
        Mock::given(method("GET"))
            .and(path(from))
            .respond_with(redirect_to(301, &format!("{}{}", base_url, to)))
            .mount(&mock_server)
            .await;
    }

    let client = plain_http_client(5);
    let result = fetch_html(&client, &format!("{}/r1", base_url), None, 2).await;

    assert!(
        matches!(result, Err(ScoutError::RedirectLimit { limit: 2, .. })),
        "Expected RedirectLimit, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_redirect_loop() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(redirect_to(302, &format!("{}/b", base_url)))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(redirect_to(302, &format!("{}/a", base_url)))
        .mount(&mock_server)
        .await;

    let client = plain_http_client(5);
    let result = fetch_html(&client, &format!("{}/a", base_url), None, 10).await;

    assert!(
        matches!(result, Err(ScoutError::RedirectLoop { .. })),
        "Expected RedirectLoop, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_redirect_without_location_returns_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/moved"))
        .respond_with(ResponseTemplate::new(300).set_body_string("choose one"))
        .mount(&mock_server)
        .await;

    let client = plain_http_client(5);
    let page = fetch_page(&client, &format!("{}/moved", mock_server.uri()), None, 10)
        .await
        .expect("Fetch failed");

    assert_eq!(page.status_code, 300);
    assert_eq!(page.body, "choose one");
    assert!(page.redirects.is_empty());
}

#[tokio::test]
async fn test_error_status_body_is_returned() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&mock_server)
        .await;

    let client = plain_http_client(5);
    let body = fetch_html(&client, &mock_server.uri(), None, 10)
        .await
        .expect("Fetch failed");
    assert_eq!(body, "slow down");
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("late")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let client = plain_http_client(1);
    let result = fetch_html(&client, &mock_server.uri(), None, 10).await;

    assert!(
        matches!(result, Err(ScoutError::Timeout { .. })),
        "Expected Timeout, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_connection_refused() {
    let client = plain_http_client(5);
    let result = fetch_html(&client, "http://127.0.0.1:1/", None, 10).await;

    assert!(
        matches!(result, Err(ScoutError::Http { .. })),
        "Expected Http error, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_https_only_rejects_plain_http() {
    let mock_server = MockServer::start().await;

    let client = build_http_client(&FetchConfig::default()).expect("Failed to build client");
    let result = fetch_html(&client, &mock_server.uri(), None, 10).await;

    assert!(result.is_err());
}
