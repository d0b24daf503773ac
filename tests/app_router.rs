mod common;

use axum::ServiceExt;
use axum::extract::Request;
use axum::http::{Method, StatusCode};
use axum_test::TestServer;
use placeholder::config::Config;
use placeholder::domain::etag::{placeholder_etag, quote};
use placeholder::routes::app_router;
use std::net::SocketAddr;

fn config(rate_limit_burst: u32) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        redis_url: None,
        cache_enabled: true,
        cache_ttl_seconds: 3600,
        cache_max_entries: 100,
        rate_limit_replenish_ms: 60_000,
        rate_limit_burst,
    }
}

/// Serves the production router over a real socket so the rate limiter sees a peer address.
fn server(rate_limit_burst: u32) -> TestServer {
    let (state, _cache) = common::create_test_state();
    let app = app_router(state, &config(rate_limit_burst)).unwrap();
    let app = ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app);

    TestServer::builder().http_transport().build(app).unwrap()
}

#[tokio::test]
async fn test_trailing_slash_image_url() {
    let server = server(100);

    let response = server.get("/image/50x50/").await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/png");
    assert_eq!(
        response.header("etag"),
        quote(&placeholder_etag("50", "50")).as_str()
    );

    let image = image::load_from_memory(response.as_bytes()).unwrap();
    assert_eq!((image.width(), image.height()), (50, 50));
}

#[tokio::test]
async fn test_head_returns_headers_without_body() {
    let server = server(100);

    let response = server.method(Method::HEAD, "/image/50x50/").await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/png");
    assert!(response.as_bytes().is_empty());
}

#[tokio::test]
async fn test_image_routes_are_rate_limited() {
    let server = server(1);

    server.get("/image/20x20/").await.assert_status_ok();

    let limited = server.get("/image/20x20/").await;
    limited.assert_status(StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_rate_limit_does_not_cover_health() {
    let server = server(1);

    server.get("/image/20x20/").await.assert_status_ok();

    server.get("/health").await.assert_status_ok();
    server.get("/health").await.assert_status_ok();
}
