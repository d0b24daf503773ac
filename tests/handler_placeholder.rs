mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use placeholder::domain::etag::{placeholder_etag, quote};

fn server() -> (TestServer, std::sync::Arc<common::CountingCache>) {
    let (state, cache) = common::create_test_state();
    let server = TestServer::new(common::test_app(state)).unwrap();
    (server, cache)
}

#[tokio::test]
async fn test_image_success() {
    let (server, _cache) = server();

    let response = server.get("/image/50x50").await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/png");
    assert_eq!(response.header("cache-control"), "public, max-age=3600");

    let image = image::load_from_memory(response.as_bytes()).unwrap();
    assert_eq!((image.width(), image.height()), (50, 50));
}

#[tokio::test]
async fn test_image_dimensions_match_request() {
    let (server, _cache) = server();

    for (width, height) in [(1, 1), (2000, 1), (1, 2000), (640, 480), (123, 77)] {
        let response = server.get(&format!("/image/{}x{}", width, height)).await;
        response.assert_status_ok();

        let image = image::load_from_memory(response.as_bytes()).unwrap();
        assert_eq!((image.width(), image.height()), (width, height));
    }
}

#[tokio::test]
async fn test_image_invalid_requests() {
    let (server, cache) = server();

    for path in [
        "/image/0x50",
        "/image/50x0",
        "/image/2001x50",
        "/image/50x2001",
        "/image/-1x50",
        "/image/abcx50",
        "/image/50x",
        "/image/x50",
        "/image/50",
        "/image/1.5x50",
        "/image/+50x50",
        "/image/50x+50",
        "/image/%2050x50",
    ] {
        let response = server.get(path).await;

        response.assert_status_bad_request();
        assert_eq!(response.text(), "Invalid Image Request.", "path {}", path);
    }

    assert_eq!(cache.gets(), 0);
    assert_eq!(cache.sets(), 0);
}

#[tokio::test]
async fn test_image_second_request_hits_cache() {
    let (server, cache) = server();

    let first = server.get("/image/300x200").await;
    first.assert_status_ok();
    assert_eq!(cache.sets(), 1);

    let second = server.get("/image/300x200").await;
    second.assert_status_ok();

    assert_eq!(first.as_bytes(), second.as_bytes());
    assert_eq!(cache.gets(), 2);
    assert_eq!(cache.sets(), 1);
    assert!(cache.peek("300.200.PNG").await.is_some());
}

#[tokio::test]
async fn test_image_cache_hit_returns_stored_bytes() {
    let (server, cache) = server();
    cache.seed("40.30.PNG", b"stored-bytes").await;

    let response = server.get("/image/40x30").await;

    response.assert_status_ok();
    assert_eq!(&response.as_bytes()[..], b"stored-bytes");
    assert_eq!(cache.sets(), 0);
}

#[tokio::test]
async fn test_image_etag_header() {
    let (server, _cache) = server();

    let response = server.get("/image/50x50").await;

    response.assert_status_ok();
    let expected = quote(&placeholder_etag("50", "50"));
    assert_eq!(response.header("etag"), expected.as_str());
}

#[tokio::test]
async fn test_image_etag_independent_of_cache_state() {
    let (server, cache) = server();

    let miss = server.get("/image/80x60").await;
    let hit = server.get("/image/80x60").await;

    assert_eq!(miss.header("etag"), hit.header("etag"));

    cache.seed("90.60.PNG", b"something-else").await;
    let seeded = server.get("/image/90x60").await;
    assert_eq!(
        seeded.header("etag"),
        quote(&placeholder_etag("90", "60")).as_str()
    );
}

#[tokio::test]
async fn test_image_not_modified() {
    let (server, cache) = server();
    let etag = quote(&placeholder_etag("64", "64"));

    let response = server
        .get("/image/64x64")
        .add_header("If-None-Match", etag.clone())
        .await;

    response.assert_status(StatusCode::NOT_MODIFIED);
    assert!(response.as_bytes().is_empty());
    assert_eq!(response.header("etag"), etag.as_str());

    assert_eq!(cache.gets(), 0);
    assert_eq!(cache.sets(), 0);
}

#[tokio::test]
async fn test_image_not_modified_weak_and_wildcard() {
    let (server, _cache) = server();
    let etag = quote(&placeholder_etag("64", "64"));

    let weak = server
        .get("/image/64x64")
        .add_header("If-None-Match", format!("W/{}", etag))
        .await;
    weak.assert_status(StatusCode::NOT_MODIFIED);

    let wildcard = server
        .get("/image/64x64")
        .add_header("If-None-Match", "*")
        .await;
    wildcard.assert_status(StatusCode::NOT_MODIFIED);
}

#[tokio::test]
async fn test_image_stale_etag_returns_body() {
    let (server, _cache) = server();
    let other = quote(&placeholder_etag("65", "64"));

    let response = server
        .get("/image/64x64")
        .add_header("If-None-Match", other)
        .await;

    response.assert_status_ok();
    assert!(!response.as_bytes().is_empty());
}

#[tokio::test]
async fn test_image_if_match_mismatch() {
    let (server, cache) = server();

    let response = server
        .get("/image/64x64")
        .add_header("If-Match", "\"not-the-tag\"")
        .await;

    response.assert_status(StatusCode::PRECONDITION_FAILED);
    assert_eq!(cache.gets(), 0);

    let etag = quote(&placeholder_etag("64", "64"));
    let matching = server
        .get("/image/64x64")
        .add_header("If-Match", etag)
        .await;
    matching.assert_status_ok();
}

#[tokio::test]
async fn test_invalid_request_has_no_etag() {
    let (server, _cache) = server();

    let response = server.get("/image/0x0").await;

    response.assert_status_bad_request();
    assert!(response.maybe_header("etag").is_none());
}
