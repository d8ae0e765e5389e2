mod common;

use axum::http::{HeaderValue, header};
use axum_test::TestServer;
use exoplanet_proxy::routes::RouterSettings;
use httpmock::prelude::*;
use serde_json::Value;

fn settings(rate_limit_per_minute: u32) -> RouterSettings {
    RouterSettings {
        rate_limit_per_minute,
        ..RouterSettings::default()
    }
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let state = common::create_test_state("http://127.0.0.1:1/TAP/sync");
    let server = TestServer::new(common::test_router(state, &settings(10))).unwrap();

    let response = server.get("/api/unknown").await;

    response.assert_status_not_found();
    let json = response.json::<Value>();
    assert_eq!(json["error"], "Endpoint not found");

    let response = server.get("/nothing/here").await;
    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"], "Endpoint not found");

    for response in [
        server.post("/health").await,
        server.post("/api/exoplanets/Kepler-11").await,
        server.delete("/api/popular-systems").await,
    ] {
        response.assert_status_not_found();
        let json = response.json::<Value>();
        assert_eq!(json["error"], "Endpoint not found");
        assert_eq!(json["code"], "route_not_found");
    }
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let state = common::create_test_state("http://127.0.0.1:1/TAP/sync");
    let server =
        TestServer::new(common::normalized_test_router(state, &settings(10))).unwrap();

    server.get("/health/").await.assert_status_ok();

    let response = server.get("/api/popular-systems/").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["systems"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_health_is_not_rate_limited() {
    let state = common::create_test_state("http://127.0.0.1:1/TAP/sync");
    let server = TestServer::new(common::test_router(state, &settings(1))).unwrap();

    for _ in 0..5 {
        server.get("/health").await.assert_status_ok();
    }
}

#[tokio::test]
async fn test_api_rate_limit_returns_json_429() {
    let state = common::create_test_state("http://127.0.0.1:1/TAP/sync");
    let server = TestServer::new(common::test_router(state, &settings(2))).unwrap();

    server.get("/api/popular-systems").await.assert_status_ok();
    server.get("/api/popular-systems").await.assert_status_ok();

    let response = server.get("/api/popular-systems").await;

    assert_eq!(response.status_code(), 429);
    let json = response.json::<Value>();
    assert_eq!(
        json["error"],
        "Too many requests from this IP, please try again later."
    );
    assert_eq!(json["code"], "rate_limited");
}

#[tokio::test]
async fn test_rate_limited_request_never_reaches_archive() {
    let archive = MockServer::start_async().await;
    let mock = archive
        .mock_async(|when, then| {
            when.method(GET).path(common::TAP_PATH);
            then.status(200).json_body(common::kepler_11_rows());
        })
        .await;

    let state = common::create_test_state(&archive.url(common::TAP_PATH));
    let server = TestServer::new(common::test_router(state, &settings(1))).unwrap();

    server
        .get("/api/exoplanets/Kepler-11")
        .await
        .assert_status_ok();
    let response = server.get("/api/exoplanets/Kepler-11").await;

    assert_eq!(response.status_code(), 429);
    assert_eq!(mock.hits_async().await, 1);
}

#[tokio::test]
async fn test_proxied_limiter_keys_on_forwarded_ip() {
    let state = common::create_test_state("http://127.0.0.1:1/TAP/sync");
    let settings = RouterSettings {
        behind_proxy: true,
        ..settings(1)
    };
    let server = TestServer::new(common::test_router(state, &settings)).unwrap();

    server
        .get("/api/popular-systems")
        .add_header("x-forwarded-for", "203.0.113.1")
        .await
        .assert_status_ok();
    server
        .get("/api/popular-systems")
        .add_header("x-forwarded-for", "203.0.113.2")
        .await
        .assert_status_ok();

    let response = server
        .get("/api/popular-systems")
        .add_header("x-forwarded-for", "203.0.113.1")
        .await;
    assert_eq!(response.status_code(), 429);
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let state = common::create_test_state("http://127.0.0.1:1/TAP/sync");
    let server = TestServer::new(common::test_router(state, &settings(10))).unwrap();

    let response = server
        .get("/health")
        .add_header("origin", "http://localhost:3000")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static("http://localhost:3000"))
    );
}

#[tokio::test]
async fn test_cors_rejects_unknown_origin() {
    let state = common::create_test_state("http://127.0.0.1:1/TAP/sync");
    let server = TestServer::new(common::test_router(state, &settings(10))).unwrap();

    let response = server
        .get("/health")
        .add_header("origin", "https://evil.example")
        .await;

    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}
