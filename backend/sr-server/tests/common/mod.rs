#![allow(dead_code)]

//! Test infrastructure for sr-server API tests

use sr_config::RateLimitConfig;
use sr_server::AppState;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// State with rate limiting disabled
pub fn create_test_app_state() -> AppState {
    AppState::with_rate_limit(&RateLimitConfig {
        enabled: false,
        ..Default::default()
    })
}

/// State with a tiny burst so tests can exhaust it
pub fn create_rate_limited_app_state(max_requests: u32) -> AppState {
    AppState::with_rate_limit(&RateLimitConfig {
        enabled: true,
        max_requests,
        window_secs: 3600,
    })
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send one request and parse the JSON body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    (status, json)
}
