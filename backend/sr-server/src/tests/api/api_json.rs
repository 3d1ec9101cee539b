use crate::{ApiJson, EchoRequest};

use axum::{
    body::Body,
    extract::FromRequest,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;

fn json_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn rejection_json(rejection: axum::response::Response) -> serde_json::Value {
    let body = rejection.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_valid_body_extracts_value() {
    let request = json_request(r#"{"message": "hi", "tags": ["a"]}"#);

    let result = ApiJson::<EchoRequest>::from_request(request, &()).await;

    let ApiJson(echo) = result.ok().unwrap();
    assert_eq!(echo.message, "hi");
    assert_eq!(echo.tags, vec!["a".to_string()]);
}

#[tokio::test]
async fn test_syntax_error_rejected_with_400_envelope() {
    let request = json_request(r#"{"message": "#);

    let rejection = ApiJson::<EchoRequest>::from_request(request, &())
        .await
        .err()
        .unwrap();

    assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
    let json = rejection_json(rejection).await;
    assert_eq!(json["error"]["http_code"], 400);
    assert!(!json["error"]["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_wrong_shape_rejected_with_422_validation_envelope() {
    let request = json_request(r#"{"tags": ["missing message"]}"#);

    let rejection = ApiJson::<EchoRequest>::from_request(request, &())
        .await
        .err()
        .unwrap();

    assert_eq!(rejection.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = rejection_json(rejection).await;
    let reasons = json["errors"]["body"].as_array().unwrap();
    assert_eq!(reasons.len(), 1);
    assert!(reasons[0].as_str().unwrap().contains("message"));
}

#[tokio::test]
async fn test_missing_content_type_rejected_with_400() {
    let request = Request::builder()
        .method("POST")
        .body(Body::from(r#"{"message": "hi"}"#))
        .unwrap();

    let rejection = ApiJson::<EchoRequest>::from_request(request, &())
        .await
        .err()
        .unwrap();

    assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_oversized_body_keeps_413_in_envelope() {
    let oversized = format!(r#"{{"message": "{}"}}"#, "a".repeat(3 * 1024 * 1024));
    let request = Request::builder()
        .method("POST")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(oversized))
        .unwrap();

    let rejection = ApiJson::<EchoRequest>::from_request(request, &())
        .await
        .err()
        .unwrap();

    assert_eq!(rejection.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let json = rejection_json(rejection).await;
    assert_eq!(json["error"]["http_code"], 413);
}
