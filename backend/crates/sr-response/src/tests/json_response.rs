use crate::tests::into_json;
use crate::{JsonResponder, ResponseError, ResponseFormatter, ResponseHeaders};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::{StatusCode, header::CONTENT_TYPE};
use serde_json::json;

#[tokio::test]
async fn test_not_found_converts_to_404_with_json_body() {
    let mut responder = JsonResponder::new();
    let response = responder.response_not_found(None).unwrap().into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/json");

    let json = crate::tests::body_json(response).await;

    assert_eq!(json["error"]["http_code"], 404);
    assert_eq!(json["error"]["message"], "Not Found!");
}

#[tokio::test]
async fn test_validation_errors_convert_to_422() {
    let mut responder = JsonResponder::new();
    let response = responder
        .respond_validation_errors(&json!({"email": ["invalid format"]}))
        .unwrap();

    let (status, json) = into_json(response).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json, json!({"errors": {"email": ["invalid format"]}}));
}

#[tokio::test]
async fn test_custom_headers_survive_conversion() {
    let responder = JsonResponder::new();
    let mut headers = ResponseHeaders::new();
    headers.insert("Retry-After".into(), "30".into());

    let response = responder
        .respond_with_headers(&json!({"ok": true}), headers)
        .unwrap()
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["retry-after"], "30");
    assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
}

#[tokio::test]
async fn test_response_error_converts_to_500_envelope() {
    let error = ResponseError::InvalidStatusCode {
        code: 42,
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json,
        json!({"error": {"http_code": 500, "message": "Internal Error!"}})
    );
}

#[tokio::test]
async fn test_handler_result_with_invalid_status_renders_500() {
    let mut responder = JsonResponder::new();
    let result = responder.set_status_code(1000).respond(&json!({}));

    let (status, json) = into_json(result).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["http_code"], 500);
}

#[test]
fn test_response_error_display_includes_code() {
    let error = ResponseError::InvalidStatusCode {
        code: 7,
        location: ErrorLocation::from(Location::caller()),
    };

    assert!(error.to_string().contains("Invalid HTTP status code: 7"));
}

#[test]
fn test_into_body_returns_owned_value() {
    let responder = JsonResponder::new();

    let body = responder.respond(&json!({"n": 1})).unwrap().into_body();

    assert_eq!(body, json!({"n": 1}));
}
