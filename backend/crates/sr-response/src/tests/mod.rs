mod json_response;

use axum::response::{IntoResponse, Response};
use http_body_util::BodyExt;

/// Collect a response body and parse it as JSON
pub(crate) async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Convert anything axum can send and parse its body
pub(crate) async fn into_json<R: IntoResponse>(value: R) -> (http::StatusCode, serde_json::Value) {
    let response = value.into_response();
    let status = response.status();
    (status, body_json(response).await)
}
