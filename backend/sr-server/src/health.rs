use sr_response::{JsonResponder, JsonResponse, ResponseFormatter, ResponseResult};

use std::time::SystemTime;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Service health with version
pub async fn health_check(responder: JsonResponder) -> ResponseResult<JsonResponse> {
    responder.respond(&json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": humantime::format_rfc3339(SystemTime::now()).to_string(),
    }))
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (ready to accept traffic?)
pub async fn readiness_check() -> Response {
    (StatusCode::OK, "Ready").into_response()
}
