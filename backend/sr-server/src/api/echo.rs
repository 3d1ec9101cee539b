//! Diagnostic echo endpoint
//!
//! Returns the decoded request body, so clients can check what the server
//! accepts and how failures are reported.

use crate::ApiJson;

use sr_response::{JsonResponder, JsonResponse, ResponseFormatter, ResponseResult};

use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct EchoRequest {
    pub message: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub message: String,
    pub tags: Vec<String>,
}

/// POST /api/v1/echo
pub async fn echo(
    mut responder: JsonResponder,
    ApiJson(request): ApiJson<EchoRequest>,
) -> ResponseResult<JsonResponse> {
    if request.message.trim().is_empty() {
        return responder.respond_validation_errors(&json!({ "message": ["cannot be empty"] }));
    }

    responder.respond(&EchoResponse {
        message: request.message,
        tags: request.tags,
    })
}
