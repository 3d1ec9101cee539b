use crate::{ResponseError, ResponseResult};

use std::collections::BTreeMap;
use std::panic::Location;

use axum::{
    Json,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde_json::Value;

/// Extra headers attached to a response, name to value
pub type ResponseHeaders = BTreeMap<String, String>;

/// Formatted response, ready for the framework to send
///
/// Produced by every `ResponseFormatter` responder. Nothing is written to a
/// transport until axum calls `into_response`.
#[derive(Debug, Clone)]
pub struct JsonResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Value,
}

impl JsonResponse {
    pub(crate) fn new(status: StatusCode, headers: HeaderMap, body: Value) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_body(self) -> Value {
        self.body
    }
}

impl IntoResponse for JsonResponse {
    fn into_response(self) -> Response {
        (self.status, self.headers, Json(self.body)).into_response()
    }
}

/// Convert caller headers into an HTTP header map
///
/// Rejects invalid names or values, and names that collide once lowercased.
#[track_caller]
pub(crate) fn to_header_map(headers: ResponseHeaders) -> ResponseResult<HeaderMap> {
    let caller = Location::caller();
    let mut map = HeaderMap::with_capacity(headers.len());

    for (name, value) in headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| ResponseError::InvalidHeader {
                name: name.clone(),
                message: e.to_string(),
                location: ErrorLocation::from(caller),
            })?;
        let header_value =
            HeaderValue::from_str(&value).map_err(|e| ResponseError::InvalidHeader {
                name: name.clone(),
                message: e.to_string(),
                location: ErrorLocation::from(caller),
            })?;

        if map.contains_key(&header_name) {
            return Err(ResponseError::InvalidHeader {
                name,
                message: format!("duplicate header name {header_name}"),
                location: ErrorLocation::from(caller),
            });
        }

        map.insert(header_name, header_value);
    }

    Ok(map)
}
