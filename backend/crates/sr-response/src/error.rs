//! Failures while building a response value.
//!
//! These never come from the outcome being reported; they mean the
//! formatter itself could not produce a valid HTTP response.

use crate::{ErrorEnvelope, messages};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResponseError {
    /// Response data could not be converted to JSON
    #[error("Failed to serialize response body: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    /// Pending status code is not a valid HTTP status (100-999)
    #[error("Invalid HTTP status code: {code} {location}")]
    InvalidStatusCode { code: u16, location: ErrorLocation },

    /// Header name or value rejected by the HTTP layer
    #[error("Invalid header {name}: {message} {location}")]
    InvalidHeader {
        name: String,
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ResponseError {
    fn into_response(self) -> Response {
        log::error!("{}", self);

        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = ErrorEnvelope::new(status.as_u16(), messages::INTERNAL_ERROR);

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ResponseError>;
