//! The response formatting capability.
//!
//! Implementors only track a pending status code; every responder is a
//! provided method. Handler types that embed a [`crate::JsonResponder`] can
//! implement this trait by delegating the two accessors.

use crate::json_response::to_header_map;
use crate::{
    DEFAULT_STATUS_CODE, ErrorEnvelope, JsonResponse, ResponseError, ResponseHeaders,
    ResponseResult, VALIDATION_STATUS_CODE, ValidationEnvelope, messages,
};

use std::panic::Location;

use axum::http::StatusCode;
use error_location::ErrorLocation;
use serde::Serialize;

pub trait ResponseFormatter {
    /// Current pending status code
    fn status_code(&self) -> u16;

    /// Overwrite the pending status code. Not range-checked here; an invalid
    /// code is reported when a response is built.
    fn set_status_code(&mut self, status_code: u16) -> &mut Self;

    /// Restore the default status code (200)
    fn reset(&mut self) -> &mut Self {
        self.set_status_code(DEFAULT_STATUS_CODE)
    }

    // =========================================================================
    // Generic responders
    // =========================================================================

    /// Serialize `data` with the current status code and no extra headers
    #[track_caller]
    fn respond<T>(&self, data: &T) -> ResponseResult<JsonResponse>
    where
        T: Serialize + ?Sized,
    {
        self.respond_with_headers(data, ResponseHeaders::new())
    }

    /// Serialize `data` with the current status code and the given headers
    #[track_caller]
    fn respond_with_headers<T>(
        &self,
        data: &T,
        headers: ResponseHeaders,
    ) -> ResponseResult<JsonResponse>
    where
        T: Serialize + ?Sized,
    {
        let caller = Location::caller();
        let code = self.status_code();

        let status =
            StatusCode::from_u16(code).map_err(|_| ResponseError::InvalidStatusCode {
                code,
                location: ErrorLocation::from(caller),
            })?;

        let body = serde_json::to_value(data).map_err(|source| ResponseError::Serialization {
            source,
            location: ErrorLocation::from(caller),
        })?;

        let headers = to_header_map(headers)?;

        Ok(JsonResponse::new(status, headers, body))
    }

    /// Error envelope carrying the current status code
    #[track_caller]
    fn respond_with_error(&self, message: &str) -> ResponseResult<JsonResponse> {
        log::debug!("Responding with error {}: {}", self.status_code(), message);

        self.respond(&ErrorEnvelope::new(self.status_code(), message))
    }

    /// Validation envelope; always 422 whatever was set before
    #[track_caller]
    fn respond_validation_errors<T>(&mut self, errors: &T) -> ResponseResult<JsonResponse>
    where
        T: Serialize + ?Sized,
    {
        self.set_status_code(VALIDATION_STATUS_CODE);

        self.respond(&ValidationEnvelope { errors })
    }

    // =========================================================================
    // Shorthands (None = default message)
    // =========================================================================

    #[track_caller]
    fn response_not_found(&mut self, message: Option<&str>) -> ResponseResult<JsonResponse> {
        self.set_status_code(StatusCode::NOT_FOUND.as_u16())
            .respond_with_error(message.unwrap_or(messages::NOT_FOUND))
    }

    #[track_caller]
    fn error_wrong_args(&mut self, message: Option<&str>) -> ResponseResult<JsonResponse> {
        self.set_status_code(StatusCode::BAD_REQUEST.as_u16())
            .respond_with_error(message.unwrap_or(messages::WRONG_ARGUMENTS))
    }

    #[track_caller]
    fn error_not_authorized(&mut self, message: Option<&str>) -> ResponseResult<JsonResponse> {
        self.set_status_code(StatusCode::UNAUTHORIZED.as_u16())
            .respond_with_error(message.unwrap_or(messages::NOT_AUTHORIZED))
    }

    #[track_caller]
    fn error_forbidden(&mut self, message: Option<&str>) -> ResponseResult<JsonResponse> {
        self.set_status_code(StatusCode::FORBIDDEN.as_u16())
            .respond_with_error(message.unwrap_or(messages::FORBIDDEN))
    }

    #[track_caller]
    fn error_method_not_allowed(
        &mut self,
        message: Option<&str>,
    ) -> ResponseResult<JsonResponse> {
        self.set_status_code(StatusCode::METHOD_NOT_ALLOWED.as_u16())
            .respond_with_error(message.unwrap_or(messages::METHOD_NOT_ALLOWED))
    }

    #[track_caller]
    fn error_too_many_requests(&mut self, message: Option<&str>) -> ResponseResult<JsonResponse> {
        self.set_status_code(StatusCode::TOO_MANY_REQUESTS.as_u16());

        let envelope = ErrorEnvelope::new(
            self.status_code(),
            message.unwrap_or(messages::TOO_MANY_REQUESTS),
        );

        self.respond(&envelope)
    }

    #[track_caller]
    fn error_internal_error(&mut self, message: Option<&str>) -> ResponseResult<JsonResponse> {
        self.set_status_code(StatusCode::INTERNAL_SERVER_ERROR.as_u16())
            .respond_with_error(message.unwrap_or(messages::INTERNAL_ERROR))
    }
}
