//! JSON response formatting for HTTP handlers.
//!
//! A handler owns one [`JsonResponder`] per request (or embeds one and
//! implements [`ResponseFormatter`] itself), sets a status code and turns an
//! outcome into a [`JsonResponse`] with a consistent envelope:
//!
//! ```text
//! {"error": {"http_code": 404, "message": "Not Found!"}}
//! {"errors": {"name": ["required"]}}
//! ```

mod envelope;
mod error;
mod json_responder;
mod json_response;
pub mod messages;
mod response_formatter;

#[cfg(test)]
mod tests;

pub use envelope::{ErrorBody, ErrorEnvelope, ValidationEnvelope};
pub use error::{ResponseError, Result as ResponseResult};
pub use json_responder::JsonResponder;
pub use json_response::{JsonResponse, ResponseHeaders};
pub use response_formatter::ResponseFormatter;

/// Status code a fresh formatter starts with
pub const DEFAULT_STATUS_CODE: u16 = 200;

/// Status code forced by `respond_validation_errors`
pub const VALIDATION_STATUS_CODE: u16 = 422;
