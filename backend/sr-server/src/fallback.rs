//! Responses for requests no handler produced an answer for

use sr_response::{JsonResponder, JsonResponse, ResponseFormatter, ResponseResult};

use std::any::Any;

use axum::{
    http::{Method, Uri},
    response::{IntoResponse, Response},
};

/// Unknown route
pub async fn not_found(mut responder: JsonResponder, uri: Uri) -> ResponseResult<JsonResponse> {
    log::debug!("No route for {}", uri.path());
    responder.response_not_found(None)
}

/// Known route, unsupported method
pub async fn method_not_allowed(
    mut responder: JsonResponder,
    method: Method,
    uri: Uri,
) -> ResponseResult<JsonResponse> {
    log::debug!("Method {} not allowed on {}", method, uri.path());
    responder.error_method_not_allowed(None)
}

/// Panic recovery for `CatchPanicLayer`; the panic payload is logged, never sent
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        String::from("unknown panic payload")
    };
    log::error!("Handler panicked: {}", detail);

    let mut responder = JsonResponder::new();
    responder.error_internal_error(None).into_response()
}
