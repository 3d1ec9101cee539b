use crate::{DEFAULT_STATUS_CODE, ResponseFormatter};

use std::convert::Infallible;
use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Standalone formatter holding one pending status code
///
/// Scope one instance to one request. Taking it as a handler argument
/// does that automatically: the extractor always yields a fresh instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonResponder {
    status_code: u16,
}

impl JsonResponder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for JsonResponder {
    fn default() -> Self {
        Self {
            status_code: DEFAULT_STATUS_CODE,
        }
    }
}

impl ResponseFormatter for JsonResponder {
    fn status_code(&self) -> u16 {
        self.status_code
    }

    fn set_status_code(&mut self, status_code: u16) -> &mut Self {
        self.status_code = status_code;
        self
    }
}

impl<S> FromRequestParts<S> for JsonResponder
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        _parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move { Ok(JsonResponder::new()) }
    }
}
