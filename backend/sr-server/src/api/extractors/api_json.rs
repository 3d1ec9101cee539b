use sr_response::{JsonResponder, ResponseFormatter};

use std::future::Future;

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::json;

/// JSON body extractor with enveloped rejections
///
/// Well-formed JSON of the wrong shape is a validation failure (422,
/// `{"errors": {"body": [...]}}`). A body that cannot be read keeps axum's
/// status (413 when over the length limit). Syntax errors and a missing
/// content type are a 400 error envelope.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(ApiJson(value)),
                Err(rejection) => Err(reject(rejection)),
            }
        }
    }
}

fn reject(rejection: JsonRejection) -> Response {
    log::debug!("Rejected JSON body: {}", rejection.body_text());

    let mut responder = JsonResponder::new();
    let result = match rejection {
        JsonRejection::JsonDataError(e) => {
            responder.respond_validation_errors(&json!({ "body": [e.body_text()] }))
        }
        JsonRejection::BytesRejection(e) => responder
            .set_status_code(e.status().as_u16())
            .respond_with_error(e.body_text().as_str()),
        other => responder.error_wrong_args(Some(other.body_text().as_str())),
    };

    result.into_response()
}
