use serde::Serialize;

/// JSON error response body: `{"error": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

/// Inner error body with the HTTP status and a human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Same value as the response status line
    pub http_code: u16,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new<S: Into<String>>(http_code: u16, message: S) -> Self {
        Self {
            error: ErrorBody {
                http_code,
                message: message.into(),
            },
        }
    }
}

/// JSON validation response body: `{"errors": <caller structure>}`
#[derive(Debug, Clone, Serialize)]
pub struct ValidationEnvelope<T> {
    pub errors: T,
}
