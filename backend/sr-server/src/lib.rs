pub mod api;
pub mod app_state;
pub mod error;
pub mod fallback;
pub mod health;
pub mod logger;
pub mod rate_limit;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    echo::{EchoRequest, EchoResponse, echo},
    extractors::api_json::ApiJson,
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};
pub use rate_limit::GlobalRateLimiter;
pub use routes::{build_router, with_service_layers};
