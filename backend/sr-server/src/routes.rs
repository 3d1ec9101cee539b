use crate::{AppState, echo, fallback, health, rate_limit};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // API endpoints
        .route("/api/v1/echo", post(echo));

    with_service_layers(routes, state)
}

/// Attach fallbacks, rate limiting, panic recovery and CORS to a set of routes
pub fn with_service_layers(routes: Router<AppState>, state: AppState) -> Router {
    routes
        .fallback(fallback::not_found)
        .method_not_allowed_fallback(fallback::method_not_allowed)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::rate_limit,
        ))
        .layer(CatchPanicLayer::custom(fallback::handle_panic))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
