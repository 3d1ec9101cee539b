use crate::AppState;

use sr_config::RateLimitConfig;
use sr_response::{ErrorEnvelope, JsonResponder, ResponseFormatter, ResponseHeaders, messages};

use std::num::NonZeroU32;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    http::{StatusCode, header::RETRY_AFTER},
    response::{IntoResponse, Response},
};
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};

/// Process-wide request rate limiter
///
/// Allows a burst of `max_requests` and refills one slot every
/// `window_secs / max_requests`.
pub struct GlobalRateLimiter {
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    config: RateLimitConfig,
    refill_period: Duration,
}

impl GlobalRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let period = Duration::from_secs(config.window_secs.max(1)) / burst.get();

        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst);

        Self {
            limiter: RateLimiter::direct(quota),
            config,
            refill_period: period,
        }
    }

    /// Take one slot; false when the limit is exhausted
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Whole seconds until one slot refills, never less than 1
    pub fn retry_after_secs(&self) -> u64 {
        let period = self.refill_period;
        let secs = period.as_secs() + u64::from(period.subsec_nanos() > 0);

        secs.max(1)
    }
}

/// Reject requests over the global limit with a 429 envelope and `Retry-After`
pub async fn rate_limit(
    State(state): State<AppState>,
    mut responder: JsonResponder,
    request: Request,
    next: Next,
) -> Response {
    if let Some(ref limiter) = state.rate_limiter
        && !limiter.check()
    {
        log::warn!(
            "Rate limit exceeded ({}/{}s): {} {}",
            limiter.config().max_requests,
            limiter.config().window_secs,
            request.method(),
            request.uri().path()
        );
        return too_many_requests(&mut responder, limiter.retry_after_secs());
    }

    next.run(request).await
}

fn too_many_requests(responder: &mut JsonResponder, retry_after_secs: u64) -> Response {
    let code = StatusCode::TOO_MANY_REQUESTS.as_u16();

    let mut headers = ResponseHeaders::new();
    headers.insert(RETRY_AFTER.as_str().to_string(), retry_after_secs.to_string());

    responder
        .set_status_code(code)
        .respond_with_headers(
            &ErrorEnvelope::new(code, messages::TOO_MANY_REQUESTS),
            headers,
        )
        .into_response()
}
