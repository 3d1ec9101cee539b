use crate::GlobalRateLimiter;

use sr_config::{Config, RateLimitConfig};

use std::sync::Arc;

/// Shared state handed to every handler and middleware
#[derive(Clone, Default)]
pub struct AppState {
    /// None when rate limiting is disabled
    pub rate_limiter: Option<Arc<GlobalRateLimiter>>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self::with_rate_limit(&config.rate_limit)
    }

    pub fn with_rate_limit(config: &RateLimitConfig) -> Self {
        let rate_limiter = config
            .enabled
            .then(|| Arc::new(GlobalRateLimiter::new(config.clone())));

        Self { rate_limiter }
    }
}
