mod config;
mod error;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;

pub const CONFIG_DIR_ENV: &str = "SR_CONFIG_DIR";
pub const CONFIG_DIR_NAME: &str = ".sr";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 100;
const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;
const MIN_RATE_LIMIT_MAX_REQUESTS: u32 = 1;
const MAX_RATE_LIMIT_MAX_REQUESTS: u32 = 100_000;
const MIN_RATE_LIMIT_WINDOW_SECS: u64 = 1;
const MAX_RATE_LIMIT_WINDOW_SECS: u64 = 3600;
