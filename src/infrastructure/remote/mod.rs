mod ausis_client;
mod rate_limiter;

pub use ausis_client::{
    AusisClient, AusisClientConfig, CleanupEndpoint, DEFAULT_BASE_URL, DEFAULT_RECOGNIZER,
    DEFAULT_REQUEST_TIMEOUT, DEFAULT_UPLOAD_TIMEOUT,
};
pub use rate_limiter::{
    DEFAULT_MAX_DELAY, DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW, RateLimitError, RateLimiter,
};
