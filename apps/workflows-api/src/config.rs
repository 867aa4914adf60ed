use std::time::Duration;

use crate::constants::{
    CORS_ALLOWED_ORIGINS, JWT_LEEWAY_SECS, MAX_BODY_SIZE_BYTES, RATE_LIMIT_BURST,
    RATE_LIMIT_PER_MINUTE, REQUEST_TIMEOUT_SECS, SHUTDOWN_TIMEOUT_SECS,
};

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone)]
pub struct MiddlewareConfig {
    pub rate_limit_per_minute: u32,
    pub rate_limit_burst: u32,
    pub request_timeout: Duration,
    pub max_body_size: usize,
    pub shutdown_timeout: Duration,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            rate_limit_per_minute: 100,
            rate_limit_burst: 150,
            request_timeout: Duration::from_secs(30),
            max_body_size: 1_048_576, // 1MB
            shutdown_timeout: Duration::from_secs(30),
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

impl MiddlewareConfig {
    pub fn from_env() -> Self {
        let default = Self::default();

        let request_timeout_secs: u64 = env_or(REQUEST_TIMEOUT_SECS, 30);
        let shutdown_timeout_secs: u64 = env_or(SHUTDOWN_TIMEOUT_SECS, 30);

        let cors_allowed_origins = std::env::var(CORS_ALLOWED_ORIGINS)
            .ok()
            .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
            .unwrap_or(default.cors_allowed_origins);

        Self {
            // Zero would divide the replenish interval by zero.
            rate_limit_per_minute: env_or(RATE_LIMIT_PER_MINUTE, default.rate_limit_per_minute).max(1),
            rate_limit_burst: env_or(RATE_LIMIT_BURST, default.rate_limit_burst).max(1),
            request_timeout: Duration::from_secs(request_timeout_secs),
            max_body_size: env_or(MAX_BODY_SIZE_BYTES, default.max_body_size),
            shutdown_timeout: Duration::from_secs(shutdown_timeout_secs),
            cors_allowed_origins,
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|o| o == "*")
    }
}

/// Token verification settings. The signing secret itself is resolved
/// through the secrets client, not here.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    pub leeway_secs: u64,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            leeway_secs: env_or(JWT_LEEWAY_SECS, 0),
        }
    }
}
