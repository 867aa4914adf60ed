pub const SERVICE: &str = "workflows-api";
pub const ENV: &str = "ENV";

pub const LOCAL_ENV: &str = "local";

pub const DATABASE_URL: &str = "DATABASE_URL";

pub const WORKFLOWS_API_PORT: &str = "WORKFLOWS_API_PORT";
pub const DEFAULT_PORT: u16 = 3333;

// Authentication
pub const JWT_SECRET_KEY: &str = "JWT_SECRET_KEY";
pub const JWT_LEEWAY_SECS: &str = "JWT_LEEWAY_SECS";

// Middleware configuration
pub const RATE_LIMIT_PER_MINUTE: &str = "RATE_LIMIT_PER_MINUTE";
pub const RATE_LIMIT_BURST: &str = "RATE_LIMIT_BURST";
pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
pub const MAX_BODY_SIZE_BYTES: &str = "MAX_BODY_SIZE_BYTES";
pub const SHUTDOWN_TIMEOUT_SECS: &str = "SHUTDOWN_TIMEOUT_SECS";
