// API v1 routes (nested under /v1)
pub const END_USERS_PATH: &str = "/end-users";
pub const END_USERS_NEXT_PATH: &str = "/end-users/next";
pub const END_USERS_BY_ID_PATH: &str = "/end-users/{id}";
pub const END_USERS_APPROVE_PATH: &str = "/end-users/{id}/approve";
pub const END_USERS_REJECT_PATH: &str = "/end-users/{id}/reject";
pub const ME_PATH: &str = "/me";

// Root-level service routes (not versioned)
pub const SERVICE_HEALTH_PATH: &str = "/health";
pub const SERVICE_DOCS_PATH: &str = "/docs";
pub const SERVICE_OPENAPI_PATH: &str = "/api-doc/openapi.json";

// API version prefix
pub const API_V1_PREFIX: &str = "/v1";
