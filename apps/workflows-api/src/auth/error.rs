use thiserror::Error;
use workflows_lib::errors_service::ServiceError;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Missing or invalid credentials, or a subject that no longer exists.
    #[error("unauthorized")]
    Unauthorized,

    /// The stored user record is malformed. Not the caller's fault.
    #[error("user roles is not a valid value: {0}")]
    Defect(String),

    #[error("user lookup failed: {0}")]
    Lookup(#[source] ServiceError),
}
