use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("not authenticated")]
    Unauthorized,

    #[error("end user not found")]
    NotFound,

    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid api url: {0}")]
    InvalidUrl(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("action task did not complete: {0}")]
    Join(String),
}
