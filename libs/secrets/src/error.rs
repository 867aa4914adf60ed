//! Error types for the secrets library

use thiserror::Error;

/// Errors that can occur when working with secrets
#[derive(Error, Debug)]
pub enum SecretsError {
    /// Secret not found in any provider
    #[error("Secret not found: {0}")]
    NotFound(String),

    /// Secret file could not be read
    #[error("Failed to read secret file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvError(String),
}
