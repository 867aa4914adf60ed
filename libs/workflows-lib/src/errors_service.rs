use crate::repository::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ServiceError {
    #[error("email already exists")]
    EmailAlreadyExists,

    #[error("resource not found")]
    NotFound,

    #[error("invalid approval state in database: {0}")]
    InvalidApprovalState(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::EmailAlreadyExists => ServiceError::EmailAlreadyExists,
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Sqlx(e) => ServiceError::Internal(e.into()),
        }
    }
}
