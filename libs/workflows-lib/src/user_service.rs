use std::sync::Arc;

use async_trait::async_trait;

use crate::entities::UserRecord;
use crate::errors_service::ServiceError;
use crate::repository::models::UserRow;
use crate::repository::traits::UserRepositoryTrait;
use crate::repository::UserRepository;

const MAX_FIELD_LENGTH: usize = 255;

/// Resolves a user id to its stored record.
#[async_trait]
pub trait UserLookup: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<Option<UserRecord>, ServiceError>;
}

fn user_from_row(row: UserRow) -> UserRecord {
    UserRecord {
        id: row.id,
        email: row.email,
        first_name: row.first_name,
        last_name: row.last_name,
        roles: row.roles.map(|json| json.0).unwrap_or(serde_json::Value::Null),
    }
}

pub(crate) fn validate_field(field: &str, value: &str) -> Result<(), ServiceError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ServiceError::Validation(format!("{field} cannot be empty")));
    }
    if value.chars().count() > MAX_FIELD_LENGTH {
        return Err(ServiceError::Validation(format!(
            "{field} cannot exceed {MAX_FIELD_LENGTH} characters"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct UserService<U = UserRepository>
where
    U: UserRepositoryTrait,
{
    pub user_repo: Arc<U>,
}

impl UserService<UserRepository> {
    pub fn new(user_repo: UserRepository) -> Self {
        Self {
            user_repo: Arc::new(user_repo),
        }
    }
}

impl<U> UserService<U>
where
    U: UserRepositoryTrait,
{
    pub fn with_repo(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Create an operator account with the given role names.
    pub async fn create_user(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        roles: &[String],
    ) -> Result<UserRecord, ServiceError> {
        validate_field("email", email)?;
        validate_field("first name", first_name)?;
        validate_field("last name", last_name)?;

        let row = self
            .user_repo
            .create_user(email.trim(), first_name.trim(), last_name.trim(), roles)
            .await
            .map_err(ServiceError::from)?;
        Ok(user_from_row(row))
    }

    pub async fn get_user(&self, user_id: &str) -> Result<Option<UserRecord>, ServiceError> {
        let row = self
            .user_repo
            .get_user(user_id)
            .await
            .map_err(ServiceError::from)?;
        Ok(row.map(user_from_row))
    }
}

#[async_trait]
impl<U> UserLookup for UserService<U>
where
    U: UserRepositoryTrait,
{
    async fn get_by_id(&self, id: &str) -> Result<Option<UserRecord>, ServiceError> {
        self.get_user(id).await
    }
}
