use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{query, query_as, MySqlPool};
use uuid::Uuid;

use crate::repository::errors::RepositoryError;
use crate::repository::models::UserRow;
use crate::repository::traits::UserRepositoryTrait;

#[derive(Debug, Clone)]
pub struct UserRepository {
    pub pool: MySqlPool,
}

impl UserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create_user(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        roles: &[String],
    ) -> Result<UserRow, RepositoryError> {
        let user_id = Uuid::new_v4().to_string();

        query(
            r#"
            INSERT INTO users (id, email, first_name, last_name, roles)
            VALUES (?, ?, ?, ?, ?)
            "#
        )
        .bind(&user_id)
        .bind(email)
        .bind(first_name)
        .bind(last_name)
        .bind(Json(roles))
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        self.get_user(&user_id).await?.ok_or(RepositoryError::NotFound)
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<UserRow>, RepositoryError> {
        let user = query_as::<_, UserRow>(
            r#"
            SELECT id, email, first_name, last_name, roles FROM users WHERE id = ?
            "#
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(user)
    }
}
