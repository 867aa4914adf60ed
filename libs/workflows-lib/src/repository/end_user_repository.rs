use async_trait::async_trait;
use sqlx::{query, query_as, query_scalar, MySqlPool};
use uuid::Uuid;

use crate::entities::{ApprovalState, PaginationParams};
use crate::repository::errors::{map_sqlx_error, RepositoryError};
use crate::repository::models::EndUserRow;
use crate::repository::traits::EndUserRepositoryTrait;

const SELECT_END_USER: &str = r#"
    SELECT id, first_name, last_name, email, approval_state, created_at, updated_at
    FROM end_users
"#;

#[derive(Debug, Clone)]
pub struct EndUserRepository {
    pub pool: MySqlPool,
}

impl EndUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch_by_id(&self, end_user_id: &str) -> Result<Option<EndUserRow>, RepositoryError> {
        query_as::<_, EndUserRow>(&format!("{SELECT_END_USER} WHERE id = ?"))
            .bind(end_user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }
}

#[async_trait]
impl EndUserRepositoryTrait for EndUserRepository {
    async fn create_end_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<EndUserRow, RepositoryError> {
        let id = Uuid::new_v4().to_string();
        query(
            r#"
            INSERT INTO end_users (id, first_name, last_name, email, approval_state)
            VALUES (?, ?, ?, ?, ?)
            "#
        )
        .bind(&id)
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(ApprovalState::Pending.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.fetch_by_id(&id).await?.ok_or(RepositoryError::NotFound)
    }

    async fn get_end_user(&self, end_user_id: &str) -> Result<Option<EndUserRow>, RepositoryError> {
        self.fetch_by_id(end_user_id).await
    }

    async fn get_end_users_paginated(
        &self,
        state: Option<ApprovalState>,
        pagination: PaginationParams,
    ) -> Result<(Vec<EndUserRow>, u64), RepositoryError> {
        let state = state.map(|s| s.as_str());

        let total: i64 = query_scalar(
            r#"
            SELECT COUNT(*) FROM end_users WHERE (? IS NULL OR approval_state = ?)
            "#
        )
        .bind(state)
        .bind(state)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let rows = query_as::<_, EndUserRow>(&format!(
            "{SELECT_END_USER} WHERE (? IS NULL OR approval_state = ?) \
             ORDER BY created_at, id LIMIT ? OFFSET ?"
        ))
        .bind(state)
        .bind(state)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok((rows, u64::try_from(total).unwrap_or_default()))
    }

    async fn set_approval_state(
        &self,
        end_user_id: &str,
        state: ApprovalState,
    ) -> Result<Option<EndUserRow>, RepositoryError> {
        // MySQL reports zero affected rows for an unchanged value, so the
        // follow-up read is what tells a missing id apart.
        query(
            r#"
            UPDATE end_users
            SET approval_state = ?
            WHERE id = ?
            "#
        )
        .bind(state.as_str())
        .bind(end_user_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.fetch_by_id(end_user_id).await
    }

    async fn get_first_pending(&self) -> Result<Option<EndUserRow>, RepositoryError> {
        query_as::<_, EndUserRow>(&format!(
            "{SELECT_END_USER} WHERE approval_state = ? ORDER BY created_at, id LIMIT 1"
        ))
        .bind(ApprovalState::Pending.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn get_next_pending_after(
        &self,
        after: &EndUserRow,
    ) -> Result<Option<EndUserRow>, RepositoryError> {
        query_as::<_, EndUserRow>(&format!(
            "{SELECT_END_USER} WHERE approval_state = ? \
             AND (created_at > ? OR (created_at = ? AND id > ?)) \
             ORDER BY created_at, id LIMIT 1"
        ))
        .bind(ApprovalState::Pending.as_str())
        .bind(after.created_at)
        .bind(after.created_at)
        .bind(&after.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }
}
