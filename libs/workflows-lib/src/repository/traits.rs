use async_trait::async_trait;

use crate::entities::{ApprovalState, PaginationParams};
use crate::repository::errors::RepositoryError;
use crate::repository::models::{EndUserRow, UserRow};

#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    async fn create_user(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        roles: &[String],
    ) -> Result<UserRow, RepositoryError>;
    async fn get_user(&self, user_id: &str) -> Result<Option<UserRow>, RepositoryError>;
}

#[async_trait]
pub trait EndUserRepositoryTrait: Send + Sync {
    async fn create_end_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<EndUserRow, RepositoryError>;
    async fn get_end_user(&self, end_user_id: &str) -> Result<Option<EndUserRow>, RepositoryError>;
    async fn get_end_users_paginated(
        &self,
        state: Option<ApprovalState>,
        pagination: PaginationParams,
    ) -> Result<(Vec<EndUserRow>, u64), RepositoryError>;
    /// Returns `None` when no row has the given id.
    async fn set_approval_state(
        &self,
        end_user_id: &str,
        state: ApprovalState,
    ) -> Result<Option<EndUserRow>, RepositoryError>;
    /// Head of the pending queue, ordered by `(created_at, id)`.
    async fn get_first_pending(&self) -> Result<Option<EndUserRow>, RepositoryError>;
    /// First pending row strictly after `after` in queue order.
    async fn get_next_pending_after(
        &self,
        after: &EndUserRow,
    ) -> Result<Option<EndUserRow>, RepositoryError>;
}
