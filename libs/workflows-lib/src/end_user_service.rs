use std::sync::Arc;

use crate::entities::{
    ApprovalState, Decision, EndUser, NewEndUser, PaginatedResult, PaginationParams,
};
use crate::errors_service::ServiceError;
use crate::repository::models::EndUserRow;
use crate::repository::traits::EndUserRepositoryTrait;
use crate::repository::EndUserRepository;
use crate::user_service::validate_field;

fn end_user_from_row(row: EndUserRow) -> Result<EndUser, ServiceError> {
    let approval_state = row
        .approval_state
        .parse::<ApprovalState>()
        .map_err(ServiceError::InvalidApprovalState)?;
    Ok(EndUser {
        id: row.id,
        first_name: row.first_name,
        last_name: row.last_name,
        email: row.email,
        approval_state,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

#[derive(Debug, Clone)]
pub struct EndUserService<E = EndUserRepository>
where
    E: EndUserRepositoryTrait + ?Sized,
{
    pub end_user_repo: Arc<E>,
}

impl EndUserService<EndUserRepository> {
    pub fn new(end_user_repo: EndUserRepository) -> Self {
        Self {
            end_user_repo: Arc::new(end_user_repo),
        }
    }
}

impl<E> EndUserService<E>
where
    E: EndUserRepositoryTrait + ?Sized,
{
    pub fn with_repo(end_user_repo: Arc<E>) -> Self {
        Self { end_user_repo }
    }

    pub async fn create_end_user(&self, new_end_user: NewEndUser) -> Result<EndUser, ServiceError> {
        validate_field("first name", &new_end_user.first_name)?;
        validate_field("last name", &new_end_user.last_name)?;
        validate_field("email", &new_end_user.email)?;

        let row = self
            .end_user_repo
            .create_end_user(
                new_end_user.first_name.trim(),
                new_end_user.last_name.trim(),
                new_end_user.email.trim(),
            )
            .await?;
        end_user_from_row(row)
    }

    pub async fn get_end_user(&self, end_user_id: &str) -> Result<Option<EndUser>, ServiceError> {
        self.end_user_repo
            .get_end_user(end_user_id)
            .await?
            .map(end_user_from_row)
            .transpose()
    }

    pub async fn list_end_users(
        &self,
        state: Option<ApprovalState>,
        pagination: PaginationParams,
    ) -> Result<PaginatedResult<EndUser>, ServiceError> {
        let (rows, total) = self
            .end_user_repo
            .get_end_users_paginated(state, pagination)
            .await?;
        let items = rows
            .into_iter()
            .map(end_user_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PaginatedResult::new(items, total, pagination))
    }

    /// Records an operator decision. Repeating the same decision is a no-op
    /// that returns the current record.
    pub async fn decide(&self, end_user_id: &str, decision: Decision) -> Result<EndUser, ServiceError> {
        let target = decision.target_state();
        let row = self
            .end_user_repo
            .set_approval_state(end_user_id, target)
            .await?
            .ok_or(ServiceError::NotFound)?;
        tracing::info!(end_user_id = %end_user_id, state = %target, "end user decision recorded");
        end_user_from_row(row)
    }

    pub async fn approve(&self, end_user_id: &str) -> Result<EndUser, ServiceError> {
        self.decide(end_user_id, Decision::Approve).await
    }

    pub async fn reject(&self, end_user_id: &str) -> Result<EndUser, ServiceError> {
        self.decide(end_user_id, Decision::Reject).await
    }

    /// Next pending end user after `after` in queue order, wrapping around to
    /// the head of the queue. `None` when nothing other than `after` is pending.
    pub async fn next_pending(&self, after: Option<&str>) -> Result<Option<EndUser>, ServiceError> {
        let anchor = match after {
            Some(id) => self.end_user_repo.get_end_user(id).await?,
            None => None,
        };

        let next = match &anchor {
            Some(row) => self.end_user_repo.get_next_pending_after(row).await?,
            None => None,
        };

        let next = match next {
            Some(row) => Some(row),
            None => self
                .end_user_repo
                .get_first_pending()
                .await?
                .filter(|head| Some(head.id.as_str()) != after),
        };

        next.map(end_user_from_row).transpose()
    }
}
