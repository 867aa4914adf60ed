use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use workflows_lib::entities::{ApprovalState, PaginationParams};
use workflows_lib::repository::errors::RepositoryError;
use workflows_lib::repository::models::EndUserRow;
use workflows_lib::repository::traits::EndUserRepositoryTrait;

/// Vec-backed repository; insertion order doubles as `created_at` order.
#[derive(Debug, Default)]
pub struct InMemoryEndUserRepo {
    rows: Mutex<Vec<EndUserRow>>,
}

fn queue_key(row: &EndUserRow) -> (chrono::DateTime<Utc>, String) {
    (row.created_at, row.id.clone())
}

#[async_trait]
impl EndUserRepositoryTrait for InMemoryEndUserRepo {
    async fn create_end_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<EndUserRow, RepositoryError> {
        let mut rows = self.rows.lock().await;
        if rows.iter().any(|r| r.email == email) {
            return Err(RepositoryError::EmailAlreadyExists);
        }
        let base = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let created_at = base + Duration::seconds(rows.len() as i64);
        let row = EndUserRow {
            id: Uuid::new_v4().to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            approval_state: ApprovalState::Pending.to_string(),
            created_at,
            updated_at: created_at,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn get_end_user(&self, end_user_id: &str) -> Result<Option<EndUserRow>, RepositoryError> {
        let rows = self.rows.lock().await;
        Ok(rows.iter().find(|r| r.id == end_user_id).cloned())
    }

    async fn get_end_users_paginated(
        &self,
        state: Option<ApprovalState>,
        pagination: PaginationParams,
    ) -> Result<(Vec<EndUserRow>, u64), RepositoryError> {
        let rows = self.rows.lock().await;
        let matching: Vec<EndUserRow> = rows
            .iter()
            .filter(|r| state.map_or(true, |s| r.approval_state == s.as_str()))
            .cloned()
            .collect();
        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .collect();
        Ok((page, total))
    }

    async fn set_approval_state(
        &self,
        end_user_id: &str,
        state: ApprovalState,
    ) -> Result<Option<EndUserRow>, RepositoryError> {
        let mut rows = self.rows.lock().await;
        Ok(rows.iter_mut().find(|r| r.id == end_user_id).map(|r| {
            r.approval_state = state.to_string();
            r.clone()
        }))
    }

    async fn get_first_pending(&self) -> Result<Option<EndUserRow>, RepositoryError> {
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .filter(|r| r.approval_state == ApprovalState::Pending.as_str())
            .min_by_key(|r| queue_key(r))
            .cloned())
    }

    async fn get_next_pending_after(
        &self,
        after: &EndUserRow,
    ) -> Result<Option<EndUserRow>, RepositoryError> {
        let rows = self.rows.lock().await;
        let anchor = queue_key(after);
        Ok(rows
            .iter()
            .filter(|r| r.approval_state == ApprovalState::Pending.as_str())
            .filter(|r| queue_key(r) > anchor)
            .min_by_key(|r| queue_key(r))
            .cloned())
    }
}
