use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;
use workflows_lib::entities::{EndUser, NewEndUser, PaginatedResult, PaginationParams};

use crate::auth::AuthenticatedUser;

#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreateEndUserRequest {
    #[validate(length(min = 1, max = 255))]
    pub first_name: String,
    #[validate(length(min = 1, max = 255))]
    pub last_name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
}

impl From<CreateEndUserRequest> for NewEndUser {
    fn from(request: CreateEndUserRequest) -> Self {
        NewEndUser {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EndUserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// One of `pending`, `approved`, `rejected`.
    #[schema(example = "pending")]
    pub approval_state: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EndUser> for EndUserResponse {
    fn from(end_user: EndUser) -> Self {
        EndUserResponse {
            id: end_user.id,
            first_name: end_user.first_name,
            last_name: end_user.last_name,
            email: end_user.email,
            approval_state: end_user.approval_state.to_string(),
            created_at: end_user.created_at,
            updated_at: end_user.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MeResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<String>,
}

impl From<AuthenticatedUser> for MeResponse {
    fn from(user: AuthenticatedUser) -> Self {
        MeResponse {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            roles: user.roles,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListEndUsersQuery {
    /// Filter by approval state.
    pub state: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ListEndUsersQuery {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.page_size)
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct NextEndUserQuery {
    /// Id of the end user just reviewed; omit to start at the head of the queue.
    pub after: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T, U> From<PaginatedResult<T>> for PaginatedResponse<U>
where
    U: From<T>,
{
    fn from(result: PaginatedResult<T>) -> Self {
        PaginatedResponse {
            items: result.items.into_iter().map(U::from).collect(),
            total: result.total,
            page: result.page,
            page_size: result.page_size,
            total_pages: result.total_pages,
        }
    }
}
