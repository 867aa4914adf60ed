use axum::{extract::Query, Json};
use workflows_lib::entities::ApprovalState;

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{EndUserResponse, ListEndUsersQuery, PaginatedResponse};
use crate::methods::routes::END_USERS_PATH;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = END_USERS_PATH,
    tag = "end-users",
    params(ListEndUsersQuery),
    responses(
        (status = 200, description = "List of end users", body = PaginatedResponse<EndUserResponse>),
        (status = 400, description = "Unknown approval state"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_end_users(
    axum::extract::State(state): axum::extract::State<AppState>,
    Query(query): Query<ListEndUsersQuery>,
) -> Result<Json<PaginatedResponse<EndUserResponse>>, ApiError> {
    let approval_state = query
        .state
        .as_deref()
        .map(|s| s.parse::<ApprovalState>().map_err(|_| ApiError::invalid_approval_state(s)))
        .transpose()?;

    state
        .end_user_service
        .list_end_users(approval_state, query.pagination())
        .await
        .map(|result| Json(PaginatedResponse::from(result)))
        .map_err(|e| handle_service_error(e, &state.env, "get_end_users"))
}
