use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{EndUserResponse, NextEndUserQuery};
use crate::methods::routes::END_USERS_NEXT_PATH;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = END_USERS_NEXT_PATH,
    tag = "end-users",
    params(NextEndUserQuery),
    responses(
        (status = 200, description = "Next pending end user in the review queue", body = EndUserResponse),
        (status = 204, description = "No other end user is pending review"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn next_end_user(
    axum::extract::State(state): axum::extract::State<AppState>,
    Query(query): Query<NextEndUserQuery>,
) -> Result<Response, ApiError> {
    let next = state
        .end_user_service
        .next_pending(query.after.as_deref())
        .await
        .map_err(|e| handle_service_error(e, &state.env, "next_end_user"))?;

    Ok(match next {
        Some(end_user) => Json(EndUserResponse::from(end_user)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}
