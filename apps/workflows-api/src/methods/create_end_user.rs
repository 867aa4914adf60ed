use axum::{http::StatusCode, Json};
use validator::Validate;

use crate::auth::AuthenticatedUser;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{CreateEndUserRequest, EndUserResponse};
use crate::methods::routes::END_USERS_PATH;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = END_USERS_PATH,
    tag = "end-users",
    request_body = CreateEndUserRequest,
    responses(
        (status = 201, description = "End user created and queued for review", body = EndUserResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 409, description = "Email already exists"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_end_user(
    axum::extract::State(state): axum::extract::State<AppState>,
    operator: AuthenticatedUser,
    Json(payload): Json<CreateEndUserRequest>,
) -> Result<(StatusCode, Json<EndUserResponse>), ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let end_user = state
        .end_user_service
        .create_end_user(payload.into())
        .await
        .map_err(|e| handle_service_error(e, &state.env, "create_end_user"))?;

    tracing::info!(operator_id = %operator.id, end_user_id = %end_user.id, "end user created");
    Ok((StatusCode::CREATED, Json(EndUserResponse::from(end_user))))
}
