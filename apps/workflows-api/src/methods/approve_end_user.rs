use axum::Json;
use workflows_lib::errors_service::ServiceError;

use crate::auth::AuthenticatedUser;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::EndUserResponse;
use crate::methods::routes::END_USERS_APPROVE_PATH;
use crate::state::AppState;

#[utoipa::path(
    patch,
    path = END_USERS_APPROVE_PATH,
    tag = "end-users",
    params(
        ("id" = String, Path, description = "End user ID")
    ),
    responses(
        (status = 200, description = "End user approved", body = EndUserResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "End user not found"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn approve_end_user(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
    operator: AuthenticatedUser,
) -> Result<Json<EndUserResponse>, ApiError> {
    let end_user = state
        .end_user_service
        .approve(&id)
        .await
        .map_err(|e| match e {
            ServiceError::NotFound => ApiError::end_user_not_found(),
            other => handle_service_error(other, &state.env, "approve_end_user"),
        })?;

    tracing::info!(operator_id = %operator.id, end_user_id = %end_user.id, "end user approved");
    Ok(Json(EndUserResponse::from(end_user)))
}
