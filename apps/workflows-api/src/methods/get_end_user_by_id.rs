use axum::Json;

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::EndUserResponse;
use crate::methods::routes::END_USERS_BY_ID_PATH;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = END_USERS_BY_ID_PATH,
    tag = "end-users",
    params(
        ("id" = String, Path, description = "End user ID")
    ),
    responses(
        (status = 200, description = "End user found", body = EndUserResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "End user not found"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_end_user_by_id(
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<Json<EndUserResponse>, ApiError> {
    state
        .end_user_service
        .get_end_user(&id)
        .await
        .map_err(|e| handle_service_error(e, &state.env, "get_end_user"))?
        .map(|end_user| Json(EndUserResponse::from(end_user)))
        .ok_or_else(ApiError::end_user_not_found)
}
