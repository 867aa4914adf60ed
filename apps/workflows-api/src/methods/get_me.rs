use axum::Json;

use crate::auth::AuthenticatedUser;
use crate::methods::entities::MeResponse;
use crate::methods::routes::ME_PATH;

#[utoipa::path(
    get,
    path = ME_PATH,
    tag = "auth",
    responses(
        (status = 200, description = "The authenticated operator", body = MeResponse),
        (status = 401, description = "Missing or invalid bearer token"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_me(user: AuthenticatedUser) -> Json<MeResponse> {
    Json(MeResponse::from(user))
}
