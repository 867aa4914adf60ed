use axum::{
    middleware::from_fn_with_state,
    routing::{get, patch},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::require_auth;
use crate::methods::approve_end_user::approve_end_user;
use crate::methods::create_end_user::create_end_user;
use crate::methods::get_end_user_by_id::get_end_user_by_id;
use crate::methods::get_end_users::get_end_users;
use crate::methods::get_me::get_me;
use crate::methods::health_check::health_check;
use crate::methods::next_end_user::next_end_user;
use crate::methods::reject_end_user::reject_end_user;
use crate::methods::routes::{
    API_V1_PREFIX, END_USERS_APPROVE_PATH, END_USERS_BY_ID_PATH, END_USERS_NEXT_PATH,
    END_USERS_PATH, END_USERS_REJECT_PATH, ME_PATH, SERVICE_DOCS_PATH, SERVICE_HEALTH_PATH,
    SERVICE_OPENAPI_PATH,
};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// All routes, without the transport middleware stack. Every `/v1` route
/// requires a bearer token; health and docs stay public.
pub fn app_router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route(END_USERS_PATH, get(get_end_users).post(create_end_user))
        .route(END_USERS_NEXT_PATH, get(next_end_user))
        .route(END_USERS_BY_ID_PATH, get(get_end_user_by_id))
        .route(END_USERS_APPROVE_PATH, patch(approve_end_user))
        .route(END_USERS_REJECT_PATH, patch(reject_end_user))
        .route(ME_PATH, get(get_me))
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    let root_routes = Router::new()
        .route(SERVICE_HEALTH_PATH, get(health_check))
        .merge(SwaggerUi::new(SERVICE_DOCS_PATH).url(SERVICE_OPENAPI_PATH, ApiDoc::openapi()));

    Router::new()
        .nest(API_V1_PREFIX, v1_routes)
        .merge(root_routes)
        .with_state(state)
}
