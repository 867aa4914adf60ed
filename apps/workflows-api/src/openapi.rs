use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error::ErrorResponse;
use crate::methods::approve_end_user::__path_approve_end_user;
use crate::methods::create_end_user::__path_create_end_user;
use crate::methods::entities::{
    CreateEndUserRequest, EndUserResponse, MeResponse, PaginatedResponse,
};
use crate::methods::get_end_user_by_id::__path_get_end_user_by_id;
use crate::methods::get_end_users::__path_get_end_users;
use crate::methods::get_me::__path_get_me;
use crate::methods::next_end_user::__path_next_end_user;
use crate::methods::reject_end_user::__path_reject_end_user;

pub const BEARER_AUTH: &str = "bearer_auth";

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                BEARER_AUTH,
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        get_end_users, create_end_user, get_end_user_by_id,
        approve_end_user, reject_end_user, next_end_user,
        get_me
    ),
    components(schemas(
        CreateEndUserRequest, EndUserResponse, MeResponse, ErrorResponse,
        PaginatedResponse<EndUserResponse>
    )),
    modifiers(&BearerAuth),
    servers((url = "/v1", description = "API v1")),
    tags(
        (name = "end-users", description = "End user review endpoints"),
        (name = "auth", description = "Authenticated operator")
    )
)]
pub struct ApiDoc;
