use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth::error::AuthError;
use crate::auth::strategy::AuthenticatedUser;
use crate::error::ApiError;
use crate::state::AppState;

/// Token from an `Authorization: Bearer <token>` header. The scheme is
/// matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Rejects requests without a valid bearer token and attaches the caller to
/// the request extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(token) = bearer_token(request.headers()).map(str::to_owned) else {
        tracing::warn!(path = %request.uri().path(), "missing bearer token");
        return Err(AuthError::Unauthorized.into());
    };

    let user = state.auth.authenticate(&token).await.map_err(|err| {
        if !matches!(err, AuthError::Unauthorized) {
            tracing::error!(env = %state.env, error = %err, "authentication failed");
        }
        ApiError::from(err)
    })?;

    tracing::debug!(user_id = %user.id, "request authenticated");
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| AuthError::Unauthorized.into())
    }
}
