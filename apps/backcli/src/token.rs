use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use secrecy::{ExposeSecret, Secret};
use workflows_api::auth::Claims;

/// Signs an HS256 access token for `user_id`, valid for `ttl_secs`.
pub fn issue_token(
    secret: &Secret<String>,
    user_id: &str,
    email: Option<String>,
    ttl_secs: u64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp().max(0) as u64;
    let claims = Claims {
        id: Some(user_id.to_string()),
        sub: None,
        email,
        exp: now.saturating_add(ttl_secs),
        iat: Some(now),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )
}
