use std::sync::Arc;

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use serde_json::Value;
use workflows_lib::entities::UserRecord;
use workflows_lib::user_service::UserLookup;

use crate::auth::claims::Claims;
use crate::auth::error::AuthError;
use crate::config::AuthConfig;

/// The caller of a request, resolved from its bearer token.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<String>,
}

/// Verifies bearer tokens signed with a shared HMAC secret and resolves their
/// subject to a stored user.
pub struct JwtStrategy {
    lookup: Arc<dyn UserLookup>,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtStrategy {
    pub fn new(lookup: Arc<dyn UserLookup>, secret: &Secret<String>, config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = config.leeway_secs;
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            lookup,
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation,
        }
    }

    /// Checks signature and expiry.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::warn!(error = %e, "rejected bearer token");
                AuthError::Unauthorized
            })
    }

    /// Resolves verified claims to the current state of their user.
    pub async fn validate(&self, claims: &Claims) -> Result<AuthenticatedUser, AuthError> {
        let subject = claims.subject().ok_or_else(|| {
            tracing::warn!("token carries no subject");
            AuthError::Unauthorized
        })?;

        let user = self
            .lookup
            .get_by_id(subject)
            .await
            .map_err(AuthError::Lookup)?
            .ok_or_else(|| {
                tracing::warn!(user_id = %subject, "token subject does not exist");
                AuthError::Unauthorized
            })?;

        principal_from_record(user)
    }

    pub async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.decode(token)?;
        self.validate(&claims).await
    }
}

fn principal_from_record(user: UserRecord) -> Result<AuthenticatedUser, AuthError> {
    let roles = roles_from_value(&user.roles).ok_or_else(|| {
        AuthError::Defect(format!("user {} has roles {}", user.id, user.roles))
    })?;

    Ok(AuthenticatedUser {
        id: user.id,
        email: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
        roles,
    })
}

/// `Some` only for a JSON array whose elements are all strings.
fn roles_from_value(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|role| role.as_str().map(str::to_string))
        .collect()
}
