//! Bearer token authentication.
//!
//! [`JwtStrategy`] verifies HMAC-signed tokens and resolves their subject
//! through [`workflows_lib::user_service::UserLookup`]. [`require_auth`] runs
//! it for every protected route; handlers take the caller as an
//! [`AuthenticatedUser`] argument.

pub mod claims;
pub mod error;
pub mod middleware;
pub mod strategy;

pub use claims::Claims;
pub use error::AuthError;
pub use middleware::{bearer_token, require_auth};
pub use strategy::{AuthenticatedUser, JwtStrategy};
