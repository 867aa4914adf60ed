use std::sync::Arc;

use workflows_lib::end_user_service::EndUserService;
use workflows_lib::repository::traits::EndUserRepositoryTrait;

use crate::auth::JwtStrategy;

#[derive(Clone)]
pub struct AppState {
    pub end_user_service: Arc<EndUserService<dyn EndUserRepositoryTrait>>,
    pub auth: Arc<JwtStrategy>,
    pub env: String,
}
