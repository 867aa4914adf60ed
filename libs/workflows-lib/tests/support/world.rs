use std::collections::HashMap;
use std::sync::Arc;

use cucumber::World;

use workflows_lib::end_user_service::EndUserService;
use workflows_lib::entities::{EndUser, PaginatedResult};
use workflows_lib::errors_service::ServiceError;

use crate::support::in_memory::InMemoryEndUserRepo;

#[derive(Debug, World)]
pub struct TestWorld {
    pub service: EndUserService<InMemoryEndUserRepo>,
    /// email -> end user id
    pub ids: HashMap<String, String>,

    // Results
    pub decision_result: Option<Result<EndUser, ServiceError>>,
    pub list_result: Option<Result<PaginatedResult<EndUser>, ServiceError>>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self {
            service: EndUserService::with_repo(Arc::new(InMemoryEndUserRepo::default())),
            ids: HashMap::new(),
            decision_result: None,
            list_result: None,
        }
    }
}

impl TestWorld {
    pub fn id_for(&self, email: &str) -> String {
        self.ids
            .get(email)
            .cloned()
            .unwrap_or_else(|| panic!("no end user with email {email}"))
    }
}
