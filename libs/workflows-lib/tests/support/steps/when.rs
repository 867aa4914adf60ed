use cucumber::when;

use workflows_lib::entities::{ApprovalState, PaginationParams};

use crate::support::world::TestWorld;

#[when(expr = "I approve {string}")]
pub async fn approve(world: &mut TestWorld, email: String) {
    let id = world.id_for(&email);
    world.decision_result = Some(world.service.approve(&id).await);
}

#[when(expr = "I reject {string}")]
pub async fn reject(world: &mut TestWorld, email: String) {
    let id = world.id_for(&email);
    world.decision_result = Some(world.service.reject(&id).await);
}

#[when(expr = "I approve the end user with id {string}")]
pub async fn approve_by_id(world: &mut TestWorld, id: String) {
    world.decision_result = Some(world.service.approve(&id).await);
}

#[when(expr = "I list {string} end users")]
pub async fn list_by_state(world: &mut TestWorld, state: String) {
    let state: ApprovalState = state.parse().expect("valid approval state");
    world.list_result = Some(
        world
            .service
            .list_end_users(Some(state), PaginationParams::default())
            .await,
    );
}
