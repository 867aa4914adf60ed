use cucumber::then;

use workflows_lib::entities::ApprovalState;
use workflows_lib::errors_service::ServiceError;

use crate::support::world::TestWorld;

#[then(expr = "{string} should be {string}")]
pub async fn end_user_has_state(world: &mut TestWorld, email: String, state: String) {
    let expected: ApprovalState = state.parse().expect("valid approval state");
    let id = world.id_for(&email);
    let end_user = world
        .service
        .get_end_user(&id)
        .await
        .expect("lookup should succeed")
        .expect("end user should exist");
    assert_eq!(end_user.approval_state, expected);
}

#[then(expr = "the next pending end user after {string} should be {string}")]
pub async fn next_pending_is(world: &mut TestWorld, after: String, expected: String) {
    let after_id = world.id_for(&after);
    let next = world
        .service
        .next_pending(Some(&after_id))
        .await
        .expect("queue lookup should succeed")
        .expect("a next end user should exist");
    assert_eq!(next.email, expected);
}

#[then(expr = "there should be no pending end user after {string}")]
pub async fn no_next_pending(world: &mut TestWorld, after: String) {
    let after_id = world.id_for(&after);
    let next = world
        .service
        .next_pending(Some(&after_id))
        .await
        .expect("queue lookup should succeed");
    assert!(next.is_none());
}

#[then("I should receive a not found error")]
pub async fn not_found_error(world: &mut TestWorld) {
    assert!(matches!(
        world.decision_result,
        Some(Err(ServiceError::NotFound))
    ));
}

#[then(expr = "I should receive {int} end users")]
pub async fn receive_end_users(world: &mut TestWorld, count: usize) {
    let result = world.list_result.as_ref().expect("list result should exist");
    let page = result.as_ref().expect("list should succeed");
    assert_eq!(page.items.len(), count);
}
