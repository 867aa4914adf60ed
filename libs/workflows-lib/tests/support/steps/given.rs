use cucumber::given;

use workflows_lib::entities::NewEndUser;

use crate::support::world::TestWorld;

#[given("a clean review queue")]
pub async fn clean_queue(world: &mut TestWorld) {
    *world = TestWorld::default();
}

#[given("the following end users are pending:")]
pub async fn end_users_pending(world: &mut TestWorld, step: &cucumber::gherkin::Step) {
    let Some(table) = &step.table else {
        return;
    };
    for row in table.rows.iter().skip(1) {
        let cell = |i: usize| row.get(i).cloned().unwrap_or_default();
        let end_user = world
            .service
            .create_end_user(NewEndUser {
                first_name: cell(0),
                last_name: cell(1),
                email: cell(2),
            })
            .await
            .expect("seeding end user");
        world.ids.insert(end_user.email.clone(), end_user.id);
    }
}
