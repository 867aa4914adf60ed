use std::sync::Arc;

use review_actions::{
    ActionError, DocumentEvents, EndUserApi, EndUserView, HttpEndUserApi, QueueSelector,
    ReviewActions,
};
use secrecy::Secret;

#[derive(Debug, Clone, Copy)]
pub enum ReviewCommand {
    Approve,
    Reject,
}

fn print_end_user(label: &str, end_user: &EndUserView) {
    match serde_json::to_string_pretty(end_user) {
        Ok(json) => println!("{label}:\n{json}"),
        Err(_) => println!("{label}: {}", end_user.id),
    }
}

/// Records a decision for `end_user_id` and prints the end user that is up
/// next in the review queue.
pub async fn decide(
    api_url: &str,
    token: Secret<String>,
    end_user_id: &str,
    command: ReviewCommand,
) -> Result<(), ActionError> {
    let api: Arc<HttpEndUserApi> = Arc::new(HttpEndUserApi::new(api_url, token)?);
    let current = api.get_end_user(end_user_id).await?;
    let selector = Arc::new(QueueSelector::new(api.clone(), Some(current)));
    let document = DocumentEvents::new();

    let actions = ReviewActions::new(end_user_id, api, selector.clone(), &document);
    let handle = match command {
        ReviewCommand::Approve => actions.on_mutate_approve(),
        ReviewCommand::Reject => actions.on_mutate_reject(),
    };
    let decided = handle.await.map_err(|e| ActionError::Join(e.to_string()))??;
    print_end_user("Updated", &decided);

    match selector.current() {
        Some(next) => print_end_user("Next", &next),
        None => println!("Review queue is empty."),
    }
    Ok(())
}

pub async fn next(api_url: &str, token: Secret<String>, after: Option<&str>) -> Result<(), ActionError> {
    let api = HttpEndUserApi::new(api_url, token)?;
    match api.next_end_user(after).await? {
        Some(end_user) => print_end_user("Next", &end_user),
        None => println!("Review queue is empty."),
    }
    Ok(())
}
