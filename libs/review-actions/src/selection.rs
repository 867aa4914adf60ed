use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::api::EndUserApi;
use crate::error::ActionError;
use crate::model::EndUserView;

/// Moves the review focus to the next end user once the current one is done.
#[async_trait]
pub trait NextEndUserSelector: Send + Sync {
    async fn select_next(&self) -> Result<(), ActionError>;
}

/// Walks the pending review queue through the API and publishes the current
/// selection.
pub struct QueueSelector<A: EndUserApi + ?Sized> {
    api: Arc<A>,
    selected: watch::Sender<Option<EndUserView>>,
}

impl<A: EndUserApi + ?Sized> QueueSelector<A> {
    pub fn new(api: Arc<A>, current: Option<EndUserView>) -> Self {
        let (selected, _rx) = watch::channel(current);
        Self { api, selected }
    }

    pub fn current(&self) -> Option<EndUserView> {
        self.selected.borrow().clone()
    }

    pub fn current_id(&self) -> Option<String> {
        self.selected.borrow().as_ref().map(|u| u.id.clone())
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<EndUserView>> {
        self.selected.subscribe()
    }
}

#[async_trait]
impl<A: EndUserApi + ?Sized> NextEndUserSelector for QueueSelector<A> {
    async fn select_next(&self) -> Result<(), ActionError> {
        let after = self.current_id();
        let next = self.api.next_end_user(after.as_deref()).await?;

        match &next {
            Some(end_user) => info!(end_user_id = %end_user.id, "Selected next end user"),
            None => debug!("Review queue is empty"),
        }
        self.selected.send_replace(next);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ApprovalState;
    use chrono::Utc;
    use std::sync::Mutex;

    struct QueueApi {
        asked_after: Mutex<Vec<Option<String>>>,
        answer: Option<EndUserView>,
    }

    #[async_trait]
    impl EndUserApi for QueueApi {
        async fn get_end_user(&self, _: &str) -> Result<EndUserView, ActionError> {
            Err(ActionError::NotFound)
        }
        async fn approve_end_user(&self, _: &str) -> Result<EndUserView, ActionError> {
            Err(ActionError::NotFound)
        }
        async fn reject_end_user(&self, _: &str) -> Result<EndUserView, ActionError> {
            Err(ActionError::NotFound)
        }
        async fn next_end_user(&self, after: Option<&str>) -> Result<Option<EndUserView>, ActionError> {
            self.asked_after.lock().unwrap().push(after.map(str::to_string));
            Ok(self.answer.clone())
        }
    }

    fn view(id: &str) -> EndUserView {
        EndUserView {
            id: id.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: format!("{id}@example.com"),
            approval_state: ApprovalState::Pending,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn advances_past_current_selection() {
        let api = Arc::new(QueueApi {
            asked_after: Mutex::new(Vec::new()),
            answer: Some(view("eu-2")),
        });
        let selector = QueueSelector::new(api.clone(), Some(view("eu-1")));
        let mut rx = selector.subscribe();

        selector.select_next().await.unwrap();

        assert_eq!(*api.asked_after.lock().unwrap(), vec![Some("eu-1".to_string())]);
        assert!(rx.has_changed().unwrap());
        assert_eq!(selector.current_id().as_deref(), Some("eu-2"));
    }

    #[tokio::test]
    async fn empty_queue_clears_selection() {
        let api = Arc::new(QueueApi {
            asked_after: Mutex::new(Vec::new()),
            answer: None,
        });
        let selector = QueueSelector::new(api, Some(view("eu-1")));

        selector.select_next().await.unwrap();
        assert!(selector.current().is_none());
    }
}
