use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::api::EndUserApi;
use crate::loading::LoadingState;
use crate::model::EndUserView;

/// Fetches one end user and keeps the latest successful result.
pub struct EndUserQuery {
    api: Arc<dyn EndUserApi>,
    end_user_id: Arc<str>,
    data: Arc<watch::Sender<Option<EndUserView>>>,
    loading: LoadingState,
}

impl EndUserQuery {
    pub fn new(api: Arc<dyn EndUserApi>, end_user_id: Arc<str>) -> Self {
        let (data, _rx) = watch::channel(None);
        Self {
            api,
            end_user_id,
            data: Arc::new(data),
            loading: LoadingState::new(),
        }
    }

    pub fn loading(&self) -> &LoadingState {
        &self.loading
    }

    pub fn data(&self) -> Option<EndUserView> {
        self.data.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<EndUserView>> {
        self.data.subscribe()
    }

    /// Starts a fetch. A failed fetch keeps the previous data.
    pub fn refetch(&self) -> JoinHandle<()> {
        let api = self.api.clone();
        let end_user_id = self.end_user_id.clone();
        let data = self.data.clone();
        let guard = self.loading.begin();

        tokio::spawn(async move {
            match api.get_end_user(&end_user_id).await {
                Ok(end_user) => {
                    data.send_replace(Some(end_user));
                }
                Err(e) => warn!(end_user_id = %end_user_id, error = %e, "Failed to load end user"),
            }
            drop(guard);
        })
    }
}
