use std::fmt;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::api::EndUserApi;
use crate::error::ActionError;
use crate::loading::LoadingState;
use crate::model::EndUserView;
use crate::selection::NextEndUserSelector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Approve => write!(f, "approve"),
            Decision::Reject => write!(f, "reject"),
        }
    }
}

/// One decision bound to one end user. Every call to [`mutate`](Self::mutate)
/// runs on its own task and advances the queue when it succeeds.
pub struct EndUserMutation {
    api: Arc<dyn EndUserApi>,
    selector: Arc<dyn NextEndUserSelector>,
    end_user_id: Arc<str>,
    decision: Decision,
    loading: LoadingState,
}

impl EndUserMutation {
    pub fn new(
        api: Arc<dyn EndUserApi>,
        selector: Arc<dyn NextEndUserSelector>,
        end_user_id: Arc<str>,
        decision: Decision,
    ) -> Self {
        Self {
            api,
            selector,
            end_user_id,
            decision,
            loading: LoadingState::new(),
        }
    }

    pub fn decision(&self) -> Decision {
        self.decision
    }

    pub fn loading(&self) -> &LoadingState {
        &self.loading
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Must be called from within a tokio runtime.
    pub fn mutate(&self) -> JoinHandle<Result<EndUserView, ActionError>> {
        let api = self.api.clone();
        let selector = self.selector.clone();
        let end_user_id = self.end_user_id.clone();
        let decision = self.decision;
        // Taken before spawning so the flag is already up when this returns.
        let guard = self.loading.begin();

        tokio::spawn(async move {
            let result = match decision {
                Decision::Approve => api.approve_end_user(&end_user_id).await,
                Decision::Reject => api.reject_end_user(&end_user_id).await,
            };
            drop(guard);

            match result {
                Ok(end_user) => {
                    info!(end_user_id = %end_user_id, %decision, "End user decision recorded");
                    if let Err(e) = selector.select_next().await {
                        warn!(error = %e, "Failed to select next end user");
                    }
                    Ok(end_user)
                }
                Err(e) => {
                    warn!(end_user_id = %end_user_id, %decision, error = %e, "End user decision failed");
                    Err(e)
                }
            }
        })
    }
}
