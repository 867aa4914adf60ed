use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::api::EndUserApi;
use crate::debounce::{debounce, Debounced, LOADING_DEBOUNCE};
use crate::error::ActionError;
use crate::events::{DocumentEvents, EventOutcome, Subscription};
use crate::model::EndUserView;
use crate::mutation::{Decision, EndUserMutation};
use crate::query::EndUserQuery;
use crate::selection::NextEndUserSelector;
use crate::shortcuts::{self, ShortcutAction};

/// Review actions for a single end user.
///
/// Creating one starts loading the end user and installs the keyboard
/// shortcuts on `document`; dropping it removes them and stops the debounce
/// tasks. Requests already in flight run to completion.
pub struct ReviewActions {
    end_user_id: Arc<str>,
    approve: Arc<EndUserMutation>,
    reject: Arc<EndUserMutation>,
    query: EndUserQuery,
    debounced_approve: Debounced<bool>,
    debounced_reject: Debounced<bool>,
    _keyboard: Subscription,
}

impl ReviewActions {
    /// Must be called from within a tokio runtime.
    pub fn new(
        end_user_id: impl Into<Arc<str>>,
        api: Arc<dyn EndUserApi>,
        selector: Arc<dyn NextEndUserSelector>,
        document: &DocumentEvents,
    ) -> Self {
        let end_user_id = end_user_id.into();

        let approve = Arc::new(EndUserMutation::new(
            api.clone(),
            selector.clone(),
            end_user_id.clone(),
            Decision::Approve,
        ));
        let reject = Arc::new(EndUserMutation::new(
            api.clone(),
            selector.clone(),
            end_user_id.clone(),
            Decision::Reject,
        ));

        let query = EndUserQuery::new(api, end_user_id.clone());
        query.refetch();

        let debounced_approve = debounce(approve.loading().subscribe(), LOADING_DEBOUNCE);
        let debounced_reject = debounce(reject.loading().subscribe(), LOADING_DEBOUNCE);

        let keyboard = {
            let runtime = Handle::current();
            let approve = approve.clone();
            let reject = reject.clone();
            document.subscribe(move |event, focus| {
                let Some(action) = shortcuts::resolve(event, focus) else {
                    return EventOutcome::Ignored;
                };
                debug!(?action, "Review shortcut");

                let _entered = runtime.enter();
                match action {
                    ShortcutAction::SelectNext => {
                        let selector = selector.clone();
                        tokio::spawn(async move {
                            if let Err(e) = selector.select_next().await {
                                warn!(error = %e, "Failed to select next end user");
                            }
                        });
                    }
                    ShortcutAction::Approve => {
                        approve.mutate();
                    }
                    ShortcutAction::Reject => {
                        reject.mutate();
                    }
                }
                EventOutcome::PreventDefault
            })
        };

        Self {
            end_user_id,
            approve,
            reject,
            query,
            debounced_approve,
            debounced_reject,
            _keyboard: keyboard,
        }
    }

    pub fn end_user_id(&self) -> &str {
        &self.end_user_id
    }

    /// Last successfully fetched record, if any.
    pub fn end_user(&self) -> Option<EndUserView> {
        self.query.data()
    }

    pub fn on_mutate_approve(&self) -> JoinHandle<Result<EndUserView, ActionError>> {
        self.approve.mutate()
    }

    pub fn on_mutate_reject(&self) -> JoinHandle<Result<EndUserView, ActionError>> {
        self.reject.mutate()
    }

    pub fn refetch_end_user(&self) -> JoinHandle<()> {
        self.query.refetch()
    }

    pub fn is_loading(&self) -> bool {
        self.approve.is_loading() || self.reject.is_loading() || self.is_loading_end_user()
    }

    pub fn is_loading_end_user(&self) -> bool {
        self.query.loading().is_loading()
    }

    pub fn is_loading_approve(&self) -> bool {
        self.approve.is_loading()
    }

    pub fn is_loading_reject(&self) -> bool {
        self.reject.is_loading()
    }

    pub fn debounced_is_loading_approve(&self) -> bool {
        self.debounced_approve.get()
    }

    pub fn debounced_is_loading_reject(&self) -> bool {
        self.debounced_reject.get()
    }
}
