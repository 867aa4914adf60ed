//! # Review actions
//!
//! Client-side orchestration of the end-user review flow: approve and reject
//! triggers bound to one end user, loading flags (raw and debounced), and the
//! Ctrl+ArrowDown / Ctrl+A / Ctrl+J keyboard shortcuts.
//!
//! ```rust,ignore
//! use review_actions::{DocumentEvents, HttpEndUserApi, QueueSelector, ReviewActions};
//!
//! let api = Arc::new(HttpEndUserApi::new("http://localhost:3333", token)?);
//! let selector = Arc::new(QueueSelector::new(api.clone(), None));
//! let document = DocumentEvents::new();
//!
//! let actions = ReviewActions::new(end_user_id, api, selector, &document);
//! actions.on_mutate_approve().await??;
//! ```

mod actions;
mod api;
mod debounce;
mod error;
mod loading;
mod model;
mod mutation;
mod query;
mod selection;

pub mod events;
pub mod shortcuts;

pub use actions::ReviewActions;
pub use api::{EndUserApi, HttpEndUserApi};
pub use debounce::{debounce, Debounced, LOADING_DEBOUNCE};
pub use error::ActionError;
pub use events::{DocumentEvents, ElementKind, EventOutcome, Focus, Key, KeyEvent, Subscription};
pub use loading::{LoadingGuard, LoadingState};
pub use model::{ApprovalState, EndUserView};
pub use mutation::{Decision, EndUserMutation};
pub use query::EndUserQuery;
pub use selection::{NextEndUserSelector, QueueSelector};
pub use shortcuts::ShortcutAction;
