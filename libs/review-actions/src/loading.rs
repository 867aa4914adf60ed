use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

/// In-flight tracking for one kind of request.
///
/// Every [`LoadingGuard`] counts as one pending request; the published flag is
/// `true` while at least one guard is alive.
#[derive(Debug, Clone)]
pub struct LoadingState {
    in_flight: Arc<AtomicUsize>,
    tx: Arc<watch::Sender<bool>>,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingState {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self {
            in_flight: Arc::new(AtomicUsize::new(0)),
            tx: Arc::new(tx),
        }
    }

    /// Marks one request as pending until the guard is dropped.
    pub fn begin(&self) -> LoadingGuard {
        self.update(|count| count.fetch_add(1, Ordering::SeqCst) + 1);
        LoadingGuard {
            state: self.clone(),
        }
    }

    pub fn is_loading(&self) -> bool {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    // The counter only changes while the watch value is locked, so the
    // published flag can never disagree with the count.
    fn update(&self, op: impl FnOnce(&AtomicUsize) -> usize) {
        self.tx.send_if_modified(|loading| {
            let next = op(&self.in_flight) > 0;
            let changed = *loading != next;
            *loading = next;
            changed
        });
    }
}

#[derive(Debug)]
pub struct LoadingGuard {
    state: LoadingState,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.state
            .update(|count| count.fetch_sub(1, Ordering::SeqCst).saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_follows_guards() {
        let state = LoadingState::new();
        assert!(!state.is_loading());

        let first = state.begin();
        let second = state.begin();
        assert!(state.is_loading());

        drop(first);
        assert!(state.is_loading());

        drop(second);
        assert!(!state.is_loading());
    }

    #[test]
    fn subscribers_see_transitions() {
        let state = LoadingState::new();
        let mut rx = state.subscribe();

        let guard = state.begin();
        assert!(rx.has_changed().unwrap());
        assert!(*rx.borrow_and_update());

        drop(guard);
        assert!(!*rx.borrow_and_update());
    }
}
