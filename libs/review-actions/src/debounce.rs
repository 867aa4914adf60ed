use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Delay used for request spinners: requests answered faster than this never
/// show one.
pub const LOADING_DEBOUNCE: Duration = Duration::from_millis(300);

/// A value that only follows its source after the source has stopped changing
/// for the configured delay. The background task stops when this is dropped.
#[derive(Debug)]
pub struct Debounced<T> {
    rx: watch::Receiver<T>,
    task: JoinHandle<()>,
}

impl<T: Clone> Debounced<T> {
    pub fn get(&self) -> T {
        self.rx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.rx.clone()
    }
}

impl<T> Drop for Debounced<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Debounces a watch channel. Must be called from within a tokio runtime.
pub fn debounce<T>(mut source: watch::Receiver<T>, delay: Duration) -> Debounced<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let (tx, rx) = watch::channel(source.borrow_and_update().clone());

    let task = tokio::spawn(async move {
        while source.changed().await.is_ok() {
            // Restart the timer on every change until the source settles.
            loop {
                tokio::select! {
                    _ = tokio::time::sleep(delay) => {
                        let settled = source.borrow_and_update().clone();
                        tx.send_if_modified(|current| {
                            if *current == settled {
                                return false;
                            }
                            *current = settled;
                            true
                        });
                        break;
                    }
                    changed = source.changed() => {
                        if changed.is_err() {
                            return;
                        }
                    }
                }
            }
        }
    });

    Debounced { rx, task }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn short_pulses_never_surface() {
        let (tx, rx) = watch::channel(false);
        let debounced = debounce(rx, LOADING_DEBOUNCE);

        tx.send_replace(true);
        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(!debounced.get());

        tx.send_replace(false);
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert!(!debounced.get());
    }

    #[tokio::test(start_paused = true)]
    async fn settled_value_surfaces_after_delay() {
        let (tx, rx) = watch::channel(false);
        let debounced = debounce(rx, LOADING_DEBOUNCE);

        tx.send_replace(true);
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert!(!debounced.get());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(debounced.get());

        tx.send_replace(false);
        tokio::time::sleep(Duration::from_millis(350)).await;
        assert!(!debounced.get());
    }

    #[tokio::test(start_paused = true)]
    async fn every_change_restarts_the_timer() {
        let (tx, rx) = watch::channel(0u32);
        let debounced = debounce(rx, Duration::from_millis(100));

        for value in 1..=5 {
            tx.send_replace(value);
            tokio::time::sleep(Duration::from_millis(60)).await;
        }
        assert_eq!(debounced.get(), 0);

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(debounced.get(), 5);
    }
}
