use std::future::Future;
use std::time::Duration;
use tokio::signal;

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, initiating graceful shutdown");
        }
    }
}

/// Drives `server` to completion, but once `shutdown` resolves gives it at
/// most `timeout` to drain. Returns `None` when the deadline cut it short.
pub async fn drain_with_deadline<F, S>(server: F, shutdown: S, timeout: Duration) -> Option<F::Output>
where
    F: Future,
    S: Future<Output = ()>,
{
    tokio::pin!(server);
    tokio::pin!(shutdown);

    tokio::select! {
        output = &mut server => return Some(output),
        _ = &mut shutdown => {}
    }

    tracing::info!(timeout_secs = timeout.as_secs(), "allowing connections to drain");
    match tokio::time::timeout(timeout, server).await {
        Ok(output) => Some(output),
        Err(_) => {
            tracing::warn!(
                timeout_secs = timeout.as_secs(),
                "connections still open after shutdown deadline, exiting"
            );
            None
        }
    }
}
