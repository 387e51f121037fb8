//! Graceful shutdown handling
//!
//! Single future that resolves on SIGINT or SIGTERM, for use with
//! `axum::serve(..).with_graceful_shutdown(..)`.

use tracing::info;

/// Wait for an OS shutdown signal (SIGTERM or Ctrl+C).
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                let _ = tokio::signal::ctrl_c().await;
                info!("🛑 Received Ctrl+C, shutting down");
                return;
            }
        };

        tokio::select! {
            _ = sigterm.recv() => info!("🛑 Received SIGTERM, shutting down"),
            _ = tokio::signal::ctrl_c() => info!("🛑 Received Ctrl+C, shutting down"),
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        info!("🛑 Received Ctrl+C, shutting down");
    }
}
