//! Signal handling for graceful shutdown

use std::future::Future;

use futures::stream::StreamExt;
use signal_hook_tokio::Signals;
use tracing::{error, info};

/// Wait for shutdown signals (SIGTERM, SIGINT)
pub async fn shutdown_signal() -> std::io::Result<()> {
    let mut signals = Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
    ])?;

    if let Some(signal) = signals.next().await {
        info!("Received signal: {}", signal);
    }
    Ok(())
}

/// Drive `work` until it finishes or `shutdown` resolves.
///
/// A failure from either side is returned, including a shutdown future that
/// could not install its handlers.
pub async fn run_until_shutdown<W, S>(work: W, shutdown: S) -> std::io::Result<()>
where
    W: Future<Output = std::io::Result<()>>,
    S: Future<Output = std::io::Result<()>>,
{
    tokio::select! {
        result = work => {
            if let Err(e) = &result {
                error!("Server error: {}", e);
            }
            result
        }
        result = shutdown => {
            match &result {
                Ok(()) => info!("Shutdown signal received"),
                Err(e) => error!("Failed to install signal handlers: {}", e),
            }
            result
        }
    }
}
