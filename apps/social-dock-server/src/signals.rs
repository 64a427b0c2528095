use anyhow::Result;
use tokio::signal;

/// Wait until the process is asked to stop (Ctrl+C, or SIGTERM on unix).
///
/// # Errors
/// Returns an error if a signal handler cannot be installed.
pub async fn wait_for_shutdown() -> Result<()> {
    let name = tokio::select! {
        result = wait_ctrl_c() => result?,
        result = wait_sigterm() => result?,
    };

    tracing::info!(signal = name, "shutdown: signal received");
    Ok(())
}

async fn wait_ctrl_c() -> Result<&'static str> {
    signal::ctrl_c().await.map_err(|e| {
        tracing::error!(%e, "shutdown: failed to listen for Ctrl+C");
        e
    })?;
    Ok("SIGINT")
}

#[cfg(unix)]
async fn wait_sigterm() -> Result<&'static str> {
    let mut terminate =
        signal::unix::signal(signal::unix::SignalKind::terminate()).map_err(|e| {
            tracing::error!(%e, "shutdown: failed to install SIGTERM handler");
            e
        })?;
    terminate.recv().await;
    Ok("SIGTERM")
}

#[cfg(not(unix))]
async fn wait_sigterm() -> Result<&'static str> {
    std::future::pending::<Result<&'static str>>().await
}
