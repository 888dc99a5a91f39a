//! Signal handling for graceful shutdown and timer reset

use std::sync::Arc;
use signal_hook_tokio::Signals;
use futures::stream::StreamExt;
use tracing::{info, warn};

use crate::{error::OverlayError, state::AppState};

/// Wait for shutdown signals (SIGTERM, SIGINT)
pub async fn shutdown_signal() -> Result<(), OverlayError> {
    let mut signals = Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
    ])?;

    if let Some(signal) = signals.next().await {
        info!("Received signal: {}", signal);
    }
    Ok(())
}

/// Reset all timers every time SIGUSR1 arrives
pub async fn reset_signal_task(state: Arc<AppState>) -> Result<(), OverlayError> {
    let mut signals = Signals::new([signal_hook::consts::SIGUSR1])?;

    while let Some(signal) = signals.next().await {
        info!("Received signal {}, resetting timers", signal);
        if let Err(e) = state.reset_all() {
            warn!("Failed to reset timers: {}", e);
        }
    }
    Ok(())
}
