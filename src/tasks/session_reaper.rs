//! Finished-session cleanup background task

use std::{sync::Arc, time::Duration};
use tokio::time::interval;
use tracing::{info, warn};

use crate::state::AppState;

/// How often finished sessions are swept from the registry
pub const REAPER_INTERVAL: Duration = Duration::from_secs(300);

/// Background task that removes sessions which finished at least one sweep ago
pub async fn session_reaper_task(state: Arc<AppState>) {
    info!("Starting session reaper task");

    let mut interval = interval(REAPER_INTERVAL);

    loop {
        interval.tick().await;

        match state.prune_finished() {
            Ok(0) => {}
            Ok(removed) => info!("Removed {} finished sessions", removed),
            Err(e) => warn!("Failed to prune finished sessions: {}", e),
        }
    }
}
