//! Kettlebell Coach - A state-managed HTTP server that runs workout session timers
//!
//! This is the main entry point for the kettlebell-coach application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use kettlebell_coach::{
    api::create_router,
    config::Config,
    services::{CueSink, TracingCueSink},
    state::AppState,
    tasks::{cue_channel, cue_dispatcher_task, session_reaper_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("kettlebell_coach={},tower_http=info", config.log_level()))
        .init();

    info!("Starting kettlebell-coach server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, voice={:?}",
          config.host, config.port, config.voice);

    // Coach cues flow from every session timer into one dispatcher
    let (cue_tx, cue_rx) = cue_channel();
    let sink: Arc<dyn CueSink> = Arc::new(TracingCueSink);
    tokio::spawn(cue_dispatcher_task(cue_rx, sink, config.voice));

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone(), cue_tx));

    // Start the finished-session reaper
    let reaper_state = Arc::clone(&state);
    tokio::spawn(async move {
        session_reaper_task(reaper_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET    /exercises            - Exercise catalog");
    info!("  GET    /routines             - Curated routines");
    info!("  POST   /sessions             - Start a workout session");
    info!("  GET    /sessions/:id         - Session snapshot");
    info!("  POST   /sessions/:id/pause   - Pause a session");
    info!("  POST   /sessions/:id/resume  - Resume a session");
    info!("  DELETE /sessions/:id         - Quit a session");
    info!("  GET    /history              - Completed sessions");
    info!("  GET    /status               - Server status");
    info!("  GET    /health               - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
