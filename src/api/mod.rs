//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/exercises", get(exercises_handler))
        .route("/routines", get(routines_handler))
        .route("/sessions", post(create_session_handler))
        .route("/sessions/:id", get(get_session_handler).delete(quit_session_handler))
        .route("/sessions/:id/pause", post(pause_session_handler))
        .route("/sessions/:id/resume", post(resume_session_handler))
        .route("/history", get(history_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
