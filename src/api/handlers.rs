//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::{NaiveDate, Utc};
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    catalog::{Exercise, DAILY_ROUTINE_ID},
    session::{SessionConfig, SessionError, SessionResult, DEFAULT_ROUNDS, DEFAULT_WORK_SECONDS},
    state::{history::DEFAULT_HISTORY_LIMIT, AppState},
    tasks::SessionHandle,
};
use super::responses::{
    api_error, session_error, ApiError, CreateSessionRequest, HealthResponse, HistoryQuery,
    HistoryResponse, RoutineSummary, SessionResponse, StatusResponse,
};

/// Handle GET /exercises - The exercise catalog
pub async fn exercises_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Exercise>> {
    Json(state.catalog.all().to_vec())
}

/// Handle GET /routines - Curated routines, with today's rotation resolved
pub async fn routines_handler(State(state): State<Arc<AppState>>) -> Json<Vec<RoutineSummary>> {
    let today = Utc::now().date_naive();
    Json(
        state.catalog
            .routines(today)
            .into_iter()
            .map(RoutineSummary::from)
            .collect(),
    )
}

/// Handle POST /sessions - Validate the configuration and start a session timer
pub async fn create_session_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let config = build_session_config(&state, request, Utc::now().date_naive())
        .map_err(|e| {
            info!("Rejected session request: {}", e);
            session_error(e)
        })?;

    let handle = state.start_session(config).map_err(|e| {
        error!("Failed to start session: {}", e);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, e)
    })?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse::new(handle.id(), handle.snapshot())),
    ))
}

/// Handle GET /sessions/:id - Latest snapshot of a session
pub async fn get_session_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, ApiError> {
    let handle = find_session(&state, &id)?;
    Ok(Json(SessionResponse::new(id, handle.snapshot())))
}

/// Handle POST /sessions/:id/pause - Suspend the tick
pub async fn pause_session_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, ApiError> {
    let handle = find_session(&state, &id)?;
    let snapshot = handle.pause().await.map_err(session_error)?;
    state.record_action(&format!("pause {}", id));
    Ok(Json(SessionResponse::new(id, snapshot)))
}

/// Handle POST /sessions/:id/resume - Restart the tick
pub async fn resume_session_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, ApiError> {
    let handle = find_session(&state, &id)?;
    let snapshot = handle.resume().await.map_err(session_error)?;
    state.record_action(&format!("resume {}", id));
    Ok(Json(SessionResponse::new(id, snapshot)))
}

/// Handle DELETE /sessions/:id - Quit and discard the session
pub async fn quit_session_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, ApiError> {
    let handle = state
        .remove_session(&id)
        .map_err(|e| {
            error!("Failed to remove session {}: {}", id, e);
            api_error(StatusCode::INTERNAL_SERVER_ERROR, e)
        })?
        .ok_or_else(|| not_found(&id))?;

    // A finished session has no task left to stop
    let snapshot = match handle.quit().await {
        Ok(snapshot) => snapshot,
        Err(SessionError::Closed) => handle.snapshot(),
        Err(e) => return Err(session_error(e)),
    };

    Ok(Json(SessionResponse::new(id, snapshot)))
}

/// Handle GET /history - Completed sessions, newest first
pub async fn history_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoryQuery>,
) -> Json<HistoryResponse> {
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    Json(HistoryResponse {
        sessions: state.history.recent(limit),
    })
}

/// Handle GET /status - Return current server status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        live_sessions: state.live_session_count(),
        completed_sessions: state.history.len(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Resolve the request into a validated configuration.
///
/// Explicit exercise ids win over a routine id; with neither, today's
/// rotation is used.
pub fn build_session_config(
    state: &AppState,
    request: CreateSessionRequest,
    today: NaiveDate,
) -> SessionResult<SessionConfig> {
    let work_seconds = request.work_seconds.unwrap_or(i64::from(DEFAULT_WORK_SECONDS));
    let rounds = request.rounds.unwrap_or(i64::from(DEFAULT_ROUNDS));

    let (exercises, routine_name) = match (request.exercise_ids, request.routine) {
        (Some(ids), _) => (state.catalog.resolve(&ids)?, None),
        (None, routine) => {
            let routine_id = routine.as_deref().unwrap_or(DAILY_ROUTINE_ID);
            let routine = state.catalog.routine(routine_id, today)?;
            (routine.exercises, Some(routine.name))
        }
    };

    let config = SessionConfig::from_signed(exercises, work_seconds, rounds)?;
    Ok(match routine_name {
        Some(name) => config.with_routine_name(name),
        None => config,
    })
}

fn find_session(state: &AppState, id: &Uuid) -> Result<SessionHandle, ApiError> {
    state
        .session(id)
        .map_err(|e| {
            error!("Failed to look up session {}: {}", id, e);
            api_error(StatusCode::INTERNAL_SERVER_ERROR, e)
        })?
        .ok_or_else(|| not_found(id))
}

fn not_found(id: &Uuid) -> ApiError {
    api_error(StatusCode::NOT_FOUND, format!("Session {} not found", id))
}
