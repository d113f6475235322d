//! API request and response structures

use axum::{http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    catalog::Routine,
    session::SessionError,
    state::{SessionRecord, SessionState},
};

/// Body of `POST /sessions`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    /// Explicit exercise ids, in order. Takes precedence over `routine`.
    pub exercise_ids: Option<Vec<String>>,
    /// Curated routine id
    pub routine: Option<String>,
    pub work_seconds: Option<i64>,
    pub rounds: Option<i64>,
}

/// Session id plus its latest snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub state: SessionState,
    /// "Work", "Next in" or "Done"
    pub phase_label: String,
    pub progress: String,
    pub timestamp: DateTime<Utc>,
}

impl SessionResponse {
    pub fn new(id: Uuid, state: SessionState) -> Self {
        Self {
            id,
            phase_label: state.phase.label().to_string(),
            progress: state.progress_label(),
            state,
            timestamp: Utc::now(),
        }
    }
}

/// Curated routine listing entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub exercise_ids: Vec<String>,
}

impl From<Routine> for RoutineSummary {
    fn from(routine: Routine) -> Self {
        Self {
            id: routine.id,
            name: routine.name,
            description: routine.description,
            exercise_ids: routine.exercises.into_iter().map(|exercise| exercise.id).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub sessions: Vec<SessionRecord>,
}

/// Server status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub live_sessions: usize,
    pub completed_sessions: usize,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Error body returned with every non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            status: "error".to_string(),
            message: message.into(),
            timestamp: Utc::now(),
        }),
    )
}

/// Map a session error onto its HTTP status
pub fn session_error(error: SessionError) -> ApiError {
    let status = match error {
        SessionError::Closed => StatusCode::CONFLICT,
        SessionError::NoExercises
        | SessionError::InvalidWorkSeconds(_)
        | SessionError::InvalidRounds(_)
        | SessionError::Catalog(_) => StatusCode::BAD_REQUEST,
    };
    api_error(status, error.to_string())
}
