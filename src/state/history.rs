//! Completed-session history

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::session::SessionTimer;

/// Default number of records returned by [`HistoryStore::recent`]
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Exercise reference stored with a completed session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRef {
    pub id: String,
    pub name: String,
}

/// Summary of a finished workout session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: Uuid,
    pub routine_name: Option<String>,
    pub exercises: Vec<ExerciseRef>,
    pub work_seconds: u32,
    pub rounds: u32,
    pub duration_seconds: u64,
    pub completed_at: DateTime<Utc>,
    /// Calendar day of completion, `YYYY-MM-DD`
    pub date: String,
}

impl SessionRecord {
    pub fn from_timer(id: Uuid, timer: &SessionTimer, completed_at: DateTime<Utc>) -> Self {
        let config = timer.config();
        Self {
            id,
            routine_name: config.routine_name().map(str::to_string),
            exercises: config
                .exercises()
                .iter()
                .map(|exercise| ExerciseRef {
                    id: exercise.id.clone(),
                    name: exercise.name.clone(),
                })
                .collect(),
            work_seconds: config.work_seconds(),
            rounds: config.rounds(),
            duration_seconds: timer.elapsed_seconds(),
            completed_at,
            date: completed_at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// In-memory store of completed sessions, oldest first
#[derive(Debug, Default)]
pub struct HistoryStore {
    records: Mutex<Vec<SessionRecord>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed session
    pub fn record(&self, record: SessionRecord) -> Result<(), String> {
        let mut records = self.records.lock()
            .map_err(|e| format!("Failed to lock session history: {}", e))?;

        info!("Recording completed session {} ({}s)", record.id, record.duration_seconds);
        records.push(record);
        Ok(())
    }

    /// Most recent sessions first, at most `limit`
    pub fn recent(&self, limit: usize) -> Vec<SessionRecord> {
        match self.records.lock() {
            Ok(records) => records.iter().rev().take(limit).cloned().collect(),
            Err(e) => {
                warn!("Failed to lock session history: {}", e);
                Vec::new()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
