//! Main application state management

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use super::HistoryStore;
use crate::{
    catalog::Catalog,
    session::SessionConfig,
    tasks::{spawn_session, CueSender, SessionHandle},
};

/// Registry entry for a session known to the server
#[derive(Debug)]
struct SessionEntry {
    handle: SessionHandle,
    /// Number of reaper sweeps that have seen this session closed
    closed_sweeps: u8,
}

/// Application state: the composition root that owns the catalog, the live
/// sessions and the completed-session history
#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    /// Live and recently finished sessions by id
    sessions: Mutex<HashMap<Uuid, SessionEntry>>,
    pub history: Arc<HistoryStore>,
    /// Where session timers publish their coach cues
    cue_tx: CueSender,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
}

impl AppState {
    /// Create a new AppState with the built-in catalog and an empty history
    pub fn new(port: u16, host: String, cue_tx: CueSender) -> Self {
        Self {
            catalog: Catalog::builtin(),
            sessions: Mutex::new(HashMap::new()),
            history: Arc::new(HistoryStore::new()),
            cue_tx,
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
        }
    }

    /// Start a session timer and register it
    pub fn start_session(&self, config: SessionConfig) -> Result<SessionHandle, String> {
        let handle = spawn_session(config, self.cue_tx.clone(), Arc::clone(&self.history));

        let mut sessions = self.sessions.lock()
            .map_err(|e| format!("Failed to lock session registry: {}", e))?;
        sessions.insert(handle.id(), SessionEntry {
            handle: handle.clone(),
            closed_sweeps: 0,
        });
        drop(sessions);

        self.record_action(&format!("start {}", handle.id()));
        Ok(handle)
    }

    /// Look up a session by id
    pub fn session(&self, id: &Uuid) -> Result<Option<SessionHandle>, String> {
        self.sessions.lock()
            .map(|sessions| sessions.get(id).map(|entry| entry.handle.clone()))
            .map_err(|e| format!("Failed to lock session registry: {}", e))
    }

    /// Remove a session from the registry, returning its handle
    pub fn remove_session(&self, id: &Uuid) -> Result<Option<SessionHandle>, String> {
        let removed = self.sessions.lock()
            .map(|mut sessions| sessions.remove(id).map(|entry| entry.handle))
            .map_err(|e| format!("Failed to lock session registry: {}", e))?;

        if removed.is_some() {
            self.record_action(&format!("quit {}", id));
        }
        Ok(removed)
    }

    /// Count of sessions whose timer is still running
    pub fn live_session_count(&self) -> usize {
        self.sessions.lock()
            .map(|sessions| sessions.values().filter(|entry| !entry.handle.is_closed()).count())
            .unwrap_or(0)
    }

    /// Drop finished sessions that were already closed on the previous sweep.
    ///
    /// Keeps a finished session inspectable for at least one full sweep
    /// interval. Returns the number removed.
    pub fn prune_finished(&self) -> Result<usize, String> {
        let mut sessions = self.sessions.lock()
            .map_err(|e| format!("Failed to lock session registry: {}", e))?;

        let before = sessions.len();
        sessions.retain(|id, entry| {
            if !entry.handle.is_closed() {
                return true;
            }
            entry.closed_sweeps = entry.closed_sweeps.saturating_add(1);
            if entry.closed_sweeps > 1 {
                debug!("Pruning finished session {}", id);
                false
            } else {
                true
            }
        });

        Ok(before - sessions.len())
    }

    /// Remember the most recent action for the status endpoint
    pub fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
        info!("Action: {}", action);
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
