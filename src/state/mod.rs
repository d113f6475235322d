//! State management module
//!
//! This module contains the session snapshot, the completed-session history
//! and the application state that owns both.

pub mod app_state;
pub mod history;
pub mod session_state;

// Re-export main types
pub use app_state::AppState;
pub use history::{HistoryStore, SessionRecord};
pub use session_state::{Phase, SessionState};
