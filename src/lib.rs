//! Kettlebell Coach - A state-managed HTTP server that runs workout session timers
//!
//! This library provides the session timer state machine (work, countdown,
//! done), the background task that drives it once per second, coach cue
//! dispatch, the exercise catalog and completed-session history.

pub mod api;
pub mod catalog;
pub mod config;
pub mod services;
pub mod session;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use catalog::Catalog;
pub use config::Config;
pub use session::{SessionConfig, SessionError, SessionTimer};
pub use state::{AppState, Phase, SessionState};
pub use utils::signals::shutdown_signal;
