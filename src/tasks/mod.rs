//! Background tasks module
//!
//! This module contains the tasks that run alongside the HTTP server: one
//! timer per session, the cue dispatcher and the registry reaper.

pub mod cue_dispatcher;
pub mod session_reaper;
pub mod session_timer;

// Re-export main functions
pub use cue_dispatcher::{cue_channel, cue_dispatcher_task, CueEvent, CueReceiver, CueSender};
pub use session_reaper::session_reaper_task;
pub use session_timer::{spawn_session, SessionCommand, SessionHandle, PAUSED_SESSION_TIMEOUT};
