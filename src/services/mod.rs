//! External collaborator module
//!
//! This module contains the coach voice/audio side of a session: where cues
//! go once the timer has produced them.

pub mod coach;

// Re-export main types
pub use coach::{CueError, CueSink, TracingCueSink, VoicePreference};
