//! Workout session module
//!
//! Configuration, the timer state machine and the cues it emits.

pub mod config;
pub mod cue;
pub mod error;
pub mod machine;

pub use config::{SessionConfig, DEFAULT_ROUNDS, DEFAULT_WORK_SECONDS};
pub use cue::Cue;
pub use error::{SessionError, SessionResult};
pub use machine::{SessionTimer, TickOutcome, COUNTDOWN_SECONDS};
