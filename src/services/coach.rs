//! Coach voice and audio output

use async_trait::async_trait;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::session::Cue;

/// The user's coach voice setting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VoicePreference {
    #[default]
    Female,
    Male,
    /// No spoken cues and no beeps
    Off,
}

impl VoicePreference {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, VoicePreference::Off)
    }
}

#[derive(Debug, Error)]
pub enum CueError {
    #[error("Audio output unavailable: {0}")]
    Unavailable(String),
}

/// Destination for coach cues.
///
/// Delivery is best effort: callers log and drop errors, a failing sink
/// never affects the timer.
#[async_trait]
pub trait CueSink: Send + Sync {
    async fn deliver(&self, voice: VoicePreference, cue: &Cue) -> Result<(), CueError>;
}

/// Sink that writes cues to the log
#[derive(Debug, Default, Clone)]
pub struct TracingCueSink;

#[async_trait]
impl CueSink for TracingCueSink {
    async fn deliver(&self, voice: VoicePreference, cue: &Cue) -> Result<(), CueError> {
        match cue.phrase() {
            Some(phrase) => info!(?voice, "Coach: {}", phrase),
            None => debug!("Coach cue: {:?}", cue),
        }
        Ok(())
    }
}
