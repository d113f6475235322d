//! Validated session configuration

use serde::Serialize;

use super::error::{SessionError, SessionResult};
use crate::catalog::Exercise;

/// Work duration used when the caller does not pick one
pub const DEFAULT_WORK_SECONDS: u32 = 30;
/// Round count used when the caller does not pick one
pub const DEFAULT_ROUNDS: u32 = 3;

/// Immutable parameters of one workout session.
///
/// Only constructible through [`SessionConfig::new`], so a timer never sees an
/// empty exercise list or a zero duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionConfig {
    exercises: Vec<Exercise>,
    work_seconds: u32,
    rounds: u32,
    routine_name: Option<String>,
}

impl SessionConfig {
    pub fn new(exercises: Vec<Exercise>, work_seconds: u32, rounds: u32) -> SessionResult<Self> {
        if exercises.is_empty() {
            return Err(SessionError::NoExercises);
        }
        if work_seconds == 0 {
            return Err(SessionError::InvalidWorkSeconds(0));
        }
        if rounds == 0 {
            return Err(SessionError::InvalidRounds(0));
        }

        Ok(Self {
            exercises,
            work_seconds,
            rounds,
            routine_name: None,
        })
    }

    /// Build from untrusted signed values, as received over the API
    pub fn from_signed(exercises: Vec<Exercise>, work_seconds: i64, rounds: i64) -> SessionResult<Self> {
        let work = u32::try_from(work_seconds)
            .ok()
            .filter(|w| *w > 0)
            .ok_or(SessionError::InvalidWorkSeconds(work_seconds))?;
        let rounds_checked = u32::try_from(rounds)
            .ok()
            .filter(|r| *r > 0)
            .ok_or(SessionError::InvalidRounds(rounds))?;
        Self::new(exercises, work, rounds_checked)
    }

    pub fn with_routine_name(mut self, name: impl Into<String>) -> Self {
        self.routine_name = Some(name.into());
        self
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn work_seconds(&self) -> u32 {
        self.work_seconds
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn routine_name(&self) -> Option<&str> {
        self.routine_name.as_deref()
    }
}
