//! Session snapshot structure published to observers

use serde::{Deserialize, Serialize};

/// Timer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// The current exercise is being performed
    Work,
    /// Fixed "next in" gap before the next exercise
    Countdown,
    /// Terminal
    Done,
}

impl Phase {
    pub fn is_done(&self) -> bool {
        matches!(self, Phase::Done)
    }

    /// Label shown above the clock
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Work => "Work",
            Phase::Countdown => "Next in",
            Phase::Done => "Done",
        }
    }
}

/// Read-only snapshot of a running session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub phase: Phase,
    pub time_left: u32,
    /// 0-based index into the session's exercises
    pub exercise_index: usize,
    /// 1-based round number
    pub round: u32,
    pub paused: bool,
    /// Name of the exercise being performed (or just finished, during countdown)
    pub exercise: String,
    /// Name of the exercise that follows, if any
    pub up_next: Option<String>,
    pub total_exercises: usize,
    pub total_rounds: u32,
    /// Seconds of timer that have actually run
    pub elapsed_seconds: u64,
}

impl SessionState {
    /// The exercise to show on screen: the current one while working, the
    /// upcoming one during the countdown
    pub fn display_exercise(&self) -> &str {
        match (self.phase, &self.up_next) {
            (Phase::Countdown, Some(next)) => next,
            _ => &self.exercise,
        }
    }

    /// "Round r / R · Exercise i / N"
    pub fn progress_label(&self) -> String {
        format!(
            "Round {} / {} · Exercise {} / {}",
            self.round,
            self.total_rounds,
            self.exercise_index + 1,
            self.total_exercises
        )
    }
}
