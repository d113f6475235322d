//! Coach cues emitted by the session timer

use serde::Serialize;

/// Beep pitch for the "next in" countdown
pub const BEEP_FREQUENCY_HZ: u32 = 880;
/// Higher pitch used for the final seconds of the countdown
pub const FINAL_BEEP_FREQUENCY_HZ: u32 = 1200;
pub const BEEP_DURATION_MS: u32 = 120;
/// Seconds at the end of a countdown that use the higher pitch
pub const FINAL_BEEP_SECONDS: u32 = 3;

/// A notification for the voice/audio collaborator.
///
/// Cues never feed back into the timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cue {
    SessionStart { exercise: String },
    Go,
    CountdownNumber { seconds: u32 },
    NextExercise { exercise: String },
    Beep { frequency_hz: u32, duration_ms: u32 },
    SessionComplete,
}

impl Cue {
    /// Beep for a countdown second, higher pitched near the end
    pub fn countdown_beep(time_left: u32) -> Self {
        let frequency_hz = if time_left <= FINAL_BEEP_SECONDS {
            FINAL_BEEP_FREQUENCY_HZ
        } else {
            BEEP_FREQUENCY_HZ
        };
        Cue::Beep {
            frequency_hz,
            duration_ms: BEEP_DURATION_MS,
        }
    }

    /// The spoken phrase for this cue, `None` for non-verbal cues
    pub fn phrase(&self) -> Option<String> {
        match self {
            Cue::SessionStart { exercise } => Some(format!(
                "Let's go! You're going to crush this. Starting with {}.",
                exercise
            )),
            Cue::Go => Some("Go! Give it everything you've got!".to_string()),
            Cue::CountdownNumber { seconds } => countdown_phrase(*seconds),
            Cue::NextExercise { exercise } => Some(format!(
                "Nice work! Next up, {}. You're doing great.",
                exercise
            )),
            Cue::Beep { .. } => None,
            Cue::SessionComplete => {
                Some("Amazing work! Session complete. You crushed it today!".to_string())
            }
        }
    }
}

fn countdown_phrase(seconds: u32) -> Option<String> {
    let phrase = match seconds {
        1 => "One! Last second!",
        2 => "Two! Almost there!",
        3 => "Three! Keep it up!",
        4 => "Four",
        5 => "Five",
        6 => "Six",
        7 => "Seven",
        8 => "Eight",
        9 => "Nine",
        10 => "Ten",
        _ => return None,
    };
    Some(phrase.to_string())
}
