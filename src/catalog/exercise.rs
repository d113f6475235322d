//! Exercise reference data

use serde::{Deserialize, Serialize};

/// Default prescription shown alongside an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "lowercase")]
pub enum Amount {
    Reps(u32),
    Seconds(u32),
}

/// A single catalog exercise. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    /// Form cues, in the order they are shown during the work interval
    pub cues: Vec<String>,
    pub default_amount: Amount,
}

impl Exercise {
    pub fn new(id: &str, name: &str, cues: &[&str], default_amount: Amount) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            cues: cues.iter().map(|cue| cue.to_string()).collect(),
            default_amount,
        }
    }
}

/// Built-in kettlebell exercises: (id, name, cues, default amount)
pub(super) const BUILTIN: &[(&str, &str, &[&str], Amount)] = &[
    (
        "swing-2h",
        "Two-hand swing",
        &["Hinge at the hips", "Snap the hips forward", "Bell floats to chest height"],
        Amount::Reps(15),
    ),
    (
        "swing-1h",
        "One-hand swing",
        &["Square shoulders", "Hike the bell back", "Switch hands each set"],
        Amount::Reps(10),
    ),
    (
        "alternating-swings",
        "Alternating swings",
        &["Switch at the top", "Keep the grip loose", "Drive with the hips"],
        Amount::Reps(16),
    ),
    (
        "dead-stop-swing",
        "Dead-stop swing",
        &["Park the bell each rep", "Reset your brace", "Explode from the floor"],
        Amount::Reps(10),
    ),
    (
        "goblet-squat",
        "Goblet squat",
        &["Bell tight to the chest", "Elbows inside the knees", "Sit between the heels"],
        Amount::Reps(10),
    ),
    (
        "clean",
        "Clean",
        &["Zip up the bell", "Soft catch in the rack", "Wrist stays straight"],
        Amount::Reps(8),
    ),
    (
        "press",
        "Overhead press",
        &["Squeeze glutes", "Press in a straight line", "Lock out overhead"],
        Amount::Reps(6),
    ),
    (
        "push-press",
        "Push press",
        &["Short dip", "Drive with the legs", "Finish with the arm"],
        Amount::Reps(8),
    ),
    (
        "row",
        "Bent-over row",
        &["Flat back", "Pull to the hip", "Control the lower"],
        Amount::Reps(10),
    ),
    (
        "plank-hold",
        "Plank hold",
        &["Elbows under shoulders", "Brace the core", "Breathe steadily"],
        Amount::Seconds(30),
    ),
    (
        "suitcase-carry",
        "Suitcase carry",
        &["Stand tall", "Do not lean", "Short quick steps"],
        Amount::Seconds(40),
    ),
    (
        "tgu",
        "Turkish get-up",
        &["Eyes on the bell", "Punch to the ceiling", "Move slowly"],
        Amount::Reps(2),
    ),
    (
        "deadlift-2h",
        "Two-hand deadlift",
        &["Bell between the feet", "Push the floor away", "Stand tall at the top"],
        Amount::Reps(10),
    ),
    (
        "snatch",
        "Snatch",
        &["Punch through at the top", "Keep the bell close", "Hinge on the drop"],
        Amount::Reps(8),
    ),
];
