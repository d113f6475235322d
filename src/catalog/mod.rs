//! Exercise catalog module
//!
//! Static reference data the session timer consumes: exercises, curated
//! routines and the daily rotation.

pub mod exercise;
mod rotation;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

pub use exercise::{Amount, Exercise};

/// Number of exercises in a daily rotation
pub const DAILY_ROTATION_SIZE: usize = 6;

/// Id of the curated routine backed by the daily rotation
pub const DAILY_ROUTINE_ID: &str = "daily";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown exercise: {0}")]
    UnknownExercise(String),

    #[error("Unknown routine: {0}")]
    UnknownRoutine(String),
}

/// Curated routine definitions: (id, name, description, exercise ids).
/// The daily routine has no fixed ids.
const CURATED: &[(&str, &str, &str, &[&str])] = &[
    (DAILY_ROUTINE_ID, "Today's rotation", "Daily mix of 6 exercises", &[]),
    (
        "quick-6",
        "Quick 6",
        "Swing, goblet squat, clean, press, row, plank",
        &["swing-2h", "goblet-squat", "clean", "press", "row", "plank-hold"],
    ),
    (
        "full-body",
        "Full body",
        "Hinge, squat, press, pull, carry",
        &["swing-2h", "goblet-squat", "push-press", "row", "suitcase-carry"],
    ),
    (
        "strength",
        "Strength focus",
        "Heavier moves: TGU, goblet, press, deadlift",
        &["tgu", "goblet-squat", "press", "deadlift-2h"],
    ),
    (
        "cardio",
        "Cardio flow",
        "Swings and snatches for conditioning",
        &["swing-2h", "swing-1h", "snatch", "alternating-swings", "dead-stop-swing"],
    ),
];

/// A curated routine with its exercises resolved
#[derive(Debug, Clone, Serialize)]
pub struct Routine {
    pub id: String,
    pub name: String,
    pub description: String,
    pub exercises: Vec<Exercise>,
}

/// The exercise catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    exercises: Vec<Exercise>,
}

impl Catalog {
    /// Catalog of the built-in kettlebell exercises
    pub fn builtin() -> Self {
        Self::from_exercises(
            exercise::BUILTIN
                .iter()
                .map(|(id, name, cues, amount)| Exercise::new(id, name, cues, *amount))
                .collect(),
        )
    }

    pub fn from_exercises(exercises: Vec<Exercise>) -> Self {
        Self { exercises }
    }

    pub fn all(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn get(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|exercise| exercise.id == id)
    }

    /// Look up exercises by id, preserving the requested order
    pub fn resolve<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Exercise>, CatalogError> {
        ids.iter()
            .map(|id| {
                let id = id.as_ref();
                self.get(id)
                    .cloned()
                    .ok_or_else(|| CatalogError::UnknownExercise(id.to_string()))
            })
            .collect()
    }

    /// The rotation of `count` exercises for the given day
    pub fn daily_rotation(&self, date: NaiveDate, count: usize) -> Vec<Exercise> {
        rotation::rotate_for_day(&self.exercises, date, count)
    }

    /// Resolve a curated routine by id. `today` seeds the daily rotation.
    pub fn routine(&self, id: &str, today: NaiveDate) -> Result<Routine, CatalogError> {
        let (id, name, description, ids) = CURATED
            .iter()
            .find(|(routine_id, ..)| *routine_id == id)
            .ok_or_else(|| CatalogError::UnknownRoutine(id.to_string()))?;

        let exercises = if *id == DAILY_ROUTINE_ID {
            self.daily_rotation(today, DAILY_ROTATION_SIZE)
        } else {
            self.resolve(ids)?
        };

        Ok(Routine {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            exercises,
        })
    }

    /// All curated routines that resolve against this catalog
    pub fn routines(&self, today: NaiveDate) -> Vec<Routine> {
        CURATED
            .iter()
            .filter_map(|(id, ..)| self.routine(id, today).ok())
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn resolve_preserves_order() {
        let catalog = Catalog::builtin();
        let exercises = catalog.resolve(&["press", "swing-2h", "row"]).unwrap();
        let ids: Vec<&str> = exercises.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["press", "swing-2h", "row"]);
    }

    #[test]
    fn resolve_rejects_unknown_id() {
        let catalog = Catalog::builtin();
        let err = catalog.resolve(&["press", "burpee"]).unwrap_err();
        assert_eq!(err, CatalogError::UnknownExercise("burpee".to_string()));
    }

    #[test]
    fn every_exercise_has_cues() {
        for exercise in Catalog::builtin().all() {
            assert!(!exercise.cues.is_empty(), "{} has no cues", exercise.id);
        }
    }

    #[test]
    fn daily_rotation_has_no_duplicates() {
        let rotation = Catalog::builtin().daily_rotation(today(), DAILY_ROTATION_SIZE);
        let ids: HashSet<&str> = rotation.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(rotation.len(), DAILY_ROTATION_SIZE);
        assert_eq!(ids.len(), DAILY_ROTATION_SIZE);
    }

    #[test]
    fn curated_routines_all_resolve() {
        let catalog = Catalog::builtin();
        let routines = catalog.routines(today());
        assert_eq!(routines.len(), CURATED.len());
        assert!(routines.iter().all(|r| !r.exercises.is_empty()));
    }

    #[test]
    fn daily_routine_matches_rotation() {
        let catalog = Catalog::builtin();
        let routine = catalog.routine(DAILY_ROUTINE_ID, today()).unwrap();
        assert_eq!(routine.exercises, catalog.daily_rotation(today(), DAILY_ROTATION_SIZE));
    }

    #[test]
    fn unknown_routine_is_an_error() {
        let err = Catalog::builtin().routine("yoga", today()).unwrap_err();
        assert_eq!(err, CatalogError::UnknownRoutine("yoga".to_string()));
    }
}
