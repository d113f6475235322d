//! The session timer state machine
//!
//! A pure value with no clock of its own: the driver calls [`SessionTimer::tick`]
//! once per second. Reaching zero and applying the resulting transition happen
//! inside the same `tick` call, so every zero-crossing produces exactly one
//! transition and observers never see `time_left == 0` outside `Done`.

use super::{config::SessionConfig, cue::Cue};
use crate::state::{Phase, SessionState};

/// Length of the "next in" gap between exercises
pub const COUNTDOWN_SECONDS: u32 = 10;
/// Spoken numbers and beeps cover the last this-many seconds of a phase
pub const CUE_WINDOW_SECONDS: u32 = 10;

/// Result of a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The phase entered on this tick, if a transition happened
    pub entered: Option<Phase>,
    pub cues: Vec<Cue>,
}

#[derive(Debug, Clone)]
pub struct SessionTimer {
    config: SessionConfig,
    phase: Phase,
    time_left: u32,
    exercise_index: usize,
    round: u32,
    paused: bool,
    elapsed_seconds: u64,
}

impl SessionTimer {
    /// Start a session in `Work` on the first exercise of round one.
    ///
    /// Returns the cues for entering the first work interval.
    pub fn start(config: SessionConfig) -> (Self, Vec<Cue>) {
        let timer = Self {
            phase: Phase::Work,
            time_left: config.work_seconds(),
            exercise_index: 0,
            round: 1,
            paused: false,
            elapsed_seconds: 0,
            config,
        };

        let mut cues = vec![Cue::SessionStart {
            exercise: timer.current_exercise_name().to_string(),
        }];
        timer.push_entry_cues(&mut cues);
        timer.push_second_cues(&mut cues);
        (timer, cues)
    }

    /// Advance the clock by one second.
    ///
    /// A no-op while paused or once `Done`.
    pub fn tick(&mut self) -> TickOutcome {
        if self.paused || self.phase.is_done() {
            return TickOutcome::default();
        }

        self.time_left = self.time_left.saturating_sub(1);
        self.elapsed_seconds += 1;

        let mut outcome = TickOutcome::default();
        if self.time_left == 0 {
            self.transition();
            outcome.entered = Some(self.phase);
            self.push_entry_cues(&mut outcome.cues);
        }
        self.push_second_cues(&mut outcome.cues);
        outcome
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn exercise_index(&self) -> usize {
        self.exercise_index
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn snapshot(&self) -> SessionState {
        SessionState {
            phase: self.phase,
            time_left: self.time_left,
            exercise_index: self.exercise_index,
            round: self.round,
            paused: self.paused,
            exercise: self.current_exercise_name().to_string(),
            up_next: self.upcoming_index().map(|i| self.exercise_name(i).to_string()),
            total_exercises: self.config.exercises().len(),
            total_rounds: self.config.rounds(),
            elapsed_seconds: self.elapsed_seconds,
        }
    }

    fn transition(&mut self) {
        match self.phase {
            Phase::Work => {
                if self.is_last_exercise() && self.is_last_round() {
                    self.phase = Phase::Done;
                    self.time_left = 0;
                } else {
                    self.phase = Phase::Countdown;
                    self.time_left = COUNTDOWN_SECONDS;
                }
            }
            Phase::Countdown => {
                if self.is_last_exercise() {
                    self.exercise_index = 0;
                    self.round += 1;
                } else {
                    self.exercise_index += 1;
                }
                self.phase = Phase::Work;
                self.time_left = self.config.work_seconds();
            }
            Phase::Done => {}
        }
    }

    /// Cues for having just entered the current phase
    fn push_entry_cues(&self, cues: &mut Vec<Cue>) {
        match self.phase {
            Phase::Work => cues.push(Cue::Go),
            Phase::Countdown => {
                if let Some(next) = self.upcoming_index() {
                    cues.push(Cue::NextExercise {
                        exercise: self.exercise_name(next).to_string(),
                    });
                }
            }
            Phase::Done => cues.push(Cue::SessionComplete),
        }
    }

    /// Per-second cues for the current `time_left`
    fn push_second_cues(&self, cues: &mut Vec<Cue>) {
        if !(1..=CUE_WINDOW_SECONDS).contains(&self.time_left) {
            return;
        }
        match self.phase {
            Phase::Work => cues.push(Cue::CountdownNumber {
                seconds: self.time_left,
            }),
            Phase::Countdown => cues.push(Cue::countdown_beep(self.time_left)),
            Phase::Done => {}
        }
    }

    /// Index of the exercise that follows the current one, `None` on the
    /// final exercise of the final round
    fn upcoming_index(&self) -> Option<usize> {
        match self.phase {
            Phase::Done => None,
            _ if !self.is_last_exercise() => Some(self.exercise_index + 1),
            _ if !self.is_last_round() => Some(0),
            _ => None,
        }
    }

    fn is_last_exercise(&self) -> bool {
        self.exercise_index + 1 >= self.config.exercises().len()
    }

    fn is_last_round(&self) -> bool {
        self.round >= self.config.rounds()
    }

    fn current_exercise_name(&self) -> &str {
        self.exercise_name(self.exercise_index)
    }

    fn exercise_name(&self, index: usize) -> &str {
        self.config
            .exercises()
            .get(index)
            .map(|exercise| exercise.name.as_str())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Amount, Exercise};

    fn exercise(id: &str) -> Exercise {
        Exercise::new(id, id, &["cue"], Amount::Reps(10))
    }

    fn timer(ids: &[&str], work: u32, rounds: u32) -> SessionTimer {
        let exercises = ids.iter().map(|id| exercise(id)).collect();
        SessionTimer::start(SessionConfig::new(exercises, work, rounds).unwrap()).0
    }

    fn tick_n(timer: &mut SessionTimer, n: u32) -> Vec<Cue> {
        (0..n).flat_map(|_| timer.tick().cues).collect()
    }

    #[test]
    fn starts_in_work_on_first_exercise() {
        let timer = timer(&["A", "B"], 30, 2);
        assert_eq!(timer.phase(), Phase::Work);
        assert_eq!(timer.time_left(), 30);
        assert_eq!(timer.exercise_index(), 0);
        assert_eq!(timer.round(), 1);
    }

    #[test]
    fn work_interval_ends_in_countdown() {
        let mut timer = timer(&["A", "B"], 30, 1);
        tick_n(&mut timer, 29);
        assert_eq!(timer.phase(), Phase::Work);
        assert_eq!(timer.time_left(), 1);

        let outcome = timer.tick();
        assert_eq!(outcome.entered, Some(Phase::Countdown));
        assert_eq!(timer.time_left(), COUNTDOWN_SECONDS);
        assert_eq!(timer.exercise_index(), 0);
    }

    #[test]
    fn countdown_advances_to_next_exercise() {
        let mut timer = timer(&["A", "B"], 30, 1);
        tick_n(&mut timer, 30 + COUNTDOWN_SECONDS);
        assert_eq!(timer.phase(), Phase::Work);
        assert_eq!(timer.exercise_index(), 1);
        assert_eq!(timer.round(), 1);
        assert_eq!(timer.time_left(), 30);
    }

    #[test]
    fn countdown_after_last_exercise_wraps_round() {
        let mut timer = timer(&["A", "B"], 5, 2);
        tick_n(&mut timer, 2 * (5 + COUNTDOWN_SECONDS));
        assert_eq!(timer.phase(), Phase::Work);
        assert_eq!(timer.exercise_index(), 0);
        assert_eq!(timer.round(), 2);
    }

    #[test]
    fn single_exercise_single_round_goes_straight_to_done() {
        let mut timer = timer(&["A"], 5, 1);
        tick_n(&mut timer, 4);
        let outcome = timer.tick();
        assert_eq!(outcome.entered, Some(Phase::Done));
        assert_eq!(timer.time_left(), 0);
        assert_eq!(outcome.cues, vec![Cue::SessionComplete]);
    }

    #[test]
    fn done_is_terminal() {
        let mut timer = timer(&["A"], 1, 1);
        timer.tick();
        assert!(timer.phase().is_done());
        let before = timer.snapshot();
        assert_eq!(timer.tick(), TickOutcome::default());
        assert_eq!(timer.snapshot(), before);
    }

    #[test]
    fn full_two_by_two_sequence() {
        let mut timer = timer(&["A", "B"], 30, 2);
        let mut visited = vec![(timer.phase(), timer.exercise_index(), timer.round())];
        let mut ticks = 0;
        while !timer.phase().is_done() {
            if timer.tick().entered.is_some() {
                visited.push((timer.phase(), timer.exercise_index(), timer.round()));
            }
            ticks += 1;
        }

        assert_eq!(
            visited,
            vec![
                (Phase::Work, 0, 1),
                (Phase::Countdown, 0, 1),
                (Phase::Work, 1, 1),
                (Phase::Countdown, 1, 1),
                (Phase::Work, 0, 2),
                (Phase::Countdown, 0, 2),
                (Phase::Work, 1, 2),
                (Phase::Done, 1, 2),
            ]
        );
        assert_eq!(ticks, 4 * 30 + 3 * COUNTDOWN_SECONDS);
        assert_eq!(timer.elapsed_seconds(), u64::from(ticks));
    }

    #[test]
    fn time_left_strictly_decreases_within_phase() {
        let mut timer = timer(&["A", "B"], 12, 2);
        let mut last = (timer.phase(), timer.time_left());
        while !timer.phase().is_done() {
            let outcome = timer.tick();
            if outcome.entered.is_none() {
                assert_eq!(timer.phase(), last.0);
                assert_eq!(timer.time_left() + 1, last.1);
            }
            last = (timer.phase(), timer.time_left());
        }
    }

    #[test]
    fn pause_freezes_everything() {
        let mut timer = timer(&["A", "B"], 30, 2);
        tick_n(&mut timer, 7);
        timer.pause();
        let frozen = timer.snapshot();
        for _ in 0..100 {
            assert_eq!(timer.tick(), TickOutcome::default());
        }
        assert_eq!(timer.time_left(), frozen.time_left);
        assert_eq!(timer.exercise_index(), frozen.exercise_index);
        assert_eq!(timer.round(), frozen.round);

        timer.resume();
        timer.tick();
        assert_eq!(timer.time_left(), frozen.time_left - 1);
    }

    #[test]
    fn pause_during_countdown_freezes_it() {
        let mut timer = timer(&["A", "B"], 2, 1);
        tick_n(&mut timer, 4);
        assert_eq!(timer.phase(), Phase::Countdown);
        assert_eq!(timer.time_left(), 8);

        timer.pause();
        for _ in 0..100 {
            assert_eq!(timer.tick(), TickOutcome::default());
        }
        assert_eq!(timer.phase(), Phase::Countdown);
        assert_eq!(timer.time_left(), 8);
        assert_eq!(timer.exercise_index(), 0);

        timer.resume();
        let outcome = timer.tick();
        assert_eq!(timer.time_left(), 7);
        assert_eq!(outcome.cues, vec![Cue::countdown_beep(7)]);
    }

    #[test]
    fn start_cues_announce_session_and_go() {
        let exercises = vec![exercise("A"), exercise("B")];
        let (_, cues) = SessionTimer::start(SessionConfig::new(exercises, 30, 1).unwrap());
        assert_eq!(
            cues,
            vec![Cue::SessionStart { exercise: "A".into() }, Cue::Go]
        );
    }

    #[test]
    fn short_work_interval_counts_from_the_start() {
        let exercises = vec![exercise("A")];
        let (_, cues) = SessionTimer::start(SessionConfig::new(exercises, 2, 1).unwrap());
        assert_eq!(
            cues,
            vec![
                Cue::SessionStart { exercise: "A".into() },
                Cue::Go,
                Cue::CountdownNumber { seconds: 2 },
            ]
        );
    }

    #[test]
    fn work_counts_down_last_ten_seconds() {
        let mut timer = timer(&["A", "B"], 15, 1);
        let spoken: Vec<u32> = tick_n(&mut timer, 14)
            .into_iter()
            .filter_map(|cue| match cue {
                Cue::CountdownNumber { seconds } => Some(seconds),
                _ => None,
            })
            .collect();
        assert_eq!(spoken, (1..=10).rev().collect::<Vec<_>>());
    }

    #[test]
    fn entering_countdown_names_upcoming_exercise_and_beeps() {
        let mut timer = timer(&["A", "B"], 1, 1);
        let outcome = timer.tick();
        assert_eq!(
            outcome.cues,
            vec![
                Cue::NextExercise { exercise: "B".into() },
                Cue::countdown_beep(COUNTDOWN_SECONDS),
            ]
        );
        assert_eq!(timer.snapshot().display_exercise(), "B");
    }

    #[test]
    fn countdown_into_new_round_names_first_exercise() {
        let mut timer = timer(&["A", "B"], 1, 2);
        tick_n(&mut timer, 1 + COUNTDOWN_SECONDS);
        let outcome = timer.tick();
        assert_eq!(outcome.entered, Some(Phase::Countdown));
        assert_eq!(outcome.cues[0], Cue::NextExercise { exercise: "A".into() });
    }

    #[test]
    fn countdown_beeps_every_second_then_go() {
        let mut timer = timer(&["A", "B"], 1, 1);
        timer.tick();
        let cues = tick_n(&mut timer, COUNTDOWN_SECONDS);
        let beeps = cues.iter().filter(|c| matches!(c, Cue::Beep { .. })).count();
        // 9..=1 after the entry beep at 10
        assert_eq!(beeps, 9);
        assert!(cues.contains(&Cue::Go));
        assert_eq!(timer.phase(), Phase::Work);
    }

    #[test]
    fn snapshot_reports_progress() {
        let mut timer = timer(&["A", "B", "C"], 4, 2);
        tick_n(&mut timer, 4 + COUNTDOWN_SECONDS);
        let snapshot = timer.snapshot();
        assert_eq!(snapshot.exercise, "B");
        assert_eq!(snapshot.up_next.as_deref(), Some("C"));
        assert_eq!(snapshot.progress_label(), "Round 1 / 2 · Exercise 2 / 3");
    }

    #[test]
    fn last_exercise_of_last_round_has_nothing_up_next() {
        let mut timer = timer(&["A", "B"], 1, 1);
        tick_n(&mut timer, 1 + COUNTDOWN_SECONDS);
        assert_eq!(timer.exercise_index(), 1);
        assert_eq!(timer.snapshot().up_next, None);
    }
}
