use crate::core::calculator::{score, week};
use crate::models::custom_exercise::CustomExerciseEntry;
use crate::models::sports_log::SportsLogEntry;
use crate::models::week::{WeekScore, WeekWindow};
use crate::models::workout_log::WorkoutLogEntry;
use chrono::NaiveDate;

pub struct Core;

impl Core {
    /// Score the calendar week that contains `reference`.
    pub fn score_week(
        workouts: &[WorkoutLogEntry],
        custom: &[CustomExerciseEntry],
        sports: &[SportsLogEntry],
        reference: NaiveDate,
    ) -> (WeekWindow, WeekScore) {
        let window = week::week_range(reference);
        let result = score::calc_week_score(workouts, custom, sports, window);
        (window, result)
    }

    /// The first `limit` non-skipped entries of a newest-first list.
    pub fn recent_activity(logs: &[WorkoutLogEntry], limit: usize) -> Vec<WorkoutLogEntry> {
        logs.iter()
            .filter(|l| !l.skipped)
            .take(limit)
            .cloned()
            .collect()
    }
}
