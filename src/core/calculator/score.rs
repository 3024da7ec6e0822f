use crate::models::custom_exercise::CustomExerciseEntry;
use crate::models::sports_log::SportsLogEntry;
use crate::models::week::{WeekScore, WeekWindow};
use crate::models::workout_log::WorkoutLogEntry;

/// Points per completed planned exercise.
pub const WORKOUT_POINTS: i64 = 2;
/// Points per custom exercise.
pub const CUSTOM_POINTS: i64 = 1;
/// Sports minutes needed for one point (floor division).
pub const MINUTES_PER_SPORT_POINT: i64 = 20;
/// Weekly cap on sports points.
pub const MAX_SPORT_POINTS: i64 = 6;

/// Weekly consistency score.
///
/// - each non-skipped workout entry in the window: +2
/// - each custom entry in the window: +1
/// - sports: `min(6, total_minutes / 20)`, NULL minutes count as 0
///
/// Entries outside `window` are ignored. Inputs are never modified.
pub fn calc_week_score(
    workouts: &[WorkoutLogEntry],
    custom: &[CustomExerciseEntry],
    sports: &[SportsLogEntry],
    window: WeekWindow,
) -> WeekScore {
    let done = workouts
        .iter()
        .filter(|w| window.contains(w.date) && !w.skipped)
        .count() as i64;

    let extra = custom.iter().filter(|c| window.contains(c.date)).count() as i64;

    let sport_points = sport_points(sports, window);

    WeekScore {
        score: done * WORKOUT_POINTS + extra * CUSTOM_POINTS + sport_points,
        sport_points,
    }
}

/// Capped sports bonus for the window.
pub fn sport_points(sports: &[SportsLogEntry], window: WeekWindow) -> i64 {
    let total: i64 = sports
        .iter()
        .filter(|s| window.contains(s.date))
        .map(|s| s.minutes.unwrap_or(0))
        .sum();

    total.div_euclid(MINUTES_PER_SPORT_POINT).min(MAX_SPORT_POINTS)
}
