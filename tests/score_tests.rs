mod common;
use common::d;

use rfitlogger::core::calculator::score::{calc_week_score, sport_points};
use rfitlogger::core::calculator::week::week_range;
use rfitlogger::core::logic::Core;
use rfitlogger::models::custom_exercise::CustomExerciseEntry;
use rfitlogger::models::sports_log::SportsLogEntry;
use rfitlogger::models::week::{WeekScore, WeekWindow};
use rfitlogger::models::workout_log::WorkoutLogEntry;

fn week() -> WeekWindow {
    // Monday 2026-02-02 .. Sunday 2026-02-08
    week_range(d("2026-02-04"))
}

fn workout(date: &str, skipped: bool) -> WorkoutLogEntry {
    WorkoutLogEntry {
        date: d(date),
        exercise: "Squat".to_string(),
        sets: 3,
        reps: 8,
        skipped,
        ..Default::default()
    }
}

fn custom(date: &str) -> CustomExerciseEntry {
    CustomExerciseEntry {
        date: d(date),
        exercise: "Plank".to_string(),
        ..Default::default()
    }
}

fn sport(date: &str, minutes: Option<i64>) -> SportsLogEntry {
    SportsLogEntry {
        date: d(date),
        sport: "Football".to_string(),
        minutes,
        ..Default::default()
    }
}

#[test]
fn test_week_range_monday_to_sunday() {
    let w = week_range(d("2026-02-04"));
    assert_eq!(w.start, d("2026-02-02"));
    assert_eq!(w.end, d("2026-02-08"));

    // Monday and Sunday belong to their own week
    assert_eq!(week_range(d("2026-02-02")), w);
    assert_eq!(week_range(d("2026-02-08")), w);
    assert_eq!(week_range(d("2026-02-09")).start, d("2026-02-09"));
}

#[test]
fn test_week_range_across_year_boundary() {
    let w = week_range(d("2026-01-01"));
    assert_eq!(w.start, d("2025-12-29"));
    assert_eq!(w.end, d("2026-01-04"));
}

#[test]
fn test_week_label() {
    assert_eq!(week().label(), "02 Feb - 08 Feb");
}

#[test]
fn test_empty_inputs_score_zero() {
    let s = calc_week_score(&[], &[], &[], week());
    assert_eq!(s, WeekScore { score: 0, sport_points: 0 });
}

#[test]
fn test_skipped_workouts_score_nothing() {
    let logs: Vec<_> = (0..4).map(|_| workout("2026-02-03", true)).collect();
    let s = calc_week_score(&logs, &[], &[], week());
    assert_eq!(s.score, 0);
}

#[test]
fn test_workouts_score_two_points_each() {
    let logs: Vec<_> = ["2026-02-02", "2026-02-03", "2026-02-04", "2026-02-05", "2026-02-06"]
        .iter()
        .map(|day| workout(day, false))
        .collect();

    let s = calc_week_score(&logs, &[], &[], week());
    assert_eq!(s, WeekScore { score: 10, sport_points: 0 });
}

#[test]
fn test_custom_exercises_score_one_point_each() {
    let extra = vec![custom("2026-02-02"), custom("2026-02-05"), custom("2026-02-08")];
    let s = calc_week_score(&[], &extra, &[], week());
    assert_eq!(s.score, 3);
}

#[test]
fn test_sport_minutes_floor_division() {
    let s = calc_week_score(&[], &[], &[sport("2026-02-03", Some(39))], week());
    assert_eq!(s, WeekScore { score: 1, sport_points: 1 });

    let s = calc_week_score(&[], &[], &[sport("2026-02-03", Some(19))], week());
    assert_eq!(s.sport_points, 0);

    // minutes are summed across the week before dividing
    let split = vec![sport("2026-02-03", Some(10)), sport("2026-02-05", Some(10))];
    assert_eq!(sport_points(&split, week()), 1);
}

#[test]
fn test_sport_points_are_capped() {
    let s = calc_week_score(&[], &[], &[sport("2026-02-07", Some(200))], week());
    assert_eq!(s, WeekScore { score: 6, sport_points: 6 });

    let exact = vec![sport("2026-02-07", Some(120))];
    assert_eq!(sport_points(&exact, week()), 6);
}

#[test]
fn test_null_minutes_count_as_zero() {
    let sports = vec![sport("2026-02-03", None), sport("2026-02-04", Some(40))];
    assert_eq!(sport_points(&sports, week()), 2);
}

#[test]
fn test_entries_outside_window_are_ignored() {
    let logs = vec![
        workout("2026-02-01", false), // Sunday before
        workout("2026-02-02", false), // Monday
        workout("2026-02-08", false), // Sunday
        workout("2026-02-09", false), // Monday after
    ];
    let extra = vec![custom("2026-01-31"), custom("2026-02-10")];
    let sports = vec![sport("2026-02-09", Some(120))];

    let s = calc_week_score(&logs, &extra, &sports, week());
    assert_eq!(s, WeekScore { score: 4, sport_points: 0 });
}

#[test]
fn test_custom_and_sports_on_adjacent_days_are_ignored() {
    // Sunday before and Monday after the window
    let extra = vec![custom("2026-02-01"), custom("2026-02-09")];
    let sports = vec![sport("2026-02-01", Some(60)), sport("2026-02-09", Some(60))];

    let s = calc_week_score(&[], &extra, &sports, week());
    assert_eq!(s, WeekScore { score: 0, sport_points: 0 });

    let edges = vec![custom("2026-02-02"), custom("2026-02-08")];
    let edge_sports = vec![sport("2026-02-02", Some(20)), sport("2026-02-08", Some(20))];
    let s = calc_week_score(&[], &edges, &edge_sports, week());
    assert_eq!(s, WeekScore { score: 4, sport_points: 2 });
}

#[test]
fn test_mixed_week() {
    let logs = vec![
        workout("2026-02-02", false),
        workout("2026-02-02", false),
        workout("2026-02-04", true),
    ];
    let extra = vec![custom("2026-02-06")];
    let sports = vec![sport("2026-02-07", Some(45))];

    let s = calc_week_score(&logs, &extra, &sports, week());
    assert_eq!(s, WeekScore { score: 7, sport_points: 2 });
}

#[test]
fn test_score_is_deterministic_and_inputs_untouched() {
    let logs = vec![workout("2026-02-03", false), workout("2026-02-04", true)];
    let extra = vec![custom("2026-02-05")];
    let sports = vec![sport("2026-02-06", Some(60))];
    let before = (logs.clone(), extra.clone(), sports.clone());

    let first = calc_week_score(&logs, &extra, &sports, week());
    let second = calc_week_score(&logs, &extra, &sports, week());

    assert_eq!(first, second);
    assert_eq!((logs, extra, sports), before);
}

#[test]
fn test_score_week_uses_reference_date() {
    let logs = vec![workout("2026-02-03", false), workout("2026-02-10", false)];

    let (window, score) = Core::score_week(&logs, &[], &[], d("2026-02-08"));
    assert_eq!(window.start, d("2026-02-02"));
    assert_eq!(score.score, 2);

    let (window, score) = Core::score_week(&logs, &[], &[], d("2026-02-09"));
    assert_eq!(window.start, d("2026-02-09"));
    assert_eq!(score.score, 2);
}

#[test]
fn test_recent_activity_skips_skipped_and_limits() {
    let logs = vec![
        workout("2026-02-06", false),
        workout("2026-02-05", true),
        workout("2026-02-04", false),
        workout("2026-02-03", false),
    ];

    let recent = Core::recent_activity(&logs, 2);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].date, d("2026-02-06"));
    assert_eq!(recent[1].date, d("2026-02-04"));
}
