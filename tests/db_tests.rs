mod common;
use common::{d, setup_test_db};

use rfitlogger::core::dashboard::DashboardLogic;
use rfitlogger::db::migrate::run_pending_migrations;
use rfitlogger::db::pool::DbPool;
use rfitlogger::db::queries::{
    fetch_last_log, insert_body_metric, insert_sports_log, insert_workout_log, latest_body_metric,
    load_sports_logs, load_workout_logs,
};
use rfitlogger::models::body_metric::BodyMetricEntry;
use rfitlogger::models::day_name::DayName;
use rfitlogger::models::sports_log::SportsLogEntry;
use rfitlogger::models::workout_log::WorkoutLogEntry;
use rusqlite::Connection;

fn memory_db() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    run_pending_migrations(&conn).expect("migrate");
    conn
}

fn squat(date: &str, weight: f64, skipped: bool) -> WorkoutLogEntry {
    WorkoutLogEntry {
        date: d(date),
        day: DayName::of(d(date)),
        exercise: "Squat".to_string(),
        planned_sets: "3".to_string(),
        planned_reps: "8-10".to_string(),
        sets: 3,
        reps: 8,
        weight,
        skipped,
        notes: String::new(),
        ..Default::default()
    }
}

#[test]
fn test_migrations_are_idempotent() {
    let conn = memory_db();
    run_pending_migrations(&conn).expect("second run");

    let applied: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |r| r.get(0),
        )
        .expect("count migrations");
    assert_eq!(applied, 1);
}

#[test]
fn test_insert_returns_increasing_ids() {
    let conn = memory_db();
    let a = insert_workout_log(&conn, &squat("2026-02-02", 60.0, false)).expect("insert");
    let b = insert_workout_log(&conn, &squat("2026-02-03", 62.5, false)).expect("insert");
    assert_eq!(a, 1);
    assert_eq!(b, 2);
}

#[test]
fn test_fetch_last_log_ignores_skipped_entries() {
    let conn = memory_db();
    insert_workout_log(&conn, &squat("2026-02-02", 60.0, false)).expect("insert");
    insert_workout_log(&conn, &squat("2026-02-04", 70.0, true)).expect("insert");

    let last = fetch_last_log(&conn, "Squat")
        .expect("query")
        .expect("non-skipped entry");
    assert_eq!(last.date, d("2026-02-02"));
    assert_eq!(
        last.history_line(),
        "Last (2026-02-02): 3 sets x 8 reps @ 60kg"
    );

    assert!(fetch_last_log(&conn, "Deadlift").expect("query").is_none());
}

#[test]
fn test_fetch_last_log_prefers_latest_date() {
    let conn = memory_db();
    insert_workout_log(&conn, &squat("2026-02-05", 75.0, false)).expect("insert");
    insert_workout_log(&conn, &squat("2026-02-03", 65.0, false)).expect("insert");

    let last = fetch_last_log(&conn, "Squat").expect("query").expect("entry");
    assert_eq!(last.weight, 75.0);
}

#[test]
fn test_load_workout_logs_with_bounds_newest_first() {
    let conn = memory_db();
    for date in ["2026-01-30", "2026-02-02", "2026-02-08", "2026-02-09"] {
        insert_workout_log(&conn, &squat(date, 60.0, false)).expect("insert");
    }

    let rows = load_workout_logs(&conn, Some((d("2026-02-02"), d("2026-02-08")))).expect("load");
    let dates: Vec<_> = rows.iter().map(|r| r.date_str()).collect();
    assert_eq!(dates, vec!["2026-02-08", "2026-02-02"]);

    assert_eq!(load_workout_logs(&conn, None).expect("load").len(), 4);
}

#[test]
fn test_rows_with_nulls_and_timestamps_are_tolerated() {
    let conn = memory_db();
    conn.execute(
        "INSERT INTO workout_logs (log_date, day_name, exercise_name)
         VALUES ('2026-02-03 18:30:00', 'someday', 'Lunge')",
        [],
    )
    .expect("raw insert");

    let rows = load_workout_logs(&conn, None).expect("load");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, d("2026-02-03"));
    assert_eq!(rows[0].day, DayName::Monday);
    assert_eq!(rows[0].sets, 0);
    assert!(!rows[0].skipped);
}

#[test]
fn test_sports_minutes_may_be_null() {
    let conn = memory_db();
    insert_sports_log(
        &conn,
        &SportsLogEntry {
            date: d("2026-02-07"),
            sport: "Swimming".to_string(),
            minutes: None,
            ..Default::default()
        },
    )
    .expect("insert");

    let rows = load_sports_logs(&conn, None).expect("load");
    assert_eq!(rows[0].minutes, None);
}

#[test]
fn test_latest_body_metric_by_date_then_id() {
    let conn = memory_db();
    assert!(latest_body_metric(&conn).expect("query").is_none());

    for (date, weight) in [("2026-02-03", 83.0), ("2026-02-01", 84.0), ("2026-02-03", 82.5)] {
        insert_body_metric(
            &conn,
            &BodyMetricEntry {
                date: d(date),
                weight: Some(weight),
                ..Default::default()
            },
        )
        .expect("insert");
    }

    let latest = latest_body_metric(&conn).expect("query").expect("metric");
    assert_eq!(latest.id, 3);
    assert_eq!(latest.weight, Some(82.5));
    assert_eq!(latest.body_fat, None);
}

#[test]
fn test_malformed_sport_minutes_do_not_break_loading() {
    let conn = memory_db();
    conn.execute_batch(
        "INSERT INTO sports_logs (log_date, sport_name, minutes) VALUES ('2026-02-03', 'Football', 25.5);
         INSERT INTO sports_logs (log_date, sport_name, minutes) VALUES ('2026-02-04', 'Tennis', 'abc');
         INSERT INTO sports_logs (log_date, sport_name, minutes) VALUES ('2026-02-05', 'Swimming', '40');",
    )
    .expect("raw inserts");

    let rows = load_sports_logs(&conn, None).expect("load");
    let minutes: Vec<_> = rows.iter().map(|r| r.minutes).collect();
    assert_eq!(minutes, vec![Some(40), None, Some(25)]);
}

#[test]
fn test_dashboard_scores_despite_malformed_minutes() {
    let db_path = setup_test_db("db_malformed_minutes");
    let pool = DbPool::open_ready(&db_path).expect("open db");
    pool.conn
        .execute_batch(
            "INSERT INTO sports_logs (log_date, sport_name, minutes) VALUES ('2026-02-03', 'Football', 25.5);
             INSERT INTO sports_logs (log_date, sport_name, minutes) VALUES ('2026-02-04', 'Tennis', 'abc');
             INSERT INTO sports_logs (log_date, sport_name, minutes) VALUES ('2026-02-05', 'Swimming', '40');",
        )
        .expect("raw inserts");

    let dash = DashboardLogic::build(&pool, d("2026-02-04"), 3).expect("dashboard");
    // 25 + 0 + 40 minutes
    assert_eq!(dash.score.sport_points, 3);
    assert_eq!(dash.score.score, 3);
}

#[test]
fn test_malformed_metric_values_read_as_missing() {
    let conn = memory_db();
    conn.execute(
        "INSERT INTO body_metrics (log_date, weight, body_fat) VALUES ('2026-02-03', 'heavy', '18.5')",
        [],
    )
    .expect("raw insert");

    let latest = latest_body_metric(&conn).expect("query").expect("metric");
    assert_eq!(latest.weight, None);
    assert_eq!(latest.body_fat, Some(18.5));
}

#[test]
fn test_null_skipped_counts_as_done_everywhere() {
    let db_path = setup_test_db("db_null_skipped");
    let pool = DbPool::open_ready(&db_path).expect("open db");
    pool.conn
        .execute(
            "INSERT INTO workout_logs (log_date, exercise_name) VALUES ('2026-02-03', 'Lunge')",
            [],
        )
        .expect("raw insert");

    let dash = DashboardLogic::build(&pool, d("2026-02-04"), 3).expect("dashboard");
    assert_eq!(dash.score.score, 2);
    assert_eq!(dash.recent.len(), 1);

    let last = fetch_last_log(&pool.conn, "Lunge")
        .expect("query")
        .expect("row with NULL skipped is a done entry");
    assert_eq!(last.date, d("2026-02-03"));
}
