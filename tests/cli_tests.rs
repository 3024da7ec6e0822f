use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, init_db_with_data, rfl, setup_test_db};

#[test]
fn test_init_creates_tables() {
    let db_path = setup_test_db("cli_init");

    rfl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Created fitness tables."))
        .stdout(contains("initialization completed"));

    // second init finds everything in place
    rfl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Created fitness tables.").not());
}

#[test]
fn test_score_of_logged_week() {
    let db_path = setup_test_db("cli_score_week");
    init_db_with_data(&db_path);

    // 3 workouts (+6), 1 skipped, 1 custom (+1), 45 sport minutes (+2)
    rfl()
        .args(["--db", &db_path, "score", "--date", "2026-02-04"])
        .assert()
        .success()
        .stdout(contains("02 Feb - 08 Feb"))
        .stdout(contains("Weekly Score: 9"))
        .stdout(contains("Sports Points: 2"));

    rfl()
        .args(["--db", &db_path, "score", "--date", "2026-02-09"])
        .assert()
        .success()
        .stdout(contains("Weekly Score: 0"));
}

#[test]
fn test_dashboard_on_empty_db() {
    let db_path = setup_test_db("cli_dashboard_empty");
    init_db(&db_path);

    rfl()
        .args(["--db", &db_path, "dashboard", "--date", "2026-02-04"])
        .assert()
        .success()
        .stdout(contains("Current Snapshot"))
        .stdout(contains("SPORTS POINTS"))
        .stdout(contains("Max 6/week"))
        .stdout(contains("Wednesday"))
        .stdout(contains("Coach Notes"))
        .stdout(contains("No logs yet. Start today!"));
}

#[test]
fn test_dashboard_when_every_workout_is_skipped() {
    let db_path = setup_test_db("cli_dashboard_all_skipped");
    init_db(&db_path);

    rfl()
        .args([
            "--db", &db_path, "workout", "Deadlift", "--skip", "--date", "2026-02-03",
        ])
        .assert()
        .success();

    rfl()
        .args(["--db", &db_path, "dashboard", "--date", "2026-02-04"])
        .assert()
        .success()
        .stdout(contains("No logs yet."))
        .stdout(contains("Start today!").not());
}

#[test]
fn test_dashboard_with_metrics_and_recent_activity() {
    let db_path = setup_test_db("cli_dashboard_data");
    init_db_with_data(&db_path);

    rfl()
        .args(["--db", &db_path, "dash", "--date", "2026-02-04"])
        .assert()
        .success()
        .stdout(contains("WEIGHT"))
        .stdout(contains("82.5 kg"))
        .stdout(contains("18.0%"))
        .stdout(contains("64.0 kg"))
        .stdout(contains("2026-02-04: Squat"))
        .stdout(contains("No logs yet.").not());
}

#[test]
fn test_history_ignores_skipped() {
    let db_path = setup_test_db("cli_history");
    init_db_with_data(&db_path);

    rfl()
        .args(["--db", &db_path, "history", "Squat"])
        .assert()
        .success()
        .stdout(contains("Last (2026-02-04): 4 sets x 6 reps @ 70kg"));

    rfl()
        .args(["--db", &db_path, "history", "Deadlift"])
        .assert()
        .success()
        .stdout(contains("No history yet"));
}

#[test]
fn test_workout_shows_previous_entry() {
    let db_path = setup_test_db("cli_workout_history");
    init_db_with_data(&db_path);

    rfl()
        .args([
            "--db", &db_path, "workout", "Bench Press", "--sets", "3", "--reps", "10", "--weight",
            "42.5", "--date", "2026-02-09",
        ])
        .assert()
        .success()
        .stdout(contains("Last (2026-02-02): 3 sets x 10 reps @ 40kg"))
        .stdout(contains("Monday"));
}

#[test]
fn test_workout_rejects_out_of_range_values() {
    let db_path = setup_test_db("cli_workout_bounds");
    init_db(&db_path);

    rfl()
        .args(["--db", &db_path, "workout", "Squat", "--sets", "21"])
        .assert()
        .failure()
        .stderr(contains("sets must be between 0 and 20"));

    rfl()
        .args(["--db", &db_path, "workout", "Squat", "--reps", "201"])
        .assert()
        .failure()
        .stderr(contains("reps must be between 0 and 200"));

    rfl()
        .args(["--db", &db_path, "custom", "Plank", "--reps", "101"])
        .assert()
        .failure()
        .stderr(contains("reps must be between 0 and 100"));

    rfl()
        .args(["--db", &db_path, "workout", "  "])
        .assert()
        .failure()
        .stderr(contains("must not be empty"));

    rfl()
        .args(["--db", &db_path, "workout", "Squat", "--day", "Funday"])
        .assert()
        .failure()
        .stderr(contains("Invalid day name"));

    rfl()
        .args(["--db", &db_path, "workout", "Squat", "--date", "2026-13-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_metrics_and_sport_validation() {
    let db_path = setup_test_db("cli_metrics_bounds");
    init_db(&db_path);

    rfl()
        .args(["--db", &db_path, "metrics", "--weight", "250"])
        .assert()
        .failure()
        .stderr(contains("weight must be between 0 and 200"));

    rfl()
        .args(["--db", &db_path, "metrics", "--body-fat", "55"])
        .assert()
        .failure()
        .stderr(contains("body fat must be between 0 and 50"));

    rfl()
        .args(["--db", &db_path, "sport", "Running", "--minutes=-5"])
        .assert()
        .failure()
        .stderr(contains("minutes must not be negative"));

    // a session without a duration is accepted
    rfl()
        .args(["--db", &db_path, "sport", "Yoga", "--date", "2026-02-03"])
        .assert()
        .success()
        .stdout(contains("no duration"));
}

#[test]
fn test_list_targets_and_period() {
    let db_path = setup_test_db("cli_list");
    init_db_with_data(&db_path);

    rfl()
        .args(["--db", &db_path, "list", "--period", "2026-02-02:2026-02-04"])
        .assert()
        .success()
        .stdout(contains("Bench Press"))
        .stdout(contains("2026-02-04"))
        .stdout(contains("Deadlift").not());

    rfl()
        .args(["--db", &db_path, "list", "workouts"])
        .assert()
        .success()
        .stdout(contains("skipped"));

    rfl()
        .args(["--db", &db_path, "list", "sports"])
        .assert()
        .success()
        .stdout(contains("Football"))
        .stdout(contains("45"));

    rfl()
        .args(["--db", &db_path, "list", "metrics"])
        .assert()
        .success()
        .stdout(contains("82.5 kg"));

    rfl()
        .args(["--db", &db_path, "list", "custom", "--period", "2025"])
        .assert()
        .success()
        .stdout(contains("No entries found for the selected period."));
}

#[test]
fn test_progress_summary() {
    let db_path = setup_test_db("cli_progress");
    init_db(&db_path);

    rfl()
        .args(["--db", &db_path, "progress"])
        .assert()
        .success()
        .stdout(contains("Log some workouts to see analytics."));

    init_db_with_data(&db_path);

    rfl()
        .args(["--db", &db_path, "progress", "--period", "2026-02"])
        .assert()
        .success()
        .stdout(contains("04-Feb"))
        .stdout(contains("Active Days (30d): 2"))
        .stdout(contains("Total Exercises: 3"))
        .stdout(contains("Consistency: 6%"));
}

#[test]
fn test_log_print_records_operations() {
    let db_path = setup_test_db("cli_log_print");
    init_db_with_data(&db_path);

    rfl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("workout"))
        .stdout(contains("Squat"))
        .stdout(contains("migration_applied"));
}

#[test]
fn test_db_reset_restarts_ids() {
    let db_path = setup_test_db("cli_db_reset");
    init_db_with_data(&db_path);

    rfl()
        .args(["--db", &db_path, "db", "--reset", "--yes", "--no-backup"])
        .assert()
        .success()
        .stdout(contains("Database completely reset."));

    rfl()
        .args(["--db", &db_path, "score", "--date", "2026-02-04"])
        .assert()
        .success()
        .stdout(contains("Weekly Score: 0"));

    rfl()
        .args(["--db", &db_path, "workout", "Row", "--sets", "3", "--reps", "12"])
        .assert()
        .success();

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let id: i64 = conn
        .query_row("SELECT MAX(id) FROM workout_logs", [], |r| r.get(0))
        .expect("max id");
    assert_eq!(id, 1);
}

#[test]
fn test_db_reset_on_missing_database_creates_nothing() {
    let db_path = setup_test_db("cli_db_reset_missing");

    rfl()
        .args(["--db", &db_path, "db", "--reset", "-y"])
        .assert()
        .success()
        .stdout(contains("not found. Nothing to reset."))
        .stdout(contains("Backup created").not());

    assert!(!std::path::Path::new(&db_path).exists());
}

#[test]
fn test_db_reset_writes_backup() {
    let db_path = setup_test_db("cli_db_reset_backup");
    init_db_with_data(&db_path);

    rfl()
        .args(["--db", &db_path, "db", "--reset", "-y"])
        .assert()
        .success()
        .stdout(contains("Backup created"))
        .stdout(contains("backup_db_pre_reset.zip"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("cli_db_info");
    init_db_with_data(&db_path);

    rfl()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("workout_logs"))
        .stdout(contains("Integrity check passed."));
}
