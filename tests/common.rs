#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rfl() -> Command {
    cargo_bin_cmd!("rfitlogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rfitlogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    rfl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and log a small week of training (week of Mon 2026-02-02)
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    for (date, exercise, sets, reps, weight) in [
        ("2026-02-02", "Squat", "3", "8", "60"),
        ("2026-02-02", "Bench Press", "3", "10", "40"),
        ("2026-02-04", "Squat", "4", "6", "70"),
    ] {
        rfl()
            .args([
                "--db", db_path, "workout", exercise, "--sets", sets, "--reps", reps, "--weight",
                weight, "--date", date,
            ])
            .assert()
            .success();
    }

    rfl()
        .args([
            "--db", db_path, "workout", "Deadlift", "--skip", "--date", "2026-02-05",
        ])
        .assert()
        .success();

    rfl()
        .args([
            "--db", db_path, "custom", "Plank", "--sets", "3", "--reps", "1", "--date",
            "2026-02-06",
        ])
        .assert()
        .success();

    rfl()
        .args([
            "--db", db_path, "sport", "Football", "--minutes", "45", "--date", "2026-02-07",
        ])
        .assert()
        .success();

    rfl()
        .args([
            "--db",
            db_path,
            "metrics",
            "--weight",
            "82.5",
            "--body-fat",
            "18",
            "--lean",
            "64",
            "--date",
            "2026-02-03",
        ])
        .assert()
        .success();
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}
