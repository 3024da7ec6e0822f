use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
pub(crate) fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the four data tables.
///
/// Column names and the lack of NOT NULL constraints match databases written
/// by earlier versions, so an existing file is picked up unchanged.
fn create_data_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS workout_logs (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            log_date      TEXT,
            day_name      TEXT,
            exercise_name TEXT,
            planned_sets  TEXT,
            planned_reps  TEXT,
            actual_sets   INTEGER,
            actual_reps   INTEGER,
            weight        REAL,
            skipped       INTEGER,
            notes         TEXT
        );

        CREATE TABLE IF NOT EXISTS custom_exercises (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            log_date      TEXT,
            day_name      TEXT,
            exercise_name TEXT,
            actual_sets   INTEGER,
            actual_reps   INTEGER,
            weight        REAL,
            notes         TEXT
        );

        CREATE TABLE IF NOT EXISTS sports_logs (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            log_date   TEXT,
            sport_name TEXT,
            minutes    INTEGER,
            intensity  TEXT,
            notes      TEXT
        );

        CREATE TABLE IF NOT EXISTS body_metrics (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            log_date    TEXT,
            weight      REAL,
            body_fat    REAL,
            lean_mass   REAL,
            muscle_mass REAL,
            water_mass  REAL,
            notes       TEXT
        );
        "#,
    )?;
    Ok(())
}

/// Whether a versioned migration is already recorded in `log`.
fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Date indexes for the range queries behind the dashboard and `list`.
fn migrate_add_date_indexes(conn: &Connection) -> Result<()> {
    let version = "20260201_0001_add_log_date_indexes";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_workout_logs_date ON workout_logs(log_date);
        CREATE INDEX IF NOT EXISTS idx_workout_logs_exercise ON workout_logs(exercise_name, log_date);
        CREATE INDEX IF NOT EXISTS idx_custom_exercises_date ON custom_exercises(log_date);
        CREATE INDEX IF NOT EXISTS idx_sports_logs_date ON sports_logs(log_date);
        CREATE INDEX IF NOT EXISTS idx_body_metrics_date ON body_metrics(log_date);
        "#,
    )?;

    mark_applied(conn, version, "Added log_date indexes to data tables")?;

    success(format!("Migration applied: {}", version));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by `db::init_db()` and whenever a command opens the database.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    let fresh = !table_exists(conn, "workout_logs")?;
    create_data_tables(conn)?;
    if fresh {
        success("Created fitness tables.");
    }

    migrate_add_date_indexes(conn)?;

    Ok(())
}
