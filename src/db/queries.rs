use crate::errors::{AppError, AppResult};
use crate::models::body_metric::BodyMetricEntry;
use crate::models::custom_exercise::CustomExerciseEntry;
use crate::models::day_name::DayName;
use crate::models::sports_log::SportsLogEntry;
use crate::models::workout_log::WorkoutLogEntry;
use chrono::NaiveDate;
use rusqlite::types::{Type, ValueRef};
use rusqlite::{Connection, OptionalExtension, Result, Row, ToSql, params};

/// Inclusive date bounds; `None` means "every row".
pub type DateBounds = Option<(NaiveDate, NaiveDate)>;

const WORKOUT_COLUMNS: &str = "id, log_date, day_name, exercise_name, planned_sets, planned_reps,
     actual_sets, actual_reps, weight, skipped, notes";

const CUSTOM_COLUMNS: &str =
    "id, log_date, day_name, exercise_name, actual_sets, actual_reps, weight, notes";

const SPORTS_COLUMNS: &str = "id, log_date, sport_name, minutes, intensity, notes";

const METRIC_COLUMNS: &str =
    "id, log_date, weight, body_fat, lean_mass, muscle_mass, water_mass, notes";

fn fmt_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// `log_date` is stored as TEXT; earlier versions sometimes wrote a full
/// timestamp, so only the leading `YYYY-MM-DD` is considered.
fn get_date(row: &Row, col: &str) -> Result<NaiveDate> {
    let raw: Option<String> = row.get(col)?;
    let raw = raw.unwrap_or_default();
    let head = raw.get(..10).unwrap_or(&raw);

    NaiveDate::parse_from_str(head, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            Type::Text,
            Box::new(AppError::InvalidDate(raw.clone())),
        )
    })
}

fn get_text(row: &Row, col: &str) -> Result<String> {
    Ok(match row.get_ref(col)? {
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(r) => r.to_string(),
        ValueRef::Null | ValueRef::Blob(_) => String::new(),
    })
}

/// Integer column read leniently: REAL is truncated, numeric TEXT is parsed,
/// anything else (NULL, blobs, garbage text) is `None`.
fn get_opt_int(row: &Row, col: &str) -> Result<Option<i64>> {
    Ok(match row.get_ref(col)? {
        ValueRef::Integer(i) => Some(i),
        ValueRef::Real(r) => Some(r.trunc() as i64),
        ValueRef::Text(t) => std::str::from_utf8(t).ok().and_then(|s| {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(|f| f.trunc() as i64)
                })
        }),
        ValueRef::Null | ValueRef::Blob(_) => None,
    })
}

/// Real column read leniently, same rules as [`get_opt_int`].
fn get_opt_real(row: &Row, col: &str) -> Result<Option<f64>> {
    Ok(match row.get_ref(col)? {
        ValueRef::Integer(i) => Some(i as f64),
        ValueRef::Real(r) => Some(r),
        ValueRef::Text(t) => std::str::from_utf8(t)
            .ok()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|f| f.is_finite()),
        ValueRef::Null | ValueRef::Blob(_) => None,
    })
}

fn get_int(row: &Row, col: &str) -> Result<i64> {
    Ok(get_opt_int(row, col)?.unwrap_or(0))
}

fn get_real(row: &Row, col: &str) -> Result<f64> {
    Ok(get_opt_real(row, col)?.unwrap_or(0.0))
}

pub fn map_workout_row(row: &Row) -> Result<WorkoutLogEntry> {
    Ok(WorkoutLogEntry {
        id: row.get("id")?,
        date: get_date(row, "log_date")?,
        day: DayName::normalize(&get_text(row, "day_name")?),
        exercise: get_text(row, "exercise_name")?,
        planned_sets: get_text(row, "planned_sets")?,
        planned_reps: get_text(row, "planned_reps")?,
        sets: get_int(row, "actual_sets")?,
        reps: get_int(row, "actual_reps")?,
        weight: get_real(row, "weight")?,
        skipped: get_int(row, "skipped")? != 0,
        notes: get_text(row, "notes")?,
    })
}

pub fn map_custom_row(row: &Row) -> Result<CustomExerciseEntry> {
    Ok(CustomExerciseEntry {
        id: row.get("id")?,
        date: get_date(row, "log_date")?,
        day: DayName::normalize(&get_text(row, "day_name")?),
        exercise: get_text(row, "exercise_name")?,
        sets: get_int(row, "actual_sets")?,
        reps: get_int(row, "actual_reps")?,
        weight: get_real(row, "weight")?,
        notes: get_text(row, "notes")?,
    })
}

pub fn map_sports_row(row: &Row) -> Result<SportsLogEntry> {
    Ok(SportsLogEntry {
        id: row.get("id")?,
        date: get_date(row, "log_date")?,
        sport: get_text(row, "sport_name")?,
        minutes: get_opt_int(row, "minutes")?,
        intensity: get_text(row, "intensity")?,
        notes: get_text(row, "notes")?,
    })
}

pub fn map_metric_row(row: &Row) -> Result<BodyMetricEntry> {
    Ok(BodyMetricEntry {
        id: row.get("id")?,
        date: get_date(row, "log_date")?,
        weight: get_opt_real(row, "weight")?,
        body_fat: get_opt_real(row, "body_fat")?,
        lean_mass: get_opt_real(row, "lean_mass")?,
        muscle_mass: get_opt_real(row, "muscle_mass")?,
        water_mass: get_opt_real(row, "water_mass")?,
        notes: get_text(row, "notes")?,
    })
}

/// `SELECT <columns> FROM <table> [WHERE log_date BETWEEN ?1 AND ?2]`
/// newest first.
fn load_rows<T, F>(
    conn: &Connection,
    table: &str,
    columns: &str,
    bounds: DateBounds,
    mapper: F,
) -> AppResult<Vec<T>>
where
    F: FnMut(&Row<'_>) -> Result<T>,
{
    let mut sql = format!("SELECT {columns} FROM {table}");
    let mut args: Vec<String> = Vec::new();

    if let Some((start, end)) = bounds {
        sql.push_str(" WHERE substr(log_date, 1, 10) BETWEEN ?1 AND ?2");
        args.push(fmt_date(&start));
        args.push(fmt_date(&end));
    }

    sql.push_str(" ORDER BY log_date DESC, id DESC");

    let mut stmt = conn.prepare(&sql)?;
    let params: Vec<&dyn ToSql> = args.iter().map(|s| s as &dyn ToSql).collect();
    let rows = stmt.query_map(rusqlite::params_from_iter(params), mapper)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_workout_logs(conn: &Connection, bounds: DateBounds) -> AppResult<Vec<WorkoutLogEntry>> {
    load_rows(conn, "workout_logs", WORKOUT_COLUMNS, bounds, map_workout_row)
}

pub fn load_custom_exercises(
    conn: &Connection,
    bounds: DateBounds,
) -> AppResult<Vec<CustomExerciseEntry>> {
    load_rows(conn, "custom_exercises", CUSTOM_COLUMNS, bounds, map_custom_row)
}

pub fn load_sports_logs(conn: &Connection, bounds: DateBounds) -> AppResult<Vec<SportsLogEntry>> {
    load_rows(conn, "sports_logs", SPORTS_COLUMNS, bounds, map_sports_row)
}

pub fn load_body_metrics(conn: &Connection, bounds: DateBounds) -> AppResult<Vec<BodyMetricEntry>> {
    load_rows(conn, "body_metrics", METRIC_COLUMNS, bounds, map_metric_row)
}

/// Most recent non-skipped entry for `exercise`.
pub fn fetch_last_log(conn: &Connection, exercise: &str) -> AppResult<Option<WorkoutLogEntry>> {
    let sql = format!(
        "SELECT {WORKOUT_COLUMNS} FROM workout_logs
         WHERE exercise_name = ?1 AND IFNULL(skipped, 0) = 0
         ORDER BY log_date DESC, id DESC
         LIMIT 1"
    );

    let entry = conn
        .query_row(&sql, [exercise], map_workout_row)
        .optional()?;
    Ok(entry)
}

/// Latest body metric reading (max date, then highest id).
pub fn latest_body_metric(conn: &Connection) -> AppResult<Option<BodyMetricEntry>> {
    let sql = format!(
        "SELECT {METRIC_COLUMNS} FROM body_metrics
         ORDER BY log_date DESC, id DESC
         LIMIT 1"
    );

    let entry = conn.query_row(&sql, [], map_metric_row).optional()?;
    Ok(entry)
}

pub fn insert_workout_log(conn: &Connection, e: &WorkoutLogEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO workout_logs (log_date, day_name, exercise_name, planned_sets, planned_reps,
                                   actual_sets, actual_reps, weight, skipped, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            e.date_str(),
            e.day.as_str(),
            e.exercise,
            e.planned_sets,
            e.planned_reps,
            e.sets,
            e.reps,
            e.weight,
            if e.skipped { 1 } else { 0 },
            e.notes,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_custom_exercise(conn: &Connection, e: &CustomExerciseEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO custom_exercises (log_date, day_name, exercise_name, actual_sets, actual_reps, weight, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            e.date_str(),
            e.day.as_str(),
            e.exercise,
            e.sets,
            e.reps,
            e.weight,
            e.notes,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_sports_log(conn: &Connection, e: &SportsLogEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO sports_logs (log_date, sport_name, minutes, intensity, notes)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![e.date_str(), e.sport, e.minutes, e.intensity, e.notes],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_body_metric(conn: &Connection, e: &BodyMetricEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO body_metrics (log_date, weight, body_fat, lean_mass, muscle_mass, water_mass, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            e.date_str(),
            e.weight,
            e.body_fat,
            e.lean_mass,
            e.muscle_mass,
            e.water_mass,
            e.notes,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}
