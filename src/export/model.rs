// src/export/model.rs

use crate::models::body_metric::BodyMetricEntry;
use crate::models::workout_log::WorkoutLogEntry;
use chrono::NaiveDate;
use serde::Serialize;

/// Flat workout-log record. Keys follow the database column names.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WorkoutLogExport {
    pub log_date: String,
    pub day_name: String,
    pub exercise_name: String,
    pub actual_sets: i64,
    pub actual_reps: i64,
    pub weight: f64,
    pub skipped: i64,
    pub notes: String,
}

impl From<&WorkoutLogEntry> for WorkoutLogExport {
    fn from(e: &WorkoutLogEntry) -> Self {
        Self {
            log_date: e.date_str(),
            day_name: e.day.to_string(),
            exercise_name: e.exercise.clone(),
            actual_sets: e.sets,
            actual_reps: e.reps,
            weight: e.weight,
            skipped: i64::from(e.skipped),
            notes: e.notes.clone(),
        }
    }
}

/// Flat body-metric record.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct BodyMetricExport {
    pub log_date: String,
    pub weight: Option<f64>,
    pub body_fat: Option<f64>,
    pub lean_mass: Option<f64>,
    pub muscle_mass: Option<f64>,
    pub water_mass: Option<f64>,
    pub notes: String,
}

impl From<&BodyMetricEntry> for BodyMetricExport {
    fn from(e: &BodyMetricEntry) -> Self {
        Self {
            log_date: e.date_str(),
            weight: e.weight,
            body_fat: e.body_fat,
            lean_mass: e.lean_mass,
            muscle_mass: e.muscle_mass,
            water_mass: e.water_mass,
            notes: e.notes.clone(),
        }
    }
}

/// The backup document: `{"logs": [...], "metrics": [...]}`.
#[derive(Serialize, Clone, Debug, Default)]
pub struct BackupDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logs: Option<Vec<WorkoutLogExport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<BodyMetricExport>>,
}

impl BackupDocument {
    pub fn is_empty(&self) -> bool {
        self.logs.as_ref().is_none_or(|l| l.is_empty())
            && self.metrics.as_ref().is_none_or(|m| m.is_empty())
    }
}

/// Typed spreadsheet cell.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Cell {
    Date(NaiveDate),
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    fn date(s: &str) -> Self {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Cell::Date)
            .unwrap_or_else(|_| Cell::Text(s.to_string()))
    }

    fn opt(v: Option<f64>) -> Self {
        v.map(Cell::Number).unwrap_or(Cell::Empty)
    }
}

/// Rows of one dataset rendered as header + typed cells (XLSX sheets).
pub(crate) trait SheetRows {
    const SHEET: &'static str;
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<Cell>;
}

impl SheetRows for WorkoutLogExport {
    const SHEET: &'static str = "logs";

    fn headers() -> &'static [&'static str] {
        &[
            "log_date",
            "day_name",
            "exercise_name",
            "actual_sets",
            "actual_reps",
            "weight",
            "skipped",
            "notes",
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::date(&self.log_date),
            Cell::Text(self.day_name.clone()),
            Cell::Text(self.exercise_name.clone()),
            Cell::Number(self.actual_sets as f64),
            Cell::Number(self.actual_reps as f64),
            Cell::Number(self.weight),
            Cell::Number(self.skipped as f64),
            Cell::Text(self.notes.clone()),
        ]
    }
}

impl SheetRows for BodyMetricExport {
    const SHEET: &'static str = "metrics";

    fn headers() -> &'static [&'static str] {
        &[
            "log_date",
            "weight",
            "body_fat",
            "lean_mass",
            "muscle_mass",
            "water_mass",
            "notes",
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::date(&self.log_date),
            Cell::opt(self.weight),
            Cell::opt(self.body_fat),
            Cell::opt(self.lean_mass),
            Cell::opt(self.muscle_mass),
            Cell::opt(self.water_mass),
            Cell::Text(self.notes.clone()),
        ]
    }
}
