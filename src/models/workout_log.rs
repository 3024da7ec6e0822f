use super::day_name::DayName;
use chrono::NaiveDate;
use serde::Serialize;

/// One planned exercise as it was logged on a given day.
///
/// Rows are append-only: the application never updates or deletes them.
/// `id == 0` marks an entry that has not been inserted yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkoutLogEntry {
    pub id: i64,
    pub date: NaiveDate,      // ⇔ workout_logs.log_date (TEXT "YYYY-MM-DD")
    pub day: DayName,         // ⇔ workout_logs.day_name
    pub exercise: String,     // ⇔ workout_logs.exercise_name
    pub planned_sets: String, // ⇔ workout_logs.planned_sets (free text, e.g. "3" or "3-4")
    pub planned_reps: String, // ⇔ workout_logs.planned_reps (free text, e.g. "8-12")
    pub sets: i64,            // ⇔ workout_logs.actual_sets
    pub reps: i64,            // ⇔ workout_logs.actual_reps
    pub weight: f64,          // ⇔ workout_logs.weight (kg, 0 = bodyweight)
    pub skipped: bool,        // ⇔ workout_logs.skipped (0/1)
    pub notes: String,
}

impl WorkoutLogEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// "50kg" or "BW" for bodyweight work.
    pub fn weight_label(&self) -> String {
        if self.weight > 0.0 {
            format!("{}kg", self.weight)
        } else {
            "BW".to_string()
        }
    }

    /// One-line history summary shown before logging the same exercise again.
    pub fn history_line(&self) -> String {
        let note = if self.notes.trim().is_empty() {
            String::new()
        } else {
            format!(" | {}", self.notes)
        };

        format!(
            "Last ({}): {} sets x {} reps @ {}{}",
            self.date_str(),
            self.sets,
            self.reps,
            self.weight_label(),
            note
        )
    }
}
