use super::day_name::DayName;
use chrono::NaiveDate;
use serde::Serialize;

/// An ad hoc exercise that is not part of the day's plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomExerciseEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub day: DayName,
    pub exercise: String,
    pub sets: i64,
    pub reps: i64,
    pub weight: f64,
    pub notes: String,
}

impl CustomExerciseEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
