use chrono::NaiveDate;
use serde::Serialize;

/// A sports session (football, swimming, ...). Only its minutes count
/// towards the weekly score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SportsLogEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub sport: String,
    pub minutes: Option<i64>, // NULL is allowed and scores as 0
    pub intensity: String,
    pub notes: String,
}

impl SportsLogEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
