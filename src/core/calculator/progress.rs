use crate::models::workout_log::WorkoutLogEntry;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Days in the window the consistency percentage is measured against.
pub const CONSISTENCY_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: i64,
}

impl DailyCount {
    /// "04-Feb"
    pub fn label(&self) -> String {
        self.date.format("%d-%b").to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    /// Newest first.
    pub daily: Vec<DailyCount>,
    pub active_days: i64,
    pub total_exercises: i64,
    pub consistency_pct: i64,
}

impl ProgressSummary {
    pub fn consistency_label(&self) -> String {
        format!("{}%", self.consistency_pct)
    }
}

/// Group non-skipped entries per day and derive the headline numbers.
pub fn summarize(logs: &[WorkoutLogEntry]) -> ProgressSummary {
    let mut per_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for log in logs.iter().filter(|l| !l.skipped) {
        *per_day.entry(log.date).or_insert(0) += 1;
    }

    let daily: Vec<DailyCount> = per_day
        .into_iter()
        .rev()
        .map(|(date, count)| DailyCount { date, count })
        .collect();

    let active_days = daily.len() as i64;
    let total_exercises = daily.iter().map(|d| d.count).sum();

    ProgressSummary {
        daily,
        active_days,
        total_exercises,
        consistency_pct: active_days * 100 / CONSISTENCY_WINDOW_DAYS,
    }
}
