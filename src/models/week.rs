use chrono::NaiveDate;
use serde::Serialize;

/// Monday..Sunday calendar week, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// "02 Feb - 08 Feb"
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%d %b"),
            self.end.format("%d %b")
        )
    }
}

/// Output of the weekly scoring engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WeekScore {
    pub score: i64,
    pub sport_points: i64,
}
