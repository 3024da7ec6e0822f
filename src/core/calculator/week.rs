use crate::models::week::WeekWindow;
use chrono::{Datelike, Duration, NaiveDate};

/// Monday..Sunday window containing `date`.
pub fn week_range(date: NaiveDate) -> WeekWindow {
    let offset = date.weekday().num_days_from_monday() as i64;
    let start = date - Duration::days(offset);
    WeekWindow {
        start,
        end: start + Duration::days(6),
    }
}
