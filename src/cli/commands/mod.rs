pub mod config;
pub mod custom;
pub mod dashboard;
pub mod db;
pub mod export;
pub mod history;
pub mod init;
pub mod list;
pub mod log;
pub mod metrics;
pub mod progress;
pub mod score;
pub mod sport;
pub mod workout;

use crate::errors::{AppError, AppResult};
use crate::models::day_name::DayName;
use chrono::NaiveDate;

/// `--day` if given (must be a weekday name), else the weekday of `date`.
pub(crate) fn resolve_day(day: &Option<String>, date: NaiveDate) -> AppResult<DayName> {
    match day {
        Some(raw) => DayName::parse(raw).ok_or_else(|| AppError::InvalidDay(raw.clone())),
        None => Ok(DayName::of(date)),
    }
}
