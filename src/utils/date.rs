use crate::errors::{AppError, AppResult};
use chrono::{Months, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse an optional `--date` argument, defaulting to today.
pub fn date_or_today(s: Option<&String>) -> AppResult<NaiveDate> {
    match s {
        Some(raw) => parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string())),
        None => Ok(today()),
    }
}

/// "Tuesday, 03 Feb 2026"
pub fn long_label(d: NaiveDate) -> String {
    d.format("%A, %d %b %Y").to_string()
}

/// First and last day covered by `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn period_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").ok()?;
            Some((d, d))
        }
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").ok()?;
            let next = first.checked_add_months(Months::new(1))?;
            Some((first, next.pred_opt()?))
        }
        4 => {
            let year: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(year, 1, 1)?,
                NaiveDate::from_ymd_opt(year, 12, 31)?,
            ))
        }
        _ => None,
    }
}

/// Parse a `--period` / `--range` expression into inclusive bounds.
///
/// Accepted: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, or `start:end` where both sides
/// share one of those shapes (e.g. `2026-01:2026-03`).
pub fn parse_period(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(r.to_string());

    match r.split_once(':') {
        Some((start, end)) => {
            let (start, end) = (start.trim(), end.trim());
            if start.len() != end.len() {
                return Err(invalid());
            }
            let (first, _) = period_bounds(start).ok_or_else(invalid)?;
            let (_, last) = period_bounds(end).ok_or_else(invalid)?;
            if first > last {
                return Err(invalid());
            }
            Ok((first, last))
        }
        None => period_bounds(r.trim()).ok_or_else(invalid),
    }
}
