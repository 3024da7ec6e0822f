use crate::core::validate::not_empty;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::insert_sports_log;
use crate::errors::{AppError, AppResult};
use crate::models::sports_log::SportsLogEntry;
use crate::ui::messages::success;

pub struct SportsLogic;

impl SportsLogic {
    /// Append a sports session. Minutes may be omitted (scores as 0).
    pub fn record(pool: &mut DbPool, entry: &SportsLogEntry) -> AppResult<i64> {
        not_empty("sport name", &entry.sport)?;
        if let Some(m) = entry.minutes
            && m < 0
        {
            return Err(AppError::Negative {
                field: "minutes",
                value: m,
            });
        }

        let id = insert_sports_log(&pool.conn, entry)?;

        let minutes = entry
            .minutes
            .map(|m| format!("{m} min"))
            .unwrap_or_else(|| "no duration".to_string());
        ttlog_quiet(
            &pool.conn,
            "sport",
            &entry.date_str(),
            &format!("{} ({})", entry.sport, minutes),
        );

        success(format!(
            "Logged {} ({}) on {}",
            entry.sport,
            minutes,
            entry.date_str()
        ));
        Ok(id)
    }
}
