use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sports::SportsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::sports_log::SportsLogEntry;
use crate::utils::date::date_or_today;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sport {
        sport,
        minutes,
        intensity,
        notes,
        date,
    } = cmd
    {
        let d = date_or_today(date.as_ref())?;
        let mut pool = DbPool::open_ready(&cfg.database)?;

        let entry = SportsLogEntry {
            id: 0,
            date: d,
            sport: sport.trim().to_string(),
            minutes: *minutes,
            intensity: intensity.clone(),
            notes: notes.clone(),
        };

        SportsLogic::record(&mut pool, &entry)?;
    }

    Ok(())
}
