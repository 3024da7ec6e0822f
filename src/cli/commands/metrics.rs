use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::metrics::MetricsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::body_metric::BodyMetricEntry;
use crate::utils::date::date_or_today;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Metrics {
        weight,
        body_fat,
        lean_mass,
        muscle_mass,
        water_mass,
        notes,
        date,
    } = cmd
    {
        let d = date_or_today(date.as_ref())?;
        let mut pool = DbPool::open_ready(&cfg.database)?;

        let entry = BodyMetricEntry {
            id: 0,
            date: d,
            weight: *weight,
            body_fat: *body_fat,
            lean_mass: *lean_mass,
            muscle_mass: *muscle_mass,
            water_mass: *water_mass,
            notes: notes.clone(),
        };

        MetricsLogic::record(&mut pool, &entry)?;
    }

    Ok(())
}
