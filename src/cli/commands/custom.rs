use super::resolve_day;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::workout::WorkoutLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::custom_exercise::CustomExerciseEntry;
use crate::utils::date::date_or_today;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Custom {
        exercise,
        sets,
        reps,
        weight,
        notes,
        date,
        day,
    } = cmd
    {
        let d = date_or_today(date.as_ref())?;
        let day = resolve_day(day, d)?;

        let mut pool = DbPool::open_ready(&cfg.database)?;

        let entry = CustomExerciseEntry {
            id: 0,
            date: d,
            day,
            exercise: exercise.trim().to_string(),
            sets: *sets,
            reps: *reps,
            weight: *weight,
            notes: notes.clone(),
        };

        WorkoutLogic::log_custom(&mut pool, &entry)?;
    }

    Ok(())
}
