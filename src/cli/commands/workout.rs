use super::resolve_day;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::workout::WorkoutLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::workout_log::WorkoutLogEntry;
use crate::ui::messages::info;
use crate::utils::date::date_or_today;

/// Log one planned exercise.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Workout {
        exercise,
        planned_sets,
        planned_reps,
        sets,
        reps,
        weight,
        skip,
        notes,
        date,
        day,
    } = cmd
    {
        let d = date_or_today(date.as_ref())?;
        let day = resolve_day(day, d)?;

        let exercise = exercise.trim();
        let mut pool = DbPool::open_ready(&cfg.database)?;

        // show what was done last time before recording today's numbers
        info(WorkoutLogic::history(&pool, exercise)?);

        let entry = WorkoutLogEntry {
            id: 0,
            date: d,
            day,
            exercise: exercise.to_string(),
            planned_sets: planned_sets.clone(),
            planned_reps: planned_reps.clone(),
            sets: *sets,
            reps: *reps,
            weight: *weight,
            skipped: *skip,
            notes: notes.clone(),
        };

        WorkoutLogic::log_exercise(&mut pool, &entry)?;
    }

    Ok(())
}
