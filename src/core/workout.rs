use crate::core::validate::{
    MAX_CUSTOM_REPS, MAX_LIFT_KG, MAX_REPS, MAX_SETS, int_in_range, not_empty, real_in_range,
};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{fetch_last_log, insert_custom_exercise, insert_workout_log};
use crate::errors::AppResult;
use crate::models::custom_exercise::CustomExerciseEntry;
use crate::models::workout_log::WorkoutLogEntry;
use crate::ui::messages::{info, success};

/// Shown when an exercise has never been logged (or only skipped).
pub const NO_HISTORY: &str = "No history yet";

/// Logging of planned and custom exercises.
pub struct WorkoutLogic;

impl WorkoutLogic {
    /// Append one planned-exercise result. Returns the new row id.
    pub fn log_exercise(pool: &mut DbPool, entry: &WorkoutLogEntry) -> AppResult<i64> {
        not_empty("exercise name", &entry.exercise)?;
        int_in_range("sets", entry.sets, 0, MAX_SETS)?;
        int_in_range("reps", entry.reps, 0, MAX_REPS)?;
        real_in_range("weight", entry.weight, 0.0, MAX_LIFT_KG)?;

        let id = insert_workout_log(&pool.conn, entry)?;

        let what = if entry.skipped {
            format!("{} (skipped)", entry.exercise)
        } else {
            format!(
                "{}: {}x{} @ {}",
                entry.exercise,
                entry.sets,
                entry.reps,
                entry.weight_label()
            )
        };
        ttlog_quiet(&pool.conn, "workout", &entry.date_str(), &what);

        success(format!("Logged {} for {} ({})", what, entry.day, entry.date_str()));
        Ok(id)
    }

    /// Append an extra exercise that is not part of the plan.
    pub fn log_custom(pool: &mut DbPool, entry: &CustomExerciseEntry) -> AppResult<i64> {
        not_empty("exercise name", &entry.exercise)?;
        int_in_range("sets", entry.sets, 0, MAX_SETS)?;
        int_in_range("reps", entry.reps, 0, MAX_CUSTOM_REPS)?;
        real_in_range("weight", entry.weight, 0.0, MAX_LIFT_KG)?;

        let id = insert_custom_exercise(&pool.conn, entry)?;

        ttlog_quiet(
            &pool.conn,
            "custom",
            &entry.date_str(),
            &format!("{}: {}x{}", entry.exercise, entry.sets, entry.reps),
        );

        success(format!(
            "Logged custom exercise {} for {} ({})",
            entry.exercise,
            entry.day,
            entry.date_str()
        ));
        Ok(id)
    }

    /// History line for `exercise`, based on its last non-skipped entry.
    pub fn history(pool: &DbPool, exercise: &str) -> AppResult<String> {
        Ok(fetch_last_log(&pool.conn, exercise)?
            .map(|e| e.history_line())
            .unwrap_or_else(|| NO_HISTORY.to_string()))
    }

    pub fn print_history(pool: &DbPool, exercise: &str) -> AppResult<()> {
        info(format!("{}: {}", exercise, Self::history(pool, exercise)?));
        Ok(())
    }
}
