use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::workout::WorkoutLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { exercise } = cmd {
        let pool = DbPool::open_ready(&cfg.database)?;
        WorkoutLogic::print_history(&pool, exercise.trim())?;
    }
    Ok(())
}
