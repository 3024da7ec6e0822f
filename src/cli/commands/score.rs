use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::DashboardLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date::date_or_today;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Score { date } = cmd {
        let reference = date_or_today(date.as_ref())?;
        let pool = DbPool::open_ready(&cfg.database)?;

        let d = DashboardLogic::build(&pool, reference, 0)?;
        println!("Week: {} ({} to {})", d.window.label(), d.window.start, d.window.end);
        println!("Weekly Score: {}", d.score.score);
        println!("Sports Points: {}", d.score.sport_points);
    }
    Ok(())
}
