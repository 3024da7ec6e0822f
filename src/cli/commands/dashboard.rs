use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::DashboardLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date::date_or_today;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { date } = cmd {
        let reference = date_or_today(date.as_ref())?;
        let pool = DbPool::open_ready(&cfg.database)?;

        let dashboard = DashboardLogic::build(&pool, reference, cfg.recent_activity_limit)?;
        DashboardLogic::print(&dashboard, cfg);
    }
    Ok(())
}
