use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::progress::ProgressLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date::parse_period;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Progress { period } = cmd {
        let bounds = match period.as_deref() {
            None | Some("all") => None,
            Some(p) => Some(parse_period(p)?),
        };
        let pool = DbPool::open_ready(&cfg.database)?;

        let summary = ProgressLogic::load(&pool, bounds)?;
        ProgressLogic::print(&summary);
    }
    Ok(())
}
