use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date::parse_period;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { target, period } = cmd {
        let bounds = match period.as_deref() {
            None | Some("all") => None,
            Some(p) => Some(parse_period(p)?),
        };

        let pool = DbPool::open_ready(&cfg.database)?;
        ListLogic::print(&pool, *target, bounds)?;
    }
    Ok(())
}
