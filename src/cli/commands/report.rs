use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::report::build_digest;
use crate::db::pool::DbPool;
use crate::db::queries::load_month_entries;
use crate::errors::AppResult;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { period } = cmd {
        let (year, month_index) = date::resolve_period(period)?;
        let settings = cfg.settings();

        let mut pool = DbPool::open_initialized(&cfg.database)?;
        let entries = load_month_entries(&mut pool, year, month_index)?;
        let report = Core::build_month_report(year, month_index, &entries, &settings);
        let recorded = Core::recorded_days(&report, &entries);

        print!("{}", build_digest(&report, &recorded, &settings));
    }
    Ok(())
}
