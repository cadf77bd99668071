use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_month_entries;
use crate::errors::AppResult;
use crate::models::month_report::MonthReport;
use crate::models::settings::Settings;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET};
use crate::utils::date;
use crate::utils::formatting::{format_currency, hours2};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { period } = cmd {
        let (year, month_index) = date::resolve_period(period)?;
        let settings = cfg.settings();

        let mut pool = DbPool::open_initialized(&cfg.database)?;
        let entries = load_month_entries(&mut pool, year, month_index)?;
        let report = Core::build_month_report(year, month_index, &entries, &settings);

        header(&report.label);
        print_totals(&report, &settings);
    }
    Ok(())
}

/// The four dashboard tiles.
pub fn print_totals(report: &MonthReport, settings: &Settings) {
    let t = &report.totals;
    println!("{CYAN}• Total hours:{RESET}    {}", hours2(t.total_hours));
    println!(
        "{CYAN}• Total earnings:{RESET} {}",
        format_currency(t.total_earnings, &settings.currency)
    );
    println!("{CYAN}• Total late:{RESET}     {}", hours2(t.total_late_hours));
    println!("{CYAN}• Days worked:{RESET}    {}", t.days_worked);
}
