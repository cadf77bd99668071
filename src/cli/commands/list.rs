use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_month_entries;
use crate::errors::AppResult;
use crate::models::entry::DailyEntry;
use crate::models::month_report::MonthReport;
use crate::models::settings::Settings;
use crate::models::time_of_day::TimeOfDay;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_late, colorize_complete, colorize_optional};
use crate::utils::date;
use crate::utils::formatting::{
    format_currency, format_date_display, format_time_display, mins2readable,
};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;
use std::collections::HashMap;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let (year, month_index) = date::resolve_period(period)?;
        let settings = cfg.settings();

        let mut pool = DbPool::open_initialized(&cfg.database)?;
        let entries = load_month_entries(&mut pool, year, month_index)?;
        let report = Core::build_month_report(year, month_index, &entries, &settings);

        header(&report.label);
        print!("{}", render_days(&report, &entries, &settings));
        println!();
        super::summary::print_totals(&report, &settings);
    }
    Ok(())
}

/// One row per calendar day; days without an entry are greyed out.
pub fn render_days(
    report: &MonthReport,
    entries: &HashMap<NaiveDate, DailyEntry>,
    settings: &Settings,
) -> String {
    let mut table = Table::new(vec![
        Column::left("Date", 10),
        Column::left("Day", 7),
        Column::right("In", 8),
        Column::right("Break", 17),
        Column::right("Out", 8),
        Column::right("Worked", 8),
        Column::right("Late", 8),
        Column::right("Earnings", 12),
        Column::left("", 1),
    ]);

    for stats in &report.days {
        let entry = entries.get(&stats.date);
        let time = |pick: fn(&DailyEntry) -> Option<&TimeOfDay>| {
            colorize_optional(&format_time_display(entry.and_then(pick)))
        };

        let brk = match entry {
            Some(e) if e.break_start.is_some() || e.break_end.is_some() => format!(
                "{}-{}",
                format_time_display(e.break_start.as_ref()),
                format_time_display(e.break_end.as_ref())
            ),
            _ => colorize_optional("--:--"),
        };

        let earnings = if entry.is_some() {
            format_currency(stats.earnings, &settings.currency)
        } else {
            colorize_optional("-")
        };

        table.add_row(vec![
            stats.date.format("%Y-%m-%d").to_string(),
            format_date_display(&stats.date),
            time(|e| e.time_in.as_ref()),
            brk,
            time(|e| e.time_out.as_ref()),
            colorize_optional(&mins2readable(stats.worked_minutes)),
            format!(
                "{}{}{}",
                color_for_late(stats.late_minutes),
                mins2readable(stats.late_minutes),
                RESET
            ),
            earnings,
            colorize_complete(stats.is_complete, entry.is_some_and(|e| !e.is_blank())),
        ]);
    }

    table.render()
}
