use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::compute_daily;
use crate::core::entry::{EntryLogic, FieldUpdate, describe};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::EntryField;
use crate::models::time_of_day::TimeOfDay;
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::formatting::{format_currency, mins2readable};

/// Create or update the entry of a day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        time_in,
        break_start,
        break_end,
        time_out,
        clear,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let mut updates: Vec<FieldUpdate> = Vec::new();
        for (field, value) in [
            (EntryField::TimeIn, time_in),
            (EntryField::BreakStart, break_start),
            (EntryField::BreakEnd, break_end),
            (EntryField::TimeOut, time_out),
        ] {
            if let Some(v) = value {
                updates.push((field, TimeOfDay::parse(v.trim())));
            }
        }

        for code in clear {
            let field =
                EntryField::from_code(code).ok_or_else(|| AppError::InvalidField(code.clone()))?;
            updates.push((field, None));
        }

        if updates.is_empty() {
            info("Nothing to change: pass --in, --break-start, --break-end, --out or --clear.");
            return Ok(());
        }

        let mut pool = DbPool::open_initialized(&cfg.database)?;
        let entry = EntryLogic::apply(&mut pool, d, &updates)?;

        let settings = cfg.settings();
        let stats = compute_daily(&entry, &settings);

        success(format!("Saved {}: {}", entry.date_str(), describe(&entry)));
        println!(
            "   Worked: {} | Late: {} | Earnings: {}{}",
            mins2readable(stats.worked_minutes),
            mins2readable(stats.late_minutes),
            format_currency(stats.earnings, &settings.currency),
            if stats.is_complete { "" } else { " (incomplete)" }
        );
    }

    Ok(())
}
