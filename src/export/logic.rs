// src/export/logic.rs

use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_month_entries;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{DayExport, MonthExport};
use crate::models::settings::Settings;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High-level export of one month.
pub struct ExportLogic;

impl ExportLogic {
    /// Returns the number of day rows written; 0 means no file was created.
    pub fn export(
        pool: &mut DbPool,
        settings: &Settings,
        format: &ExportFormat,
        file: &str,
        period: (i32, u32),
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        let doc = Self::build(pool, settings, period)?;

        if doc.days.is_empty() {
            warning(format!("No entries found for {}.", doc.month));
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&doc, &path)?,
            ExportFormat::Json => export_json(&doc, &path)?,
        }

        Ok(doc.days.len())
    }

    /// Assemble the export document for the recorded days of a month.
    pub fn build(
        pool: &mut DbPool,
        settings: &Settings,
        (year, month_index): (i32, u32),
    ) -> AppResult<MonthExport> {
        let entries = load_month_entries(pool, year, month_index)?;
        let report = Core::build_month_report(year, month_index, &entries, settings);

        let days = Core::recorded_days(&report, &entries)
            .iter()
            .filter_map(|stats| {
                entries
                    .get(&stats.date)
                    .map(|entry| DayExport::new(entry, stats))
            })
            .collect();

        Ok(MonthExport {
            month: report.label,
            hourly_rate: settings.hourly_rate,
            currency: settings.currency.clone(),
            days,
            totals: report.totals,
        })
    }
}
