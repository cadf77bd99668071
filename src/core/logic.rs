use crate::core::calculator::{aggregate_month, compute_daily, enumerate_month, month_label};
use crate::models::entry::DailyEntry;
use crate::models::month_report::MonthReport;
use crate::models::settings::Settings;
use crate::models::stats::DailyStats;
use chrono::NaiveDate;
use std::collections::HashMap;

pub struct Core;

impl Core {
    /// Per-day rows plus monthly totals for a zero-based month.
    pub fn build_month_report(
        year: i32,
        month_index: u32,
        entries: &HashMap<NaiveDate, DailyEntry>,
        settings: &Settings,
    ) -> MonthReport {
        let dates = enumerate_month(year, month_index);

        let days = dates
            .clone()
            .map(|date| Self::daily_for(date, entries, settings))
            .collect();

        let totals = aggregate_month(dates, entries, settings);

        MonthReport {
            year,
            month_index,
            label: month_label(year, month_index),
            days,
            totals,
        }
    }

    /// Stats only for the dates that actually have an entry.
    pub fn recorded_days(
        report: &MonthReport,
        entries: &HashMap<NaiveDate, DailyEntry>,
    ) -> Vec<DailyStats> {
        report
            .days
            .iter()
            .filter(|s| entries.contains_key(&s.date))
            .cloned()
            .collect()
    }

    fn daily_for(
        date: NaiveDate,
        entries: &HashMap<NaiveDate, DailyEntry>,
        settings: &Settings,
    ) -> DailyStats {
        match entries.get(&date) {
            Some(entry) => compute_daily(entry, settings),
            None => compute_daily(&DailyEntry::empty(date), settings),
        }
    }
}
