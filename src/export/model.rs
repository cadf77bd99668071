// src/export/model.rs

use crate::models::entry::DailyEntry;
use crate::models::stats::{DailyStats, MonthlyStats};
use serde::Serialize;

/// Flat row: raw times next to the figures derived from them.
#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub date: String,
    pub time_in: String,
    pub break_start: String,
    pub break_end: String,
    pub time_out: String,
    pub total_hours: f64,
    pub late_hours: f64,
    pub earnings: f64,
    pub is_complete: bool,
}

impl DayExport {
    pub fn new(entry: &DailyEntry, stats: &DailyStats) -> Self {
        let raw = |t: &Option<crate::models::time_of_day::TimeOfDay>| {
            t.as_ref().map(|v| v.to_string()).unwrap_or_default()
        };
        Self {
            date: stats.date.format("%Y-%m-%d").to_string(),
            time_in: raw(&entry.time_in),
            break_start: raw(&entry.break_start),
            break_end: raw(&entry.break_end),
            time_out: raw(&entry.time_out),
            total_hours: stats.total_hours,
            late_hours: stats.late_hours,
            earnings: stats.earnings,
            is_complete: stats.is_complete,
        }
    }
}

/// JSON document: the month, the settings used and the per-day rows.
#[derive(Serialize, Debug)]
pub struct MonthExport {
    pub month: String,
    pub hourly_rate: f64,
    pub currency: String,
    pub days: Vec<DayExport>,
    pub totals: MonthlyStats,
}
