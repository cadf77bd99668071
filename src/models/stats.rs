use chrono::NaiveDate;
use serde::Serialize;

/// Derived figures for a single day. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyStats {
    pub date: NaiveDate,
    pub worked_minutes: i64,
    pub late_minutes: i64,
    pub total_hours: f64,
    pub late_hours: f64,
    pub earnings: f64,
    pub is_complete: bool,
}

/// Totals folded over every date of a month.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthlyStats {
    pub total_hours: f64,
    pub total_late_hours: f64,
    pub total_earnings: f64,
    pub days_worked: u32,
}
