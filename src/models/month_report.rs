use super::stats::{DailyStats, MonthlyStats};

/// Everything the `list`, `summary` and `report` views need for one month.
#[derive(Debug, Default)]
pub struct MonthReport {
    pub year: i32,
    pub month_index: u32,
    pub label: String,
    pub days: Vec<DailyStats>,
    pub totals: MonthlyStats,
}
