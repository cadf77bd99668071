use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Resolve `--period YYYY-MM` into `(year, zero-based month)`.
/// Without a period the current month is used.
pub fn resolve_period(period: &Option<String>) -> AppResult<(i32, u32)> {
    match period {
        Some(p) => parse_period(p),
        None => {
            let t = today();
            Ok((t.year(), t.month0()))
        }
    }
}

pub fn parse_period(p: &str) -> AppResult<(i32, u32)> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", p.trim()), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidPeriod(p.to_string()))?;
    Ok((first.year(), first.month0()))
}

/// First and last date of a zero-based month.
pub fn month_bounds(year: i32, month_index: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month_index.saturating_add(1), 1)?;
    let next = if month_index == 11 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month_index.saturating_add(2), 1)?
    };
    Some((first, next.pred_opt()?))
}
