use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::DailyEntry;
use crate::models::time_of_day::{TimeOfDay, optional};
use crate::utils::date::month_bounds;
use chrono::{Local, NaiveDate};
use rusqlite::{OptionalExtension, Row, params};
use std::collections::HashMap;

pub fn map_row(row: &Row) -> rusqlite::Result<DailyEntry> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let time_in: Option<String> = row.get("time_in")?;
    let break_start: Option<String> = row.get("break_start")?;
    let break_end: Option<String> = row.get("break_end")?;
    let time_out: Option<String> = row.get("time_out")?;

    Ok(DailyEntry {
        date,
        time_in: optional(time_in.as_deref()),
        break_start: optional(break_start.as_deref()),
        break_end: optional(break_end.as_deref()),
        time_out: optional(time_out.as_deref()),
    })
}

fn as_db(t: &Option<TimeOfDay>) -> Option<&str> {
    t.as_ref().map(TimeOfDay::as_str)
}

pub fn load_entry(pool: &mut DbPool, date: &NaiveDate) -> AppResult<Option<DailyEntry>> {
    let entry = pool
        .conn
        .query_row(
            "SELECT date, time_in, break_start, break_end, time_out
             FROM entries WHERE date = ?1",
            [date.format("%Y-%m-%d").to_string()],
            map_row,
        )
        .optional()?;
    Ok(entry)
}

/// Entries with `from <= date <= to`, keyed by date.
pub fn load_entries_between(
    pool: &mut DbPool,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<HashMap<NaiveDate, DailyEntry>> {
    let mut stmt = pool.conn.prepare(
        "SELECT date, time_in, break_start, break_end, time_out
         FROM entries
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map(
        params![
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string()
        ],
        map_row,
    )?;

    let mut out = HashMap::new();
    for r in rows {
        let entry = r?;
        out.insert(entry.date, entry);
    }
    Ok(out)
}

/// All entries of a zero-based month.
pub fn load_month_entries(
    pool: &mut DbPool,
    year: i32,
    month_index: u32,
) -> AppResult<HashMap<NaiveDate, DailyEntry>> {
    let (from, to) = month_bounds(year, month_index)
        .ok_or_else(|| AppError::InvalidPeriod(format!("{year}-{}", month_index.saturating_add(1))))?;
    load_entries_between(pool, &from, &to)
}

/// Insert or replace the entry for its date.
pub fn upsert_entry(pool: &mut DbPool, entry: &DailyEntry) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO entries (date, time_in, break_start, break_end, time_out, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(date) DO UPDATE SET
            time_in = excluded.time_in,
            break_start = excluded.break_start,
            break_end = excluded.break_end,
            time_out = excluded.time_out,
            updated_at = excluded.updated_at",
        params![
            entry.date_str(),
            as_db(&entry.time_in),
            as_db(&entry.break_start),
            as_db(&entry.break_end),
            as_db(&entry.time_out),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

/// Returns the number of deleted rows (0 or 1).
pub fn delete_entry(pool: &mut DbPool, date: &NaiveDate) -> AppResult<usize> {
    let n = pool.conn.execute(
        "DELETE FROM entries WHERE date = ?1",
        [date.format("%Y-%m-%d").to_string()],
    )?;
    Ok(n)
}
