use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_entry, load_entry};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(pool: &mut DbPool, date: NaiveDate) -> AppResult<()> {
        let date_str = date.format("%Y-%m-%d").to_string();

        let entry = load_entry(pool, &date)?
            .ok_or_else(|| AppError::NoEntryForDate(date_str.clone()))?;

        delete_entry(pool, &date)?;

        ttlog(
            &pool.conn,
            "del",
            &date_str,
            &format!("Deleted entry: {}", crate::core::entry::describe(&entry)),
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deleting_missing_entry_is_an_error() {
        let mut pool = DbPool::in_memory().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert!(matches!(
            DeleteLogic::apply(&mut pool, date),
            Err(AppError::NoEntryForDate(_))
        ));
    }
}
