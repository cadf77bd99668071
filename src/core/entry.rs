use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_entry, upsert_entry};
use crate::errors::AppResult;
use crate::models::entry::{DailyEntry, EntryField};
use crate::models::time_of_day::TimeOfDay;
use crate::ui::messages::warning;
use chrono::{NaiveDate, NaiveTime};

/// One requested change: `None` clears the field.
pub type FieldUpdate = (EntryField, Option<TimeOfDay>);

pub struct EntryLogic;

impl EntryLogic {
    /// Create the entry for `date` or merge the given fields into it.
    /// Fields not mentioned keep their stored value.
    pub fn apply(
        pool: &mut DbPool,
        date: NaiveDate,
        updates: &[FieldUpdate],
    ) -> AppResult<DailyEntry> {
        let existing = load_entry(pool, &date)?;
        let is_new = existing.is_none();
        let mut entry = existing.unwrap_or_else(|| DailyEntry::empty(date));

        for (field, value) in updates {
            if let Some(t) = value
                && NaiveTime::parse_from_str(t.as_str(), "%H:%M").is_err()
            {
                warning(format!(
                    "'{}' for {} is not a HH:MM time; it will count as {} minutes.",
                    t,
                    field.as_str(),
                    crate::core::calculator::to_minutes(Some(t))
                ));
            }
            *entry.field_mut(*field) = value.clone();
        }

        upsert_entry(pool, &entry)?;

        let (operation, verb) = if is_new { ("add", "Added") } else { ("edit", "Updated") };
        ttlog(
            &pool.conn,
            operation,
            &entry.date_str(),
            &format!("{} entry: {}", verb, describe(&entry)),
        )?;

        Ok(entry)
    }
}

/// "in=09:00 break=12:00-13:00 out=18:00", absent fields shown as "-".
pub fn describe(entry: &DailyEntry) -> String {
    let show = |t: &Option<TimeOfDay>| t.as_ref().map_or("-".to_string(), |v| v.to_string());
    format!(
        "in={} break={}-{} out={}",
        show(&entry.time_in),
        show(&entry.break_start),
        show(&entry.break_end),
        show(&entry.time_out)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> Option<TimeOfDay> {
        TimeOfDay::parse(s)
    }

    #[test]
    fn merge_keeps_untouched_fields() {
        let mut pool = DbPool::in_memory().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();

        EntryLogic::apply(&mut pool, date, &[(EntryField::TimeIn, t("09:00"))]).unwrap();
        let merged = EntryLogic::apply(
            &mut pool,
            date,
            &[
                (EntryField::BreakStart, t("12:00")),
                (EntryField::BreakEnd, t("13:00")),
                (EntryField::TimeOut, t("18:00")),
            ],
        )
        .unwrap();

        assert_eq!(merged.time_in, t("09:00"));
        assert_eq!(merged.time_out, t("18:00"));
        assert_eq!(describe(&merged), "in=09:00 break=12:00-13:00 out=18:00");

        let cleared =
            EntryLogic::apply(&mut pool, date, &[(EntryField::TimeOut, None)]).unwrap();
        assert_eq!(cleared.time_out, None);
        assert_eq!(cleared.break_end, t("13:00"));
    }

    #[test]
    fn writes_audit_log() {
        let mut pool = DbPool::in_memory().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        EntryLogic::apply(&mut pool, date, &[(EntryField::TimeIn, t("09:00"))]).unwrap();
        EntryLogic::apply(&mut pool, date, &[(EntryField::TimeOut, t("17:00"))]).unwrap();

        let ops: Vec<String> = crate::db::log::load_log(&pool.conn)
            .unwrap()
            .into_iter()
            .filter(|r| r.target == "2024-05-06")
            .map(|r| r.operation)
            .collect();
        assert_eq!(ops, vec!["add", "edit"]);
    }
}
