use super::daily::compute_daily;
use crate::models::entry::DailyEntry;
use crate::models::settings::Settings;
use crate::models::stats::MonthlyStats;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Fold the daily figures of every date in `dates` into monthly totals.
///
/// Dates without an entry are treated as blank days and add nothing. A day
/// only counts as worked when its net hours are strictly positive.
pub fn aggregate_month<I>(
    dates: I,
    entries: &HashMap<NaiveDate, DailyEntry>,
    settings: &Settings,
) -> MonthlyStats
where
    I: IntoIterator<Item = NaiveDate>,
{
    dates
        .into_iter()
        .map(|date| match entries.get(&date) {
            Some(entry) => compute_daily(entry, settings),
            None => compute_daily(&DailyEntry::empty(date), settings),
        })
        .fold(MonthlyStats::default(), |mut acc, day| {
            acc.total_hours += day.total_hours;
            acc.total_late_hours += day.late_hours;
            acc.total_earnings += day.earnings;
            if day.total_hours > 0.0 {
                acc.days_worked += 1;
            }
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::month::enumerate_month;
    use crate::models::time_of_day::TimeOfDay;

    fn entry(date: NaiveDate, time_in: &str, time_out: &str) -> DailyEntry {
        DailyEntry {
            date,
            time_in: TimeOfDay::parse(time_in),
            break_start: TimeOfDay::parse("12:00"),
            break_end: TimeOfDay::parse("13:00"),
            time_out: TimeOfDay::parse(time_out),
        }
    }

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, day).unwrap()
    }

    #[test]
    fn empty_month_is_all_zero() {
        let stats = aggregate_month(enumerate_month(2024, 1), &HashMap::new(), &Settings::default());
        assert_eq!(stats, MonthlyStats::default());
    }

    #[test]
    fn totals_sum_daily_figures() {
        let mut entries = HashMap::new();
        entries.insert(d(1), entry(d(1), "09:00", "18:00")); // 8h
        entries.insert(d(2), entry(d(2), "09:30", "18:00")); // 7.5h, 0.5 late
        entries.insert(d(5), entry(d(5), "10:00", "")); // open day, 1h late

        let stats = aggregate_month(enumerate_month(2024, 1), &entries, &Settings::default());

        assert_eq!(stats.total_hours, 15.5);
        assert_eq!(stats.total_late_hours, 1.5);
        assert_eq!(stats.total_earnings, 15.5 * 25.0);
        assert_eq!(stats.days_worked, 2);
    }

    #[test]
    fn complete_day_with_zero_net_time_is_not_worked() {
        let mut entries = HashMap::new();
        entries.insert(d(3), entry(d(3), "18:00", "09:00"));

        let stats = aggregate_month(enumerate_month(2024, 1), &entries, &Settings::default());
        assert_eq!(stats.days_worked, 0);
        assert_eq!(stats.total_hours, 0.0);
    }

    #[test]
    fn entries_outside_the_date_range_are_ignored() {
        let outside = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut entries = HashMap::new();
        entries.insert(outside, entry(outside, "09:00", "18:00"));

        let stats = aggregate_month(enumerate_month(2024, 1), &entries, &Settings::default());
        assert_eq!(stats.days_worked, 0);
    }
}
