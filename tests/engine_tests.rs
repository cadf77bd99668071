use chrono::{Datelike, NaiveDate};
use rworkflow::core::calculator::{aggregate_month, compute_daily, enumerate_month, to_minutes};
use rworkflow::models::entry::DailyEntry;
use rworkflow::models::settings::Settings;
use rworkflow::models::time_of_day::TimeOfDay;
use std::collections::HashMap;

fn entry(date: NaiveDate, time_in: &str, bs: &str, be: &str, out: &str) -> DailyEntry {
    DailyEntry {
        date,
        time_in: TimeOfDay::parse(time_in),
        break_start: TimeOfDay::parse(bs),
        break_end: TimeOfDay::parse(be),
        time_out: TimeOfDay::parse(out),
    }
}

fn settings(rate: f64) -> Settings {
    Settings {
        hourly_rate: rate,
        currency: "USD".to_string(),
        expected_start_time: TimeOfDay::parse("09:00"),
    }
}

#[test]
fn to_minutes_examples() {
    assert_eq!(to_minutes(None), 0);
    assert_eq!(to_minutes(TimeOfDay::parse("7:30").as_ref()), 450);
    assert_eq!(to_minutes(TimeOfDay::parse("17:45").as_ref()), 1065);
}

#[test]
fn late_arrival_with_lunch_break() {
    let d = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
    let s = compute_daily(&entry(d, "09:15", "12:00", "13:00", "18:00"), &settings(25.0));

    assert_eq!(s.late_hours, 0.25);
    assert_eq!(s.total_hours, 7.75);
    assert_eq!(s.earnings, s.total_hours * 25.0);
    assert!(s.is_complete);
}

#[test]
fn open_day_reports_lateness_only() {
    let d = NaiveDate::from_ymd_opt(2024, 4, 3).unwrap();
    let s = compute_daily(&entry(d, "10:00", "", "", ""), &settings(25.0));

    assert_eq!(s.late_hours, 1.0);
    assert_eq!(s.total_hours, 0.0);
    assert!(!s.is_complete);
}

#[test]
fn earnings_follow_rate_sign() {
    let d = NaiveDate::from_ymd_opt(2024, 4, 4).unwrap();
    let e = entry(d, "08:00", "", "", "12:30");
    for rate in [0.0, 12.5, -3.0] {
        let s = compute_daily(&e, &settings(rate));
        assert_eq!(s.earnings, s.total_hours * rate);
    }
}

#[test]
fn month_lengths_match_calendar() {
    assert_eq!(enumerate_month(2024, 1).count(), 29);
    assert_eq!(enumerate_month(2023, 1).count(), 28);
    assert_eq!(enumerate_month(2023, 3).count(), 30);
    assert_eq!(enumerate_month(2023, 0).count(), 31);
}

#[test]
fn aggregate_equals_sum_of_daily_results() {
    let mut entries = HashMap::new();
    for (day, time_in, out) in [(1, "09:00", "17:00"), (2, "09:45", "17:00"), (3, "09:00", ""), (4, "13:00", "09:00")] {
        let d = NaiveDate::from_ymd_opt(2024, 2, day).unwrap();
        entries.insert(d, entry(d, time_in, "12:00", "12:30", out));
    }
    let st = settings(20.0);

    let totals = aggregate_month(enumerate_month(2024, 1), &entries, &st);

    let daily: Vec<_> = enumerate_month(2024, 1)
        .map(|d| {
            let e = entries.get(&d).cloned().unwrap_or_else(|| DailyEntry::empty(d));
            compute_daily(&e, &st)
        })
        .collect();

    let hours: f64 = daily.iter().map(|s| s.total_hours).sum();
    let late: f64 = daily.iter().map(|s| s.late_hours).sum();
    let earned: f64 = daily.iter().map(|s| s.earnings).sum();
    let worked = daily.iter().filter(|s| s.total_hours > 0.0).count() as u32;

    assert_eq!(totals.total_hours, hours);
    assert_eq!(totals.total_late_hours, late);
    assert_eq!(totals.total_earnings, earned);
    assert_eq!(totals.days_worked, worked);
    assert_eq!(totals.days_worked, 2);
    assert!(daily.iter().all(|s| s.date.month() == 2));
}
