//! Plain-text month digest handed to the summary collaborator.

use crate::models::month_report::MonthReport;
use crate::models::settings::Settings;
use crate::models::stats::DailyStats;

/// Render the digest for the recorded days of a month.
///
/// Figures are printed with two decimals. Days without an entry are left
/// out so the digest only talks about days the user actually logged.
pub fn build_digest(report: &MonthReport, recorded: &[DailyStats], settings: &Settings) -> String {
    let mut lines = vec![
        format!("Work summary for {}", report.label),
        format!("Hourly rate: {} {}", settings.hourly_rate, settings.currency),
        match &settings.expected_start_time {
            Some(t) => format!("Expected start: {t}"),
            None => "Expected start: not set".to_string(),
        },
    ];

    if recorded.is_empty() {
        lines.push(String::new());
        lines.push("No entries recorded.".to_string());
    }

    for s in recorded {
        lines.push(String::new());
        lines.push(format!("Date: {}", s.date.format("%Y-%m-%d")));
        lines.push(format!("Hours Worked: {:.2}", s.total_hours));
        lines.push(format!("Late Hours: {:.2}", s.late_hours));
        lines.push(format!("Earnings: {:.2}", s.earnings));
    }

    let t = &report.totals;
    lines.push(String::new());
    lines.push(format!(
        "Totals: {:.2} hours, {:.2} late hours, {:.2} {} earned, {} days worked",
        t.total_hours, t.total_late_hours, t.total_earnings, settings.currency, t.days_worked
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::logic::Core;
    use crate::models::entry::DailyEntry;
    use crate::models::time_of_day::TimeOfDay;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    #[test]
    fn digest_lists_only_recorded_days() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        let mut entries = HashMap::new();
        entries.insert(
            date,
            DailyEntry {
                date,
                time_in: TimeOfDay::parse("09:15"),
                break_start: TimeOfDay::parse("12:00"),
                break_end: TimeOfDay::parse("13:00"),
                time_out: TimeOfDay::parse("18:00"),
            },
        );
        let settings = Settings::default();
        let report = Core::build_month_report(2024, 1, &entries, &settings);
        let recorded = Core::recorded_days(&report, &entries);

        let text = build_digest(&report, &recorded, &settings);

        assert!(text.starts_with("Work summary for February 2024\n"));
        assert!(text.contains("Hourly rate: 25 USD"));
        assert!(text.contains("Date: 2024-02-05\nHours Worked: 7.75\nLate Hours: 0.25\nEarnings: 193.75"));
        assert_eq!(text.matches("Date: ").count(), 1);
        assert!(text.contains("1 days worked"));
    }

    #[test]
    fn empty_month_digest() {
        let settings = Settings {
            expected_start_time: None,
            ..Settings::default()
        };
        let report = Core::build_month_report(2023, 1, &HashMap::new(), &settings);
        let text = build_digest(&report, &[], &settings);
        assert!(text.contains("Expected start: not set"));
        assert!(text.contains("No entries recorded."));
    }

    #[test]
    fn digest_layout_is_line_exact() {
        let settings = Settings {
            expected_start_time: None,
            ..Settings::default()
        };
        let report = Core::build_month_report(2023, 1, &HashMap::new(), &settings);
        let text = build_digest(&report, &[], &settings);
        assert_eq!(
            text,
            "Work summary for February 2023\n\
             Hourly rate: 25 USD\n\
             Expected start: not set\n\
             \n\
             No entries recorded.\n\
             \n\
             Totals: 0.00 hours, 0.00 late hours, 0.00 USD earned, 0 days worked\n"
        );
    }
}
