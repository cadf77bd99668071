use chrono::{Datelike, NaiveDate};

/// Every calendar date of one month, in ascending order.
///
/// The cursor walks day by day and stops when the month component changes,
/// so leap years and month lengths come from the calendar itself. Clone the
/// value before iterating to replay the same dates.
#[derive(Debug, Clone)]
pub struct MonthDays {
    cursor: Option<NaiveDate>,
    month: u32,
}

impl Iterator for MonthDays {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let d = self.cursor?;
        if d.month() != self.month {
            self.cursor = None;
            return None;
        }
        self.cursor = d.succ_opt();
        Some(d)
    }
}

/// `month_index` is zero-based (0 = January). An index past December yields
/// an empty sequence.
pub fn enumerate_month(year: i32, month_index: u32) -> MonthDays {
    let month = month_index.saturating_add(1);
    MonthDays {
        cursor: NaiveDate::from_ymd_opt(year, month, 1),
        month,
    }
}

/// "February 2024" style header for a zero-based month.
pub fn month_label(year: i32, month_index: u32) -> String {
    match NaiveDate::from_ymd_opt(year, month_index.saturating_add(1), 1) {
        Some(first) => first.format("%B %Y").to_string(),
        None => format!("{year}-{:02}", month_index.saturating_add(1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn february_respects_leap_years() {
        assert_eq!(enumerate_month(2024, 1).count(), 29);
        assert_eq!(enumerate_month(2023, 1).count(), 28);
        assert_eq!(enumerate_month(1900, 1).count(), 28);
        assert_eq!(enumerate_month(2000, 1).count(), 29);
    }

    #[test]
    fn month_lengths() {
        let lengths: Vec<usize> = (0..12).map(|m| enumerate_month(2023, m).count()).collect();
        assert_eq!(lengths, vec![31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
    }

    #[test]
    fn dates_are_ordered_and_in_month() {
        let days: Vec<NaiveDate> = enumerate_month(2024, 11).collect();
        assert_eq!(days.first(), NaiveDate::from_ymd_opt(2024, 12, 1).as_ref());
        assert_eq!(days.last(), NaiveDate::from_ymd_opt(2024, 12, 31).as_ref());
        assert!(days.windows(2).all(|w| w[0] < w[1]));
        assert!(days.iter().all(|d| d.month() == 12));
    }

    #[test]
    fn clone_replays_the_same_sequence() {
        let days = enumerate_month(2025, 5);
        let a: Vec<_> = days.clone().collect();
        let b: Vec<_> = days.collect();
        assert_eq!(a, b);
        assert_eq!(a.len(), 30);
    }

    #[test]
    fn out_of_range_month_is_empty() {
        assert_eq!(enumerate_month(2024, 12).count(), 0);
        assert_eq!(enumerate_month(2024, u32::MAX).count(), 0);
    }

    #[test]
    fn labels() {
        assert_eq!(month_label(2024, 1), "February 2024");
        assert_eq!(month_label(2026, 9), "October 2026");
    }
}
