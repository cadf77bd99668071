use super::minutes::to_minutes;
use crate::models::entry::DailyEntry;
use crate::models::settings::Settings;
use crate::models::stats::DailyStats;

/// Derive worked time, lateness and earnings for one day.
///
/// Never fails: missing or nonsensical times collapse to zero figures.
pub fn compute_daily(entry: &DailyEntry, settings: &Settings) -> DailyStats {
    let late_minutes = late_minutes(entry, settings);
    let worked_minutes = worked_minutes(entry);

    let total_hours = worked_minutes as f64 / 60.0;
    let late_hours = late_minutes as f64 / 60.0;

    DailyStats {
        date: entry.date,
        worked_minutes,
        late_minutes,
        total_hours,
        late_hours,
        earnings: total_hours * settings.hourly_rate,
        is_complete: entry.time_in.is_some() && entry.time_out.is_some(),
    }
}

/// Minutes past the expected start. Independent of clock-out.
fn late_minutes(entry: &DailyEntry, settings: &Settings) -> i64 {
    if entry.time_in.is_none() || settings.expected_start_time.is_none() {
        return 0;
    }

    let actual = to_minutes(entry.time_in.as_ref());
    let expected = to_minutes(settings.expected_start_time.as_ref());

    if actual > expected {
        actual.saturating_sub(expected)
    } else {
        0
    }
}

/// Clock-out minus clock-in, less a positive break, clamped at zero.
/// Clock-out before clock-in is not treated as an overnight shift.
fn worked_minutes(entry: &DailyEntry) -> i64 {
    if entry.time_in.is_none() || entry.time_out.is_none() {
        return 0;
    }

    let mut duration =
        to_minutes(entry.time_out.as_ref()).saturating_sub(to_minutes(entry.time_in.as_ref()));

    if entry.break_start.is_some() && entry.break_end.is_some() {
        let break_duration = to_minutes(entry.break_end.as_ref())
            .saturating_sub(to_minutes(entry.break_start.as_ref()));
        if break_duration > 0 {
            duration = duration.saturating_sub(break_duration);
        }
    }

    duration.max(0)
}
