use crate::models::time_of_day::TimeOfDay;

/// Convert a clock value into minutes since midnight.
///
/// Absent input gives 0, so callers must check presence themselves before
/// treating the result as a real time. Parts are split on ':' and any part
/// that does not parse as an integer counts as 0. No range checks are done:
/// "25:99" is 1599.
pub fn to_minutes(t: Option<&TimeOfDay>) -> i64 {
    let Some(t) = t else {
        return 0;
    };

    let mut parts = t.as_str().split(':');
    let hours = parse_part(parts.next());
    let minutes = parse_part(parts.next());

    hours.saturating_mul(60).saturating_add(minutes)
}

fn parse_part(part: Option<&str>) -> i64 {
    part.and_then(|p| p.trim().parse::<i64>().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> Option<TimeOfDay> {
        TimeOfDay::parse(s)
    }

    #[test]
    fn absent_is_zero() {
        assert_eq!(to_minutes(None), 0);
        assert_eq!(to_minutes(t("").as_ref()), 0);
    }

    #[test]
    fn parses_hours_and_minutes() {
        assert_eq!(to_minutes(t("09:15").as_ref()), 555);
        assert_eq!(to_minutes(t("9:05").as_ref()), 545);
        assert_eq!(to_minutes(t("00:00").as_ref()), 0);
        assert_eq!(to_minutes(t("23:59").as_ref()), 1439);
    }

    #[test]
    fn out_of_range_values_are_not_rejected() {
        assert_eq!(to_minutes(t("25:99").as_ref()), 1599);
    }

    #[test]
    fn malformed_parts_degrade_to_zero() {
        assert_eq!(to_minutes(t("ab:cd").as_ref()), 0);
        assert_eq!(to_minutes(t("10:xx").as_ref()), 600);
        assert_eq!(to_minutes(t("xx:30").as_ref()), 30);
        assert_eq!(to_minutes(t("8").as_ref()), 480);
    }
}
