//! Formatting utilities used for CLI and export outputs.

use crate::models::time_of_day::TimeOfDay;
use chrono::NaiveDate;

/// 465 → "07h 45m".
pub fn mins2readable(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}h {:02}m", sign, m / 60, m % 60)
}

/// Hours with two decimals, as shown on the dashboard tiles.
pub fn hours2(h: f64) -> String {
    format!("{:.2} h", h)
}

/// "Mon 4" style short day label.
pub fn format_date_display(date: &NaiveDate) -> String {
    date.format("%a %-d").to_string()
}

/// 12-hour clock rendering of a raw time, "--:--" when absent.
pub fn format_time_display(t: Option<&TimeOfDay>) -> String {
    let Some(t) = t else {
        return "--:--".to_string();
    };

    let (hours, minutes) = t.as_str().split_once(':').unwrap_or((t.as_str(), ""));
    let h: i64 = hours.trim().parse().unwrap_or(0);
    let ampm = if h >= 12 { "PM" } else { "AM" };
    let h12 = match h % 12 {
        0 => 12,
        other => other,
    };

    format!("{}:{} {}", h12, minutes, ampm)
}

/// en-US style money: "$1,234.50", "-€12.00", "CHF 3.10".
pub fn format_currency(amount: f64, currency: &str) -> String {
    let code = currency.trim().to_uppercase();
    let prefix = match code.as_str() {
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "JPY" => "¥".to_string(),
        "PHP" => "₱".to_string(),
        "INR" => "₹".to_string(),
        other => format!("{other} "),
    };

    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    format!("{}{}{}.{}", sign, prefix, group_thousands(int_part), frac_part)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_formatting() {
        assert_eq!(format_currency(200.0, "USD"), "$200.00");
        assert_eq!(format_currency(1234567.891, "usd"), "$1,234,567.89");
        assert_eq!(format_currency(-12.5, "EUR"), "-€12.50");
        assert_eq!(format_currency(3.1, "CHF"), "CHF 3.10");
        assert_eq!(format_currency(999.999, "GBP"), "£1,000.00");
    }

    #[test]
    fn time_display() {
        assert_eq!(format_time_display(None), "--:--");
        assert_eq!(format_time_display(TimeOfDay::parse("09:05").as_ref()), "9:05 AM");
        assert_eq!(format_time_display(TimeOfDay::parse("00:30").as_ref()), "12:30 AM");
        assert_eq!(format_time_display(TimeOfDay::parse("12:00").as_ref()), "12:00 PM");
        assert_eq!(format_time_display(TimeOfDay::parse("18:45").as_ref()), "6:45 PM");
    }

    #[test]
    fn readable_minutes() {
        assert_eq!(mins2readable(465), "07h 45m");
        assert_eq!(mins2readable(0), "00h 00m");
    }

    #[test]
    fn date_display() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(format_date_display(&d), "Mon 4");
    }
}
