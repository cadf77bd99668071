use super::time_of_day::TimeOfDay;
use serde::Serialize;

pub const DEFAULT_HOURLY_RATE: f64 = 25.0;
pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_EXPECTED_START: &str = "09:00";

/// Snapshot of the user's pay and schedule settings.
///
/// A negative `hourly_rate` is accepted as-is and simply yields negative
/// earnings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub hourly_rate: f64,
    pub currency: String,
    pub expected_start_time: Option<TimeOfDay>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hourly_rate: DEFAULT_HOURLY_RATE,
            currency: DEFAULT_CURRENCY.to_string(),
            expected_start_time: TimeOfDay::parse(DEFAULT_EXPECTED_START),
        }
    }
}
