use super::time_of_day::TimeOfDay;
use chrono::NaiveDate;
use serde::Serialize;

/// One day of raw clock data, keyed by `date`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyEntry {
    pub date: NaiveDate,                // ⇔ entries.date (TEXT "YYYY-MM-DD")
    pub time_in: Option<TimeOfDay>,     // ⇔ entries.time_in (NULL = absent)
    pub break_start: Option<TimeOfDay>, // ⇔ entries.break_start
    pub break_end: Option<TimeOfDay>,   // ⇔ entries.break_end
    pub time_out: Option<TimeOfDay>,    // ⇔ entries.time_out
}

/// The four editable clock fields of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    TimeIn,
    BreakStart,
    BreakEnd,
    TimeOut,
}

impl EntryField {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "in" => Some(Self::TimeIn),
            "break-start" | "bs" => Some(Self::BreakStart),
            "break-end" | "be" => Some(Self::BreakEnd),
            "out" => Some(Self::TimeOut),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryField::TimeIn => "in",
            EntryField::BreakStart => "break-start",
            EntryField::BreakEnd => "break-end",
            EntryField::TimeOut => "out",
        }
    }
}

impl DailyEntry {
    /// An entry with every time field absent.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            time_in: None,
            break_start: None,
            break_end: None,
            time_out: None,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn field_mut(&mut self, field: EntryField) -> &mut Option<TimeOfDay> {
        match field {
            EntryField::TimeIn => &mut self.time_in,
            EntryField::BreakStart => &mut self.break_start,
            EntryField::BreakEnd => &mut self.break_end,
            EntryField::TimeOut => &mut self.time_out,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.time_in.is_none()
            && self.break_start.is_none()
            && self.break_end.is_none()
            && self.time_out.is_none()
    }
}
