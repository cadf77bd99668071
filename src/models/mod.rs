pub mod entry;
pub mod month_report;
pub mod settings;
pub mod stats;
pub mod time_of_day;
