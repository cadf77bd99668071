//! Pure time-accounting engine: no I/O, no shared state.

pub mod daily;
pub mod minutes;
pub mod month;
pub mod monthly;

pub use daily::compute_daily;
pub use minutes::to_minutes;
pub use month::{MonthDays, enumerate_month, month_label};
pub use monthly::aggregate_month;
