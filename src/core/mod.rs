pub mod calculator;
pub mod config;
pub mod del;
pub mod entry;
pub mod log;
pub mod logic;
pub mod report;
