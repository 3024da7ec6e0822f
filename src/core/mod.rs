pub mod calculator;
pub mod config;
pub mod dashboard;
pub mod list;
pub mod log;
pub mod logic;
pub mod metrics;
pub mod progress;
pub mod sports;
pub mod validate;
pub mod workout;
