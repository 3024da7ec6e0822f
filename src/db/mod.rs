pub mod initialize;
pub mod log;
pub mod maintenance;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod stats;

/// Data tables, in the order they are created and cleared.
pub const DATA_TABLES: [&str; 4] = [
    "workout_logs",
    "custom_exercises",
    "sports_logs",
    "body_metrics",
];
