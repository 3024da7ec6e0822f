pub mod body_metric;
pub mod custom_exercise;
pub mod day_name;
pub mod sports_log;
pub mod week;
pub mod workout_log;
