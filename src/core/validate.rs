use crate::errors::{AppError, AppResult};

/// Form bounds, inclusive.
pub const MAX_SETS: i64 = 20;
pub const MAX_REPS: i64 = 200;
pub const MAX_CUSTOM_REPS: i64 = 100;
pub const MAX_LIFT_KG: f64 = 500.0;
pub const MAX_BODY_WEIGHT_KG: f64 = 200.0;
pub const MAX_BODY_FAT_PCT: f64 = 50.0;

pub fn int_in_range(field: &'static str, value: i64, min: i64, max: i64) -> AppResult<()> {
    if value < min || value > max {
        return Err(AppError::OutOfRange {
            field,
            min: min as f64,
            max: max as f64,
            value: value as f64,
        });
    }
    Ok(())
}

pub fn real_in_range(field: &'static str, value: f64, min: f64, max: f64) -> AppResult<()> {
    if !(min..=max).contains(&value) {
        return Err(AppError::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }
    Ok(())
}

pub fn not_empty(field: &'static str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::EmptyField(field));
    }
    Ok(())
}
