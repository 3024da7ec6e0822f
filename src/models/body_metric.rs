use chrono::NaiveDate;
use serde::Serialize;

/// A body composition reading. Every measurement is optional: the settings
/// form only asks for weight and body fat.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BodyMetricEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub weight: Option<f64>,
    pub body_fat: Option<f64>,
    pub lean_mass: Option<f64>,
    pub muscle_mass: Option<f64>,
    pub water_mass: Option<f64>,
    pub notes: String,
}

impl BodyMetricEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
