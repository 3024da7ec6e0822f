use crate::core::validate::{MAX_BODY_FAT_PCT, MAX_BODY_WEIGHT_KG, real_in_range};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::insert_body_metric;
use crate::errors::AppResult;
use crate::models::body_metric::BodyMetricEntry;
use crate::ui::messages::success;
use crate::utils::formatting::{kg, percent};

pub struct MetricsLogic;

impl MetricsLogic {
    /// Append a body metric reading.
    pub fn record(pool: &mut DbPool, entry: &BodyMetricEntry) -> AppResult<i64> {
        if let Some(w) = entry.weight {
            real_in_range("weight", w, 0.0, MAX_BODY_WEIGHT_KG)?;
        }
        if let Some(bf) = entry.body_fat {
            real_in_range("body fat", bf, 0.0, MAX_BODY_FAT_PCT)?;
        }
        for (field, value) in [
            ("lean mass", entry.lean_mass),
            ("muscle mass", entry.muscle_mass),
            ("water mass", entry.water_mass),
        ] {
            if let Some(v) = value {
                real_in_range(field, v, 0.0, MAX_BODY_WEIGHT_KG)?;
            }
        }

        let id = insert_body_metric(&pool.conn, entry)?;

        let summary = format!("weight {}, body fat {}", kg(entry.weight), percent(entry.body_fat));
        ttlog_quiet(&pool.conn, "metrics", &entry.date_str(), &summary);

        success(format!("Updated body metrics for {}: {}", entry.date_str(), summary));
        Ok(id)
    }
}
