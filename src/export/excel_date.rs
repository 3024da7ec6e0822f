// src/export/excel_date.rs

use chrono::NaiveDate;

/// Excel number format used for date cells.
pub(crate) const DATE_FORMAT: &str = "yyyy-mm-dd";

/// Days since the Excel epoch (1899-12-30), i.e. the cell's serial value.
pub(crate) fn date_to_excel_serial(d: NaiveDate) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(NaiveDate::MIN);
    (d - epoch).num_days() as f64
}
