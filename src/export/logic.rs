// src/export/logic.rs

use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{DateBounds, load_body_metrics, load_workout_logs};
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{BackupDocument, BodyMetricExport, WorkoutLogExport};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportDataset, ExportFormat};
use crate::ui::messages::warning;
use crate::utils::date::parse_period;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Project the requested tables into a [`BackupDocument`].
    pub fn build_document(
        pool: &DbPool,
        dataset: ExportDataset,
        bounds: DateBounds,
    ) -> AppResult<BackupDocument> {
        let logs = if dataset.includes_logs() {
            let rows = load_workout_logs(&pool.conn, bounds)?;
            Some(rows.iter().map(WorkoutLogExport::from).collect())
        } else {
            None
        };

        let metrics = if dataset.includes_metrics() {
            let rows = load_body_metrics(&pool.conn, bounds)?;
            Some(rows.iter().map(BodyMetricExport::from).collect())
        } else {
            None
        };

        Ok(BackupDocument { logs, metrics })
    }

    /// Export workout logs and/or body metrics.
    ///
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"` or `YYYY`, `YYYY-MM`, `YYYY-MM-DD`,
    ///   optionally as `start:end` with both sides in the same shape
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        dataset: ExportDataset,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        if format == ExportFormat::Csv && dataset == ExportDataset::All {
            return Err(AppError::InvalidExportFormat(
                "csv holds a single dataset; pass --dataset logs or --dataset metrics".to_string(),
            ));
        }

        let bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_period(r)?),
        };

        let doc = Self::build_document(pool, dataset, bounds)?;

        if doc.is_empty() {
            warning("No entries found for selected range.");
            return Ok(());
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Json => export_json(&doc, path)?,
            ExportFormat::Xlsx => export_xlsx(&doc, path)?,
            ExportFormat::Csv => match (&doc.logs, &doc.metrics) {
                (Some(logs), _) => export_csv(logs, path)?,
                (None, Some(metrics)) => export_csv(metrics, path)?,
                (None, None) => return Err(AppError::Export("no dataset selected".to_string())),
            },
        }

        ttlog_quiet(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("Exported to {}", path.display()),
        );

        Ok(())
    }
}
