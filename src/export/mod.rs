// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod json_csv;
pub mod logic;
pub mod model;
mod xlsx;

pub use logic::ExportLogic;
pub use model::{BackupDocument, BodyMetricExport, WorkoutLogExport};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Which tables go into the export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportDataset {
    /// Workout logs and body metrics
    All,
    /// Workout logs only
    Logs,
    /// Body metrics only
    Metrics,
}

impl ExportDataset {
    pub fn includes_logs(&self) -> bool {
        matches!(self, ExportDataset::All | ExportDataset::Logs)
    }

    pub fn includes_metrics(&self) -> bool {
        matches!(self, ExportDataset::All | ExportDataset::Metrics)
    }
}
